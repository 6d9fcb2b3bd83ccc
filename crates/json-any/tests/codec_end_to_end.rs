//! Text in, `Json` out, and back again.

use json_any::{json, Config, DecodeError, EncodeError, Json, KeyOrder};

const GLOSSARY: &str = r#"{"glossary":{"GlossDiv":{"GlossList":{"GlossEntry":{"Abbrev":"ISO 8879:1986","Acronym":"SGML","GlossDef":{"GlossSeeAlso":["GML","XML"],"para":"A meta-markup language, used to create markup languages such as DocBook."},"GlossSee":"markup","GlossTerm":"Standard Generalized Markup Language","ID":"SGML","SortAs":"SGML"}},"title":"S"},"title":"example glossary"}}"#;

fn glossary() -> Json {
    json!({
        "glossary": {
            "title": "example glossary",
            "GlossDiv": {
                "title": "S",
                "GlossList": {
                    "GlossEntry": {
                        "ID": "SGML",
                        "SortAs": "SGML",
                        "GlossTerm": "Standard Generalized Markup Language",
                        "Acronym": "SGML",
                        "Abbrev": "ISO 8879:1986",
                        "GlossDef": {
                            "para": "A meta-markup language, used to create markup languages such as DocBook.",
                            "GlossSeeAlso": ["GML", "XML"]
                        },
                        "GlossSee": "markup"
                    }
                }
            }
        }
    })
}

#[test]
fn numbers_decode_with_coercion() {
    let numbers = json_any::from_str("[-0, 0, 0.0, 0.1]").unwrap();
    assert_eq!(numbers.count(), Some(4));
    for i in 0..3 {
        let item = numbers.get(i).unwrap();
        assert_eq!(item.as_i64(), Some(0), "element {i}");
        assert_eq!(item.as_f64(), Some(0.0), "element {i}");
    }
    assert_eq!(numbers.get(3).and_then(Json::as_i64), None);
    assert_eq!(numbers.get(3).and_then(Json::as_f64), Some(0.1));
    assert_eq!(numbers.get(1), Some(&Json::Int(0)));
    assert!(numbers.get(2).is_some_and(Json::is_f64));
}

#[test]
fn nested_object() {
    let value = json_any::from_str(r#"{"a":{"b":[1,2,3]}}"#).unwrap();
    let three = value
        .get("a")
        .and_then(|a| a.get("b"))
        .and_then(|b| b.get(2))
        .and_then(Json::as_i64);
    assert_eq!(three, Some(3));
}

#[test]
fn glossary_decodes_and_encodes_sorted() {
    assert_eq!(json_any::from_str(GLOSSARY).unwrap(), glossary());

    let sorted = Config::new().with_key_order(KeyOrder::Sorted);
    assert_eq!(json_any::to_string_with(&glossary(), &sorted).unwrap(), GLOSSARY);
}

#[test]
fn encode_uses_insertion_order_by_default() {
    let value = json!({"z": 0, "a": [{"y": 1, "b": 2}]});
    assert_eq!(
        json_any::to_string(&value).unwrap(),
        r#"{"z":0,"a":[{"y":1,"b":2}]}"#
    );
}

#[test]
fn roundtrip_keeps_variants() {
    let value = json!({
        "null": null,
        "flag": false,
        "int": -9_007_199_254_740_993i64,
        "double": 5.0,
        "tiny": 1e-300,
        "text": "quote \" and \\ and \u{1F600}",
        "nested": [[], {}, [1, [2, [3]]]]
    });
    let bytes = json_any::to_vec(&value).unwrap();
    assert_eq!(json_any::from_slice(&bytes).unwrap(), value);
}

#[test]
fn doubles_roundtrip_bit_for_bit() {
    for d in [
        1.0715660391465826e-75,
        -1.81996730402717e-179,
        -1.603964615428183e143,
        f64::MIN_POSITIVE,
        f64::MAX,
    ] {
        let text = json_any::to_string(&Json::Double(d)).unwrap();
        let back = json_any::from_str(&text).unwrap();
        assert_eq!(back.as_f64().map(f64::to_bits), Some(d.to_bits()), "{text}");
    }
}

#[test]
fn configured_depth_above_parser_default() {
    let deep = "[".repeat(300) + &"]".repeat(300);
    let config = Config::new().with_max_depth(300);
    let value = json_any::from_str_with(&deep, &config).unwrap();
    assert_eq!(json_any::to_string_with(&value, &config).unwrap(), deep);

    let config = Config::new().with_max_depth(299);
    assert!(matches!(
        json_any::from_str_with(&deep, &config),
        Err(DecodeError::DepthLimitExceeded(299))
    ));
}

#[test]
fn decode_errors_are_not_absence() {
    let err = json_any::from_str("{\"a\": ").unwrap_err();
    assert!(matches!(err, DecodeError::Syntax(_)));

    let ok = json_any::from_str("{\"a\": null}").unwrap();
    assert_eq!(ok.get("a"), Some(&Json::Null));
    assert_eq!(ok.get("b"), None);
}

#[test]
fn depth_limit_applies_to_both_directions() {
    let deep = "[".repeat(5) + &"]".repeat(5);
    let config = Config::new().with_max_depth(4);
    assert!(matches!(
        json_any::from_str_with(&deep, &config),
        Err(DecodeError::DepthLimitExceeded(4))
    ));

    let value = json_any::from_str(&deep).unwrap();
    assert!(matches!(
        json_any::to_string_with(&value, &config),
        Err(EncodeError::DepthLimitExceeded(4))
    ));
    assert_eq!(json_any::to_string(&value).unwrap(), deep);
}

#[test]
fn non_finite_doubles_fail_to_encode() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = json_any::to_string(&json!({"x": bad})).unwrap_err();
        assert!(matches!(err, EncodeError::NonFiniteFloat(_)));
    }
}

#[test]
fn from_value_and_to_value() {
    let tree = serde_json::json!({"k": [1, 2.5]});
    let value = json_any::from_value(&tree).unwrap();
    assert_eq!(value, json!({"k": [1, 2.5]}));
    assert_eq!(json_any::to_value(&value).unwrap(), tree);
}
