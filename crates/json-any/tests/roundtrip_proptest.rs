//! Randomized round trips through the codec bridge.

use json_any::{Config, Json, KeyOrder, Map};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(value: &Json) -> u64 {
    let mut state = DefaultHasher::new();
    value.hash(&mut state);
    state.finish()
}

fn arb_json() -> impl Strategy<Value = Json> {
    let leaf = prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::Bool),
        any::<i64>().prop_map(Json::Int),
        any::<f64>()
            .prop_filter("finite", |d| d.is_finite())
            .prop_map(Json::Double),
        "[a-zA-Z0-9 _\\-\"\\\\/\u{e9}\u{1F600}]{0,12}".prop_map(Json::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Json::Array),
            prop::collection::vec(("[a-z]{0,4}", inner), 0..6)
                .prop_map(|entries| Json::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

proptest! {
    #[test]
    fn text_roundtrip(value in arb_json()) {
        let text = json_any::to_string(&value).unwrap();
        prop_assert_eq!(json_any::from_str(&text).unwrap(), value);
    }

    #[test]
    fn sorted_output_is_order_independent(value in arb_json()) {
        let sorted = Config::new().with_key_order(KeyOrder::Sorted);
        let first = json_any::to_string_with(&value, &sorted).unwrap();
        let reparsed = json_any::from_str(&first).unwrap();
        prop_assert_eq!(json_any::to_string_with(&reparsed, &sorted).unwrap(), first);
    }

    #[test]
    fn serde_roundtrip(value in arb_json()) {
        let text = serde_json::to_string(&value).unwrap();
        let back: Json = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn raw_roundtrip(value in arb_json()) {
        let raw = value.to_raw();
        prop_assert_eq!(Json::from_raw(raw.as_deref()), Some(value));
    }

    #[test]
    fn hash_survives_key_reordering(value in arb_json()) {
        // Raw objects are hash maps, so entries come back in arbitrary order.
        let back = Json::from_raw(value.to_raw().as_deref()).unwrap();
        prop_assert_eq!(hash_of(&back), hash_of(&value));
    }
}
