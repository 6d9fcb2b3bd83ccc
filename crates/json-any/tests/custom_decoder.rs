//! The codec bridge against hand-written formats.

use json_any::{
    decode, decode_with, encode, encode_with, json, CodingKey, Config, DecodeError, EncodeError,
    Json, KeyOrder, KeyedDecodingContainer, KeyedEncodingContainer, OrderedDecodingContainer,
    OrderedEncodingContainer, ScalarDecodingContainer, ScalarEncodingContainer, StructuredDecoder,
    StructuredEncoder,
};

/// A tiny in-memory format with integer keys and lenient number parsing.
#[derive(Debug)]
enum Node {
    Keyed(Vec<(CodingKey, Node)>),
    List(Vec<Node>),
    Nil,
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
    /// A scalar none of the typed reads accept.
    Opaque,
    /// Opens as a sequence whose first read fails; also reads as nil.
    Broken,
}

fn mismatch(expected: &'static str) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: "node",
    }
}

struct NodeDecoder<'a>(&'a Node);

struct NodeKeyed<'a>(&'a [(CodingKey, Node)]);

struct NodeOrdered<'a> {
    items: &'a [Node],
    broken: bool,
}

struct NodeScalar<'a>(&'a Node);

impl<'a> StructuredDecoder for NodeDecoder<'a> {
    type Keyed = NodeKeyed<'a>;
    type Ordered = NodeOrdered<'a>;
    type Scalar = NodeScalar<'a>;

    fn keyed_container(&self) -> Result<NodeKeyed<'a>, DecodeError> {
        match self.0 {
            Node::Keyed(entries) => Ok(NodeKeyed(entries)),
            _ => Err(mismatch("keyed")),
        }
    }

    fn ordered_container(&self) -> Result<NodeOrdered<'a>, DecodeError> {
        match self.0 {
            Node::List(items) => Ok(NodeOrdered {
                items,
                broken: false,
            }),
            Node::Broken => Ok(NodeOrdered {
                items: &[],
                broken: true,
            }),
            _ => Err(mismatch("ordered")),
        }
    }

    fn scalar_container(&self) -> Result<NodeScalar<'a>, DecodeError> {
        match self.0 {
            Node::Keyed(_) | Node::List(_) => Err(mismatch("scalar")),
            node => Ok(NodeScalar(node)),
        }
    }
}

impl<'a> KeyedDecodingContainer for NodeKeyed<'a> {
    type Decoder = NodeDecoder<'a>;

    fn all_keys(&self) -> Vec<CodingKey> {
        self.0.iter().map(|(key, _)| key.clone()).collect()
    }

    fn nested_decoder(&self, key: &CodingKey) -> Result<NodeDecoder<'a>, DecodeError> {
        let entries: &'a [(CodingKey, Node)] = self.0;
        entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, node)| NodeDecoder(node))
            .ok_or_else(|| DecodeError::KeyNotFound(key.to_string()))
    }
}

impl<'a> OrderedDecodingContainer for NodeOrdered<'a> {
    type Decoder = NodeDecoder<'a>;

    fn is_at_end(&self) -> bool {
        !self.broken && self.items.is_empty()
    }

    fn next_decoder(&mut self) -> Result<NodeDecoder<'a>, DecodeError> {
        let items: &'a [Node] = self.items;
        match items.split_first() {
            Some((first, rest)) if !self.broken => {
                self.items = rest;
                Ok(NodeDecoder(first))
            }
            _ => Err(DecodeError::EndOfSequence),
        }
    }
}

impl ScalarDecodingContainer for NodeScalar<'_> {
    fn decode_nil(&self) -> bool {
        matches!(self.0, Node::Nil | Node::Broken)
    }

    fn decode_string(&self) -> Result<String, DecodeError> {
        match self.0 {
            Node::Text(s) => Ok(s.clone()),
            _ => Err(mismatch("string")),
        }
    }

    fn decode_i64(&self) -> Result<i64, DecodeError> {
        match self.0 {
            Node::Int(i) => Ok(*i),
            Node::Text(s) => s.parse().map_err(|_| mismatch("int")),
            _ => Err(mismatch("int")),
        }
    }

    fn decode_f64(&self) -> Result<f64, DecodeError> {
        match self.0 {
            Node::Int(i) => Ok(*i as f64),
            Node::Float(d) => Ok(*d),
            _ => Err(mismatch("double")),
        }
    }

    fn decode_bool(&self) -> Result<bool, DecodeError> {
        match self.0 {
            Node::Flag(b) => Ok(*b),
            _ => Err(mismatch("bool")),
        }
    }
}

fn run(node: &Node) -> Result<Json, DecodeError> {
    decode(&NodeDecoder(node))
}

#[test]
fn index_keys_become_index_strings() {
    let node = Node::Keyed(vec![
        (CodingKey::Index(0), Node::Int(1)),
        (CodingKey::Index(12), Node::Flag(true)),
        (CodingKey::from("name"), Node::Text("n".into())),
    ]);
    assert_eq!(
        run(&node).unwrap(),
        json!({"Index 0": 1, "Index 12": true, "name": "n"})
    );
}

#[test]
fn scalar_probe_order() {
    // Parses as an integer too, but string is tried first.
    assert_eq!(run(&Node::Text("12".into())).unwrap(), json!("12"));
    // Reads as a float too, but integer is tried first.
    assert_eq!(run(&Node::Int(3)).unwrap(), Json::Int(3));
    assert_eq!(run(&Node::Float(3.0)).unwrap(), Json::Double(3.0));
    assert_eq!(run(&Node::Flag(false)).unwrap(), Json::Bool(false));
    assert_eq!(run(&Node::Nil).unwrap(), Json::Null);
}

#[test]
fn unrecognized_scalar_is_an_error() {
    let err = run(&Node::Opaque).unwrap_err();
    assert!(matches!(err, DecodeError::UnrecognizedScalar));

    let nested = Node::List(vec![Node::Int(1), Node::Opaque]);
    assert!(matches!(run(&nested), Err(DecodeError::UnrecognizedScalar)));
}

#[test]
fn opened_container_does_not_fall_through() {
    // As a scalar this would decode to null.
    let err = run(&Node::Broken).unwrap_err();
    assert!(matches!(err, DecodeError::EndOfSequence));

    let nested = Node::Keyed(vec![(CodingKey::from("k"), Node::Broken)]);
    assert!(matches!(run(&nested), Err(DecodeError::EndOfSequence)));
}

#[test]
fn depth_limit_with_custom_decoder() {
    let node = Node::List(vec![Node::Keyed(vec![(
        CodingKey::from("k"),
        Node::List(Vec::new()),
    )])]);
    assert!(decode_with(&NodeDecoder(&node), &Config::new().with_max_depth(3)).is_ok());
    let err = decode_with(&NodeDecoder(&node), &Config::new().with_max_depth(2)).unwrap_err();
    assert!(matches!(err, DecodeError::DepthLimitExceeded(2)));
}

/// Renders values as s-expressions.
struct SexpEncoder;

struct SexpMap(Vec<String>);

struct SexpList(Vec<String>);

struct SexpScalar;

impl StructuredEncoder for SexpEncoder {
    type Ok = String;
    type Keyed = SexpMap;
    type Ordered = SexpList;
    type Scalar = SexpScalar;

    fn keyed_container(self, len: usize) -> Result<SexpMap, EncodeError> {
        Ok(SexpMap(Vec::with_capacity(len)))
    }

    fn ordered_container(self, len: usize) -> Result<SexpList, EncodeError> {
        Ok(SexpList(Vec::with_capacity(len)))
    }

    fn scalar_container(self) -> Result<SexpScalar, EncodeError> {
        Ok(SexpScalar)
    }
}

impl KeyedEncodingContainer for SexpMap {
    type Encoder = SexpEncoder;
    type Ok = String;

    fn nested_encoder(&mut self, _key: &CodingKey) -> SexpEncoder {
        SexpEncoder
    }

    fn insert(&mut self, key: CodingKey, encoded: String) -> Result<(), EncodeError> {
        self.0.push(format!("{key}={encoded}"));
        Ok(())
    }

    fn finish(self) -> Result<String, EncodeError> {
        Ok(format!("(map {})", self.0.join(" ")))
    }
}

impl OrderedEncodingContainer for SexpList {
    type Encoder = SexpEncoder;
    type Ok = String;

    fn nested_encoder(&mut self) -> SexpEncoder {
        SexpEncoder
    }

    fn push(&mut self, encoded: String) -> Result<(), EncodeError> {
        self.0.push(encoded);
        Ok(())
    }

    fn finish(self) -> Result<String, EncodeError> {
        Ok(format!("(list {})", self.0.join(" ")))
    }
}

impl ScalarEncodingContainer for SexpScalar {
    type Ok = String;

    fn encode_nil(self) -> Result<String, EncodeError> {
        Ok("nil".to_owned())
    }

    fn encode_bool(self, value: bool) -> Result<String, EncodeError> {
        Ok(if value { "#t" } else { "#f" }.to_owned())
    }

    fn encode_i64(self, value: i64) -> Result<String, EncodeError> {
        Ok(value.to_string())
    }

    fn encode_f64(self, value: f64) -> Result<String, EncodeError> {
        Ok(format!("{value:?}"))
    }

    fn encode_str(self, value: &str) -> Result<String, EncodeError> {
        if value.contains(' ') {
            return Err(EncodeError::Message(format!("cannot encode {value:?}")));
        }
        Ok(format!("{value:?}"))
    }
}

#[test]
fn encode_into_custom_format() {
    let value = json!({"b": [1, 2.5, null, true], "a": "x"});
    assert_eq!(
        encode(&value, SexpEncoder).unwrap(),
        r#"(map b=(list 1 2.5 nil #t) a="x")"#
    );
    let sorted = Config::new().with_key_order(KeyOrder::Sorted);
    assert_eq!(
        encode_with(&value, SexpEncoder, &sorted).unwrap(),
        r#"(map a="x" b=(list 1 2.5 nil #t))"#
    );
}

#[test]
fn encoder_failures_propagate() {
    let err = encode(&json!({"k": ["has space"]}), SexpEncoder).unwrap_err();
    assert_eq!(err.to_string(), r#"cannot encode "has space""#);
}
