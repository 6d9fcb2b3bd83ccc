//! Structured decoder and encoder over `serde_json::Value`.
//!
//! `serde_json` owns the text stage; these adapters expose its parsed tree
//! through the container traits so that [`decode`](super::decode()) and
//! [`encode`](super::encode()) can run against it.

use super::{
    CodingKey, KeyedDecodingContainer, KeyedEncodingContainer, OrderedDecodingContainer,
    OrderedEncodingContainer, ScalarDecodingContainer, ScalarEncodingContainer,
    StructuredDecoder, StructuredEncoder,
};
use crate::error::{DecodeError, EncodeError};
use serde_json::{Number, Value};

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: kind_of(found),
    }
}

/// Decoder positioned at one node of a parsed `serde_json` tree.
#[derive(Debug, Clone, Copy)]
pub struct ValueDecoder<'a> {
    value: &'a Value,
}

impl<'a> ValueDecoder<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

impl<'a> StructuredDecoder for ValueDecoder<'a> {
    type Keyed = ObjectReader<'a>;
    type Ordered = ArrayReader<'a>;
    type Scalar = ScalarReader<'a>;

    fn keyed_container(&self) -> Result<Self::Keyed, DecodeError> {
        match self.value {
            Value::Object(map) => Ok(ObjectReader { map }),
            other => Err(mismatch("object", other)),
        }
    }

    fn ordered_container(&self) -> Result<Self::Ordered, DecodeError> {
        match self.value {
            Value::Array(items) => Ok(ArrayReader {
                items: items.iter(),
                len: items.len(),
            }),
            other => Err(mismatch("array", other)),
        }
    }

    fn scalar_container(&self) -> Result<Self::Scalar, DecodeError> {
        match self.value {
            Value::Array(_) | Value::Object(_) => Err(mismatch("scalar", self.value)),
            value => Ok(ScalarReader { value }),
        }
    }
}

#[derive(Debug)]
pub struct ObjectReader<'a> {
    map: &'a serde_json::Map<String, Value>,
}

impl<'a> KeyedDecodingContainer for ObjectReader<'a> {
    type Decoder = ValueDecoder<'a>;

    fn all_keys(&self) -> Vec<CodingKey> {
        self.map.keys().map(|key| CodingKey::Str(key.clone())).collect()
    }

    fn nested_decoder(&self, key: &CodingKey) -> Result<Self::Decoder, DecodeError> {
        self.map
            .get(&*key.string_value())
            .map(ValueDecoder::new)
            .ok_or_else(|| DecodeError::KeyNotFound(key.to_string()))
    }
}

#[derive(Debug)]
pub struct ArrayReader<'a> {
    items: std::slice::Iter<'a, Value>,
    len: usize,
}

impl<'a> OrderedDecodingContainer for ArrayReader<'a> {
    type Decoder = ValueDecoder<'a>;

    fn count(&self) -> Option<usize> {
        Some(self.len)
    }

    fn is_at_end(&self) -> bool {
        self.items.len() == 0
    }

    fn next_decoder(&mut self) -> Result<Self::Decoder, DecodeError> {
        self.items
            .next()
            .map(ValueDecoder::new)
            .ok_or(DecodeError::EndOfSequence)
    }
}

#[derive(Debug)]
pub struct ScalarReader<'a> {
    value: &'a Value,
}

impl ScalarDecodingContainer for ScalarReader<'_> {
    fn decode_nil(&self) -> bool {
        self.value.is_null()
    }

    fn decode_string(&self) -> Result<String, DecodeError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch("string", other)),
        }
    }

    /// Succeeds only for integer tokens that fit in `i64`; `1.0` and `-0`
    /// are floats to `serde_json`.
    fn decode_i64(&self) -> Result<i64, DecodeError> {
        self.value
            .as_i64()
            .ok_or_else(|| mismatch("int", self.value))
    }

    fn decode_f64(&self) -> Result<f64, DecodeError> {
        self.value
            .as_f64()
            .ok_or_else(|| mismatch("double", self.value))
    }

    fn decode_bool(&self) -> Result<bool, DecodeError> {
        self.value
            .as_bool()
            .ok_or_else(|| mismatch("bool", self.value))
    }
}

/// Encoder producing a `serde_json::Value` for one slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueEncoder;

impl StructuredEncoder for ValueEncoder {
    type Ok = Value;
    type Keyed = ObjectWriter;
    type Ordered = ArrayWriter;
    type Scalar = ScalarWriter;

    fn keyed_container(self, len: usize) -> Result<Self::Keyed, EncodeError> {
        Ok(ObjectWriter {
            map: serde_json::Map::with_capacity(len),
        })
    }

    fn ordered_container(self, len: usize) -> Result<Self::Ordered, EncodeError> {
        Ok(ArrayWriter {
            items: Vec::with_capacity(len),
        })
    }

    fn scalar_container(self) -> Result<Self::Scalar, EncodeError> {
        Ok(ScalarWriter)
    }
}

#[derive(Debug, Default)]
pub struct ObjectWriter {
    map: serde_json::Map<String, Value>,
}

impl KeyedEncodingContainer for ObjectWriter {
    type Encoder = ValueEncoder;
    type Ok = Value;

    fn nested_encoder(&mut self, _key: &CodingKey) -> Self::Encoder {
        ValueEncoder
    }

    fn insert(&mut self, key: CodingKey, encoded: Value) -> Result<(), EncodeError> {
        self.map.insert(key.string_value().into_owned(), encoded);
        Ok(())
    }

    fn finish(self) -> Result<Value, EncodeError> {
        Ok(Value::Object(self.map))
    }
}

#[derive(Debug, Default)]
pub struct ArrayWriter {
    items: Vec<Value>,
}

impl OrderedEncodingContainer for ArrayWriter {
    type Encoder = ValueEncoder;
    type Ok = Value;

    fn nested_encoder(&mut self) -> Self::Encoder {
        ValueEncoder
    }

    fn push(&mut self, encoded: Value) -> Result<(), EncodeError> {
        self.items.push(encoded);
        Ok(())
    }

    fn finish(self) -> Result<Value, EncodeError> {
        Ok(Value::Array(self.items))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScalarWriter;

impl ScalarEncodingContainer for ScalarWriter {
    type Ok = Value;

    fn encode_nil(self) -> Result<Value, EncodeError> {
        Ok(Value::Null)
    }

    fn encode_bool(self, value: bool) -> Result<Value, EncodeError> {
        Ok(Value::Bool(value))
    }

    fn encode_i64(self, value: i64) -> Result<Value, EncodeError> {
        Ok(Value::Number(value.into()))
    }

    fn encode_f64(self, value: f64) -> Result<Value, EncodeError> {
        match Number::from_f64(value) {
            Some(number) => Ok(Value::Number(number)),
            None => {
                log::debug!("refusing to encode non-finite float {value}");
                Err(EncodeError::NonFiniteFloat(value))
            }
        }
    }

    fn encode_str(self, value: &str) -> Result<Value, EncodeError> {
        Ok(Value::String(value.to_owned()))
    }
}
