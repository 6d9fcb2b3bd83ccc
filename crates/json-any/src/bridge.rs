//! Byte-level and typed entry points.
//!
//! Text goes through `serde_json` to a `serde_json::Value` tree, which the
//! [`codec::tree`](crate::codec::tree) adapters then feed to the structured
//! decode and encode algorithms. Typed structures cross over as bytes: they
//! are serialized with `serde_json` and the bytes are decoded, or the other
//! way around.

use crate::codec::tree::{ValueDecoder, ValueEncoder};
use crate::codec::{decode_with, encode_with};
use crate::config::Config;
use crate::error::{DecodeError, EncodeError, Error};
use crate::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Parses JSON bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Json, DecodeError> {
    from_slice_with(bytes, &Config::default())
}

/// Parses JSON bytes under `config`.
///
/// Nesting is checked against `config.max_depth` before the bytes reach
/// `serde_json`, whose own fixed recursion limit is lifted so that the
/// configured depth is the only one that applies.
pub fn from_slice_with(bytes: &[u8], config: &Config) -> Result<Json, DecodeError> {
    if exceeds_depth(bytes, config.max_depth) {
        log::debug!("input nests deeper than {} containers", config.max_depth);
        return Err(DecodeError::DepthLimitExceeded(config.max_depth));
    }
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let tree = serde_json::Value::deserialize(&mut de)?;
    de.end()?;
    from_value_with(&tree, config)
}

/// Whether more than `max_depth` brackets are open at any point of `bytes`,
/// ignoring brackets inside string literals.
fn exceeds_depth(bytes: &[u8], max_depth: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in bytes {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

/// Parses JSON text.
///
/// ```
/// let value = json_any::from_str("[-0, 0, 0.0, 0.1]").unwrap();
/// let ints: Vec<_> = value.as_array().unwrap().iter().map(|v| v.as_i64()).collect();
/// assert_eq!(ints, [Some(0), Some(0), Some(0), None]);
/// ```
pub fn from_str(text: &str) -> Result<Json, DecodeError> {
    from_slice(text.as_bytes())
}

pub fn from_str_with(text: &str, config: &Config) -> Result<Json, DecodeError> {
    from_slice_with(text.as_bytes(), config)
}

/// Converts an already parsed `serde_json` tree.
pub fn from_value(tree: &serde_json::Value) -> Result<Json, DecodeError> {
    from_value_with(tree, &Config::default())
}

pub fn from_value_with(tree: &serde_json::Value, config: &Config) -> Result<Json, DecodeError> {
    decode_with(&ValueDecoder::new(tree), config)
}

/// Builds a `serde_json` tree.
pub fn to_value(value: &Json) -> Result<serde_json::Value, EncodeError> {
    to_value_with(value, &Config::default())
}

pub fn to_value_with(value: &Json, config: &Config) -> Result<serde_json::Value, EncodeError> {
    encode_with(value, ValueEncoder, config)
}

/// Renders compact JSON bytes.
pub fn to_vec(value: &Json) -> Result<Vec<u8>, EncodeError> {
    to_vec_with(value, &Config::default())
}

pub fn to_vec_with(value: &Json, config: &Config) -> Result<Vec<u8>, EncodeError> {
    let tree = to_value_with(value, config)?;
    Ok(serde_json::to_vec(&tree)?)
}

/// Renders compact JSON text.
///
/// ```
/// use json_any::{json, Config, KeyOrder};
///
/// let doc = json!({"b": [1, 2.0], "a": null});
/// assert_eq!(json_any::to_string(&doc).unwrap(), r#"{"b":[1,2.0],"a":null}"#);
///
/// let sorted = Config::new().with_key_order(KeyOrder::Sorted);
/// assert_eq!(
///     json_any::to_string_with(&doc, &sorted).unwrap(),
///     r#"{"a":null,"b":[1,2.0]}"#
/// );
/// ```
pub fn to_string(value: &Json) -> Result<String, EncodeError> {
    to_string_with(value, &Config::default())
}

pub fn to_string_with(value: &Json, config: &Config) -> Result<String, EncodeError> {
    let tree = to_value_with(value, config)?;
    Ok(serde_json::to_string(&tree)?)
}

/// Captures a typed structure by serializing it to JSON bytes and decoding
/// those bytes.
///
/// ```
/// use json_any::json;
///
/// #[derive(serde::Serialize)]
/// struct Point {
///     x: i32,
///     y: f64,
/// }
///
/// let value = json_any::from_serialize(&Point { x: 1, y: 0.5 }).unwrap();
/// assert_eq!(value, json!({"x": 1, "y": 0.5}));
/// ```
pub fn from_serialize<T: Serialize + ?Sized>(typed: &T) -> Result<Json, Error> {
    let bytes = serde_json::to_vec(typed)?;
    Ok(from_slice(&bytes)?)
}

/// Rebuilds a typed structure by encoding `value` to JSON bytes and
/// deserializing those bytes.
pub fn to_deserialize<T: DeserializeOwned>(value: &Json) -> Result<T, Error> {
    let bytes = to_vec(value)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MAX_DEPTH;

    #[test]
    fn syntax_errors_surface_as_decode_errors() {
        assert!(matches!(from_str("[1,"), Err(DecodeError::Syntax(_))));
        assert!(matches!(from_slice(b"\xff"), Err(DecodeError::Syntax(_))));
    }

    #[test]
    fn text_roundtrip() {
        let text = r#"{"name":"x","list":[1,-2,0.5,true,null],"nested":{"k":"v"}}"#;
        let value = from_str(text).unwrap();
        assert_eq!(to_string(&value).unwrap(), text);
    }

    #[test]
    fn doubles_keep_their_variant_through_text() {
        let value = json!([5.0, 5]);
        let back = from_slice(&to_vec(&value).unwrap()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn configured_depth_replaces_parser_limit() {
        let deep = format!("{}{}", "[".repeat(200), "]".repeat(200));
        let config = Config::new().with_max_depth(500);
        let value = from_str_with(&deep, &config).unwrap();
        assert!(value.is_array());

        assert!(matches!(
            from_str(&deep),
            Err(DecodeError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
        ));
        assert!(matches!(
            from_str_with("[[1]]", &Config::new().with_max_depth(1)),
            Err(DecodeError::DepthLimitExceeded(1))
        ));
    }

    #[test]
    fn depth_scan_skips_strings() {
        assert!(!exceeds_depth(br#"["[[[", "\"{{"]"#, 1));
        assert!(exceeds_depth(b"[{}]", 1));
        assert!(!exceeds_depth(b"[][][]", 1));
    }

    #[test]
    fn trailing_input_is_rejected() {
        assert!(matches!(from_str("[1] [2]"), Err(DecodeError::Syntax(_))));
    }

    #[test]
    fn typed_errors_are_wrapped() {
        let err = to_deserialize::<Vec<u8>>(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        let err = to_deserialize::<f64>(&json!(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, Error::Encode(EncodeError::NonFiniteFloat(_))));
    }
}
