use super::{
    CodingKey, KeyedEncodingContainer, OrderedEncodingContainer, ScalarEncodingContainer,
    StructuredEncoder,
};
use crate::config::Config;
use crate::error::EncodeError;
use crate::value::ordered_entries;
use crate::Json;

/// Writes `value` into `encoder` using default options.
///
/// Scalars go to a scalar container, arrays to an ordered container in
/// element order, objects to a keyed container in map iteration order.
///
/// ```
/// use json_any::codec::{encode, tree::ValueEncoder};
/// use json_any::json;
///
/// let out = encode(&json!({"id": 7, "tags": ["a"]}), ValueEncoder).unwrap();
/// assert_eq!(out, serde_json::json!({"id": 7, "tags": ["a"]}));
/// ```
pub fn encode<E: StructuredEncoder>(value: &Json, encoder: E) -> Result<E::Ok, EncodeError> {
    encode_with(value, encoder, &Config::default())
}

/// Like [`encode`], honouring `config.key_order` and `config.max_depth`.
pub fn encode_with<E: StructuredEncoder>(
    value: &Json,
    encoder: E,
    config: &Config,
) -> Result<E::Ok, EncodeError> {
    encode_node(value, encoder, 0, config)
}

fn encode_node<E: StructuredEncoder>(
    value: &Json,
    encoder: E,
    depth: usize,
    config: &Config,
) -> Result<E::Ok, EncodeError> {
    match value {
        Json::Null => encoder.scalar_container()?.encode_nil(),
        Json::Bool(b) => encoder.scalar_container()?.encode_bool(*b),
        Json::Int(i) => encoder.scalar_container()?.encode_i64(*i),
        Json::Double(d) => encoder.scalar_container()?.encode_f64(*d),
        Json::String(s) => encoder.scalar_container()?.encode_str(s),
        Json::Array(items) => {
            check_depth(depth, config)?;
            let mut ordered = encoder.ordered_container(items.len())?;
            for item in items {
                let slot = ordered.nested_encoder();
                let encoded = encode_node(item, slot, depth + 1, config)?;
                ordered.push(encoded)?;
            }
            ordered.finish()
        }
        Json::Object(map) => {
            check_depth(depth, config)?;
            let mut keyed = encoder.keyed_container(map.len())?;
            for (key, item) in ordered_entries(map, config.key_order) {
                let key = CodingKey::from(key.as_str());
                let slot = keyed.nested_encoder(&key);
                let encoded = encode_node(item, slot, depth + 1, config)?;
                keyed.insert(key, encoded)?;
            }
            keyed.finish()
        }
    }
}

fn check_depth(depth: usize, config: &Config) -> Result<(), EncodeError> {
    if depth >= config.max_depth {
        log::debug!("encode depth limit {} reached", config.max_depth);
        return Err(EncodeError::DepthLimitExceeded(config.max_depth));
    }
    Ok(())
}
