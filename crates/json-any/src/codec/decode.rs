use super::{
    KeyedDecodingContainer, OrderedDecodingContainer, ScalarDecodingContainer, StructuredDecoder,
};
use crate::config::Config;
use crate::error::DecodeError;
use crate::{Json, Map};

/// Decodes whatever `decoder` holds into a [`Json`] using default options.
///
/// The decoder is probed as a keyed container first, then as an ordered
/// container, and finally as a scalar. Once a container opens, any failure
/// inside it is returned as is; the remaining shapes are not tried.
///
/// ```
/// use json_any::codec::{decode, tree::ValueDecoder};
/// use json_any::json;
///
/// let source = serde_json::json!({"a": {"b": [1, 2, 3]}});
/// let value = decode(&ValueDecoder::new(&source)).unwrap();
/// assert_eq!(value, json!({"a": {"b": [1, 2, 3]}}));
/// ```
pub fn decode<D: StructuredDecoder>(decoder: &D) -> Result<Json, DecodeError> {
    decode_with(decoder, &Config::default())
}

/// Like [`decode`], failing with [`DecodeError::DepthLimitExceeded`] when
/// more than `config.max_depth` containers are nested.
pub fn decode_with<D: StructuredDecoder>(decoder: &D, config: &Config) -> Result<Json, DecodeError> {
    decode_node(decoder, 0, config)
}

fn decode_node<D: StructuredDecoder>(
    decoder: &D,
    depth: usize,
    config: &Config,
) -> Result<Json, DecodeError> {
    if let Ok(keyed) = decoder.keyed_container() {
        check_depth(depth, config)?;
        let keys = keyed.all_keys();
        log::trace!("decoding object with {} keys at depth {depth}", keys.len());
        let mut map = Map::with_capacity(keys.len());
        for key in keys {
            let nested = keyed.nested_decoder(&key)?;
            let value = decode_node(&nested, depth + 1, config)?;
            map.insert(key.string_value().into_owned(), value);
        }
        return Ok(Json::Object(map));
    }

    if let Ok(mut ordered) = decoder.ordered_container() {
        check_depth(depth, config)?;
        log::trace!("decoding array at depth {depth}");
        let mut items = Vec::with_capacity(ordered.count().unwrap_or(0));
        while !ordered.is_at_end() {
            let nested = ordered.next_decoder()?;
            items.push(decode_node(&nested, depth + 1, config)?);
        }
        return Ok(Json::Array(items));
    }

    decode_scalar(&decoder.scalar_container()?)
}

/// Reads a scalar in the order null, string, integer, float, bool.
///
/// String comes before the numbers so that `"1"` stays a string, and integer
/// before float so that an integral token keeps its `Int` variant.
fn decode_scalar<S: ScalarDecodingContainer>(scalar: &S) -> Result<Json, DecodeError> {
    if scalar.decode_nil() {
        return Ok(Json::Null);
    }
    if let Ok(s) = scalar.decode_string() {
        return Ok(Json::String(s));
    }
    if let Ok(i) = scalar.decode_i64() {
        return Ok(Json::Int(i));
    }
    if let Ok(d) = scalar.decode_f64() {
        return Ok(Json::Double(d));
    }
    if let Ok(b) = scalar.decode_bool() {
        return Ok(Json::Bool(b));
    }
    log::debug!("scalar matched none of null, string, int, double, bool");
    Err(DecodeError::UnrecognizedScalar)
}

fn check_depth(depth: usize, config: &Config) -> Result<(), DecodeError> {
    if depth >= config.max_depth {
        log::debug!("decode depth limit {} reached", config.max_depth);
        return Err(DecodeError::DepthLimitExceeded(config.max_depth));
    }
    Ok(())
}
