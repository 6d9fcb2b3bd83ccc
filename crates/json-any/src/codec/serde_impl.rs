//! `serde` support for [`Json`], so it can sit inside derived structs and be
//! handed to any `serde` format directly.
//!
//! Both directions enforce a container depth limit. Deserialization keeps the
//! last value for a repeated object key, which is what `serde_json::Value`
//! does as well.

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{DecodeError, EncodeError};
use crate::{Json, Map};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

impl Serialize for Json {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Bounded {
            value: self,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
        .serialize(serializer)
    }
}

struct Bounded<'a> {
    value: &'a Json,
    depth: usize,
    max_depth: usize,
}

impl<'a> Bounded<'a> {
    fn child(&self, value: &'a Json) -> Self {
        Bounded {
            value,
            depth: self.depth + 1,
            max_depth: self.max_depth,
        }
    }

    fn check_depth<E: ser::Error>(&self) -> Result<(), E> {
        if self.depth >= self.max_depth {
            return Err(E::custom(EncodeError::DepthLimitExceeded(self.max_depth)));
        }
        Ok(())
    }
}

impl Serialize for Bounded<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.value {
            Json::Null => serializer.serialize_unit(),
            Json::Bool(b) => serializer.serialize_bool(*b),
            Json::Int(i) => serializer.serialize_i64(*i),
            Json::Double(d) if !d.is_finite() => {
                Err(ser::Error::custom(EncodeError::NonFiniteFloat(*d)))
            }
            Json::Double(d) => serializer.serialize_f64(*d),
            Json::String(s) => serializer.serialize_str(s),
            Json::Array(items) => {
                self.check_depth::<S::Error>()?;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Json::Object(map) => {
                self.check_depth::<S::Error>()?;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    out.serialize_entry(key, &self.child(item))?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Json {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonSeed::default().deserialize(deserializer)
    }
}

/// Deserializes a [`Json`] with an explicit container depth limit.
///
/// ```
/// use json_any::codec::JsonSeed;
/// use serde::de::DeserializeSeed;
///
/// let mut de = serde_json::Deserializer::from_str("[[1]]");
/// assert!(JsonSeed::new(1).deserialize(&mut de).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonSeed {
    depth: usize,
    max_depth: usize,
}

impl JsonSeed {
    pub const fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            max_depth: self.max_depth,
        }
    }

    fn check_depth<E: de::Error>(self) -> Result<(), E> {
        if self.depth >= self.max_depth {
            return Err(E::custom(DecodeError::DepthLimitExceeded(self.max_depth)));
        }
        Ok(())
    }
}

impl Default for JsonSeed {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<'de> DeserializeSeed<'de> for JsonSeed {
    type Value = Json;

    fn deserialize<D>(self, deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonVisitor(self))
    }
}

struct JsonVisitor(JsonSeed);

impl<'de> Visitor<'de> for JsonVisitor {
    type Value = Json;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Json, E> {
        Ok(Json::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Json, E> {
        Ok(Json::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Json, E> {
        Ok(i64::try_from(value).map_or(Json::Double(value as f64), Json::Int))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Json, E> {
        Ok(i64::try_from(value).map_or(Json::Double(value as f64), Json::Int))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Json, E> {
        Ok(i64::try_from(value).map_or(Json::Double(value as f64), Json::Int))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Json, E> {
        Ok(Json::Double(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Json, E> {
        Ok(Json::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Json, E> {
        Ok(Json::String(value))
    }

    fn visit_unit<E>(self) -> Result<Json, E> {
        Ok(Json::Null)
    }

    fn visit_none<E>(self) -> Result<Json, E> {
        Ok(Json::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.0.deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Json, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.0.deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Json, A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.0.check_depth::<A::Error>()?;
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self.0.child())? {
            items.push(item);
        }
        Ok(Json::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Json, A::Error>
    where
        A: MapAccess<'de>,
    {
        self.0.check_depth::<A::Error>()?;
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<String>()? {
            let value = access.next_value_seed(self.0.child())?;
            map.insert(key, value);
        }
        Ok(Json::Object(map))
    }
}
