//! Conversions into [`Json`].

use super::Json;
use crate::error::ConversionError;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Json::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Json {
                fn from(value: $ty) -> Self {
                    Json::Int(i64::from(value))
                }
            }
        )*
    };
}

from_integer! { i8 i16 i32 i64 u8 u16 u32 }

impl From<isize> for Json {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Json::Int(value as i64)
    }
}

macro_rules! try_from_integer {
    ($($ty:ty)*) => {
        $(
            impl TryFrom<$ty> for Json {
                type Error = ConversionError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value)
                        .map(Json::Int)
                        .map_err(|_| ConversionError::IntegerOutOfRange(value.to_string()))
                }
            }
        )*
    };
}

try_from_integer! { u64 usize i128 u128 }

impl From<f32> for Json {
    fn from(value: f32) -> Self {
        Json::Double(f64::from(value))
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Self {
        Json::Double(value)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::String(value.to_owned())
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json::String(value)
    }
}

impl From<&String> for Json {
    fn from(value: &String) -> Self {
        Json::String(value.clone())
    }
}

impl<'a> From<Cow<'a, str>> for Json {
    fn from(value: Cow<'a, str>) -> Self {
        Json::String(value.into_owned())
    }
}

impl From<char> for Json {
    fn from(value: char) -> Self {
        Json::String(value.to_string())
    }
}

impl<T: Into<Json>> From<Vec<T>> for Json {
    fn from(value: Vec<T>) -> Self {
        Json::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Json>> From<&[T]> for Json {
    fn from(value: &[T]) -> Self {
        Json::Array(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Json>, const N: usize> From<[T; N]> for Json {
    fn from(value: [T; N]) -> Self {
        Json::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Json
where
    K: Into<String>,
    V: Into<Json>,
    S: BuildHasher,
{
    fn from(value: HashMap<K, V, S>) -> Self {
        Json::Object(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Json
where
    K: Into<String>,
    V: Into<Json>,
{
    fn from(value: BTreeMap<K, V>) -> Self {
        Json::Object(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for Json
where
    K: Into<String>,
    V: Into<Json>,
    S: BuildHasher,
{
    fn from(value: IndexMap<K, V, S>) -> Self {
        Json::Object(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T: Into<Json>> From<Option<T>> for Json {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Json::Null,
        }
    }
}

impl From<()> for Json {
    fn from((): ()) -> Self {
        Json::Null
    }
}

impl<T: Into<Json>> FromIterator<T> for Json {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Json::Array(iter.into_iter().map(Into::into).collect())
    }
}

/// Collects key/value pairs into an object; the first occurrence of a
/// repeated key wins (see [`Json::from_entries`]).
impl<K: Into<String>, V: Into<Json>> FromIterator<(K, V)> for Json {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Json::from_entries(iter)
    }
}
