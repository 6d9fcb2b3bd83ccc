//! Bridging between [`Json`] and type-erased [`Any`] values.
//!
//! This is for interop with call sites that only hold `dyn Any` payloads.
//! [`Json::to_raw`] produces:
//!
//! | `Json`   | raw payload                     |
//! |----------|---------------------------------|
//! | `Null`   | `None`                          |
//! | `Bool`   | `bool`                          |
//! | `Int`    | `i64`                           |
//! | `Double` | `f64`                           |
//! | `String` | `String`                        |
//! | `Array`  | `Vec<RawValue>`                 |
//! | `Object` | `HashMap<String, RawValue>`     |
//!
//! [`Json::from_raw`] accepts those shapes and a few more; see its docs for
//! the exact matching order.

use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::DecodeError;
use crate::{Json, Map};
use std::any::Any;
use std::collections::{BTreeMap, HashMap};

/// A type-erased value; `None` stands for JSON null.
pub type RawValue = Option<Box<dyn Any>>;

impl Json {
    /// Converts to a type-erased tree, recursing through every child.
    ///
    /// ```
    /// use json_any::json;
    ///
    /// let raw = json!([1, "two"]).to_raw().unwrap();
    /// let items = raw.downcast_ref::<Vec<json_any::raw::RawValue>>().unwrap();
    /// assert_eq!(items[0].as_ref().unwrap().downcast_ref::<i64>(), Some(&1));
    /// ```
    pub fn to_raw(&self) -> RawValue {
        match self {
            Json::Null => None,
            Json::Bool(b) => Some(Box::new(*b)),
            Json::Int(i) => Some(Box::new(*i)),
            Json::Double(d) => Some(Box::new(*d)),
            Json::String(s) => Some(Box::new(s.clone())),
            Json::Array(items) => Some(Box::new(
                items.iter().map(Json::to_raw).collect::<Vec<RawValue>>(),
            )),
            Json::Object(map) => Some(Box::new(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_raw()))
                    .collect::<HashMap<String, RawValue>>(),
            )),
        }
    }

    /// Attempts to rebuild a `Json` from a type-erased value.
    ///
    /// `None` input becomes `Null`. Otherwise the payload is tested in this
    /// order and the first match wins:
    ///
    /// 1. integer: `i64`, `i32`, `i16`, `i8`, `isize`, `u8`, `u16`, `u32`,
    ///    then `u64`/`usize` when the value fits in `i64`;
    /// 2. float: `f64`, `f32`;
    /// 3. `bool`;
    /// 4. string: `String`, `&'static str`;
    /// 5. sequence: `Vec<RawValue>`, `Vec<Box<dyn Any>>`;
    /// 6. mapping: `HashMap` or `BTreeMap` from `String` to `RawValue` or
    ///    `Box<dyn Any>`.
    ///
    /// Sequence elements and mapping entries that do not match are dropped.
    /// A top-level payload that matches nothing returns `None`; that is not an
    /// error, and callers decide whether it is fatal. A tree nesting more than
    /// [`DEFAULT_MAX_DEPTH`] containers also returns `None`.
    ///
    /// ```
    /// use json_any::Json;
    /// use std::any::Any;
    ///
    /// let raw: Box<dyn Any> = Box::new(3.5f32);
    /// assert_eq!(Json::from_raw(Some(raw.as_ref())), Some(Json::Double(3.5)));
    /// assert_eq!(Json::from_raw(None), Some(Json::Null));
    /// assert_eq!(Json::from_raw(Some(&'x' as &dyn Any)), None);
    /// ```
    pub fn from_raw(raw: Option<&dyn Any>) -> Option<Json> {
        match raw {
            None => Some(Json::Null),
            Some(raw) => match_raw(raw),
        }
    }
}

fn match_raw(raw: &dyn Any) -> Option<Json> {
    match match_node(raw, 0) {
        Ok(value) => value,
        Err(err) => {
            log::debug!("raw value rejected: {err}");
            None
        }
    }
}

fn match_optional(raw: Option<&dyn Any>, depth: usize) -> Result<Option<Json>, DecodeError> {
    match raw {
        None => Ok(Some(Json::Null)),
        Some(raw) => match_node(raw, depth),
    }
}

fn match_node(raw: &dyn Any, depth: usize) -> Result<Option<Json>, DecodeError> {
    if let Some(i) = match_integer(raw) {
        return Ok(Some(Json::Int(i)));
    }
    if let Some(d) = raw.downcast_ref::<f64>() {
        return Ok(Some(Json::Double(*d)));
    }
    if let Some(d) = raw.downcast_ref::<f32>() {
        return Ok(Some(Json::Double(f64::from(*d))));
    }
    if let Some(b) = raw.downcast_ref::<bool>() {
        return Ok(Some(Json::Bool(*b)));
    }
    if let Some(s) = raw.downcast_ref::<String>() {
        return Ok(Some(Json::String(s.clone())));
    }
    if let Some(s) = raw.downcast_ref::<&'static str>() {
        return Ok(Some(Json::String((*s).to_owned())));
    }
    if let Some(items) = raw.downcast_ref::<Vec<RawValue>>() {
        return collect_array(items.iter().map(|item| item.as_deref()), depth).map(Some);
    }
    if let Some(items) = raw.downcast_ref::<Vec<Box<dyn Any>>>() {
        return collect_array(items.iter().map(|item| Some(&**item)), depth).map(Some);
    }
    if let Some(entries) = raw.downcast_ref::<HashMap<String, RawValue>>() {
        return collect_object(entries.iter().map(|(k, v)| (k, v.as_deref())), depth).map(Some);
    }
    if let Some(entries) = raw.downcast_ref::<HashMap<String, Box<dyn Any>>>() {
        return collect_object(entries.iter().map(|(k, v)| (k, Some(&**v))), depth).map(Some);
    }
    if let Some(entries) = raw.downcast_ref::<BTreeMap<String, RawValue>>() {
        return collect_object(entries.iter().map(|(k, v)| (k, v.as_deref())), depth).map(Some);
    }
    if let Some(entries) = raw.downcast_ref::<BTreeMap<String, Box<dyn Any>>>() {
        return collect_object(entries.iter().map(|(k, v)| (k, Some(&**v))), depth).map(Some);
    }
    Ok(None)
}

fn check_depth(depth: usize) -> Result<(), DecodeError> {
    if depth >= DEFAULT_MAX_DEPTH {
        return Err(DecodeError::DepthLimitExceeded(DEFAULT_MAX_DEPTH));
    }
    Ok(())
}

fn collect_array<'a, I>(items: I, depth: usize) -> Result<Json, DecodeError>
where
    I: IntoIterator<Item = Option<&'a dyn Any>>,
{
    check_depth(depth)?;
    let mut out = Vec::new();
    for item in items {
        if let Some(value) = match_optional(item, depth + 1)? {
            out.push(value);
        }
    }
    Ok(Json::Array(out))
}

fn collect_object<'a, I>(entries: I, depth: usize) -> Result<Json, DecodeError>
where
    I: IntoIterator<Item = (&'a String, Option<&'a dyn Any>)>,
{
    check_depth(depth)?;
    let mut map = Map::new();
    for (key, item) in entries {
        if let Some(value) = match_optional(item, depth + 1)? {
            map.insert(key.clone(), value);
        }
    }
    Ok(Json::Object(map))
}

fn match_integer(raw: &dyn Any) -> Option<i64> {
    if let Some(i) = raw.downcast_ref::<i64>() {
        return Some(*i);
    }
    if let Some(i) = raw.downcast_ref::<i32>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<i16>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<i8>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<isize>() {
        return i64::try_from(*i).ok();
    }
    if let Some(i) = raw.downcast_ref::<u8>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<u16>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<u32>() {
        return Some(i64::from(*i));
    }
    if let Some(i) = raw.downcast_ref::<u64>() {
        return i64::try_from(*i).ok();
    }
    if let Some(i) = raw.downcast_ref::<usize>() {
        return i64::try_from(*i).ok();
    }
    None
}
