//! The [`Json`] value model.
//!
//! `Json` is a closed enum over the seven JSON shapes. Containers own their
//! children by value, so a `Json` is always a finite tree: cloning it yields a
//! fully independent copy and mutating the copy never affects the original.

mod display;
mod from;
mod index;

use crate::config::KeyOrder;
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

pub use display::Rendered;
pub use index::JsonIndex;

/// String-keyed object storage.
///
/// Iterates in insertion order; equality ignores order.
pub type Map = IndexMap<String, Json>;

/// A dynamically-typed JSON value.
///
/// `Int` and `Double` are distinct variants even when they hold the same
/// number: `Json::Int(0) != Json::Double(0.0)`. Use [`Json::as_i64`] and
/// [`Json::as_f64`] to read a number regardless of how it was stored.
///
/// # Example
///
/// ```
/// use json_any::{json, Json};
///
/// let doc = json!({"name": "widget", "tags": ["a", "b"], "price": 9.5});
/// assert_eq!(doc.get("name").and_then(Json::as_str), Some("widget"));
/// assert_eq!(doc.get("tags").and_then(Json::count), Some(2));
/// assert_eq!(doc.get("price").and_then(Json::as_i64), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Json {
    #[default]
    Null,
    Bool(bool),
    /// A whole number stored exactly.
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<Json>),
    Object(Map),
}

/// The variant of a [`Json`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lower-case name, used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    /// Upper-case tag used by [`Json::debug_description`].
    pub const fn tag(self) -> &'static str {
        match self {
            Kind::Null => "NULL",
            Kind::Bool => "BOOL",
            Kind::Int => "INT",
            Kind::Double => "DOUBLE",
            Kind::String => "STRING",
            Kind::Array => "ARRAY",
            Kind::Object => "OBJECT",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Object entries in the requested visiting order.
pub(crate) fn ordered_entries(map: &Map, order: KeyOrder) -> Vec<(&String, &Json)> {
    let mut entries: Vec<(&String, &Json)> = map.iter().collect();
    if order == KeyOrder::Sorted {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    entries
}

/// `NaN` is never equal to itself, so a value holding one cannot be found
/// again once it is used as a set member or map key.
impl Eq for Json {}

/// Agrees with `PartialEq`: `0.0` and `-0.0` hash alike, and an object hashes
/// the same whatever its key order.
impl Hash for Json {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Json::Null => {}
            Json::Bool(b) => b.hash(state),
            Json::Int(i) => i.hash(state),
            Json::Double(d) => {
                let d = if *d == 0.0 { 0.0f64 } else { *d };
                d.to_bits().hash(state);
            }
            Json::String(s) => s.hash(state),
            Json::Array(items) => items.hash(state),
            Json::Object(map) => {
                map.len().hash(state);
                let combined = map.iter().fold(0u64, |acc, entry| {
                    let mut entry_state = DefaultHasher::new();
                    entry.hash(&mut entry_state);
                    acc.wrapping_add(entry_state.finish())
                });
                combined.hash(state);
            }
        }
    }
}

// Bounds of the i64 range as exactly representable floats: [-2^63, 2^63).
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl Json {
    pub const fn kind(&self) -> Kind {
        match self {
            Json::Null => Kind::Null,
            Json::Bool(_) => Kind::Bool,
            Json::Int(_) => Kind::Int,
            Json::Double(_) => Kind::Double,
            Json::String(_) => Kind::String,
            Json::Array(_) => Kind::Array,
            Json::Object(_) => Kind::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Json::Bool(_))
    }

    /// True only for the `Int` variant; see [`Json::as_i64`] for coercion.
    #[inline]
    #[must_use]
    pub const fn is_i64(&self) -> bool {
        matches!(self, Json::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_f64(&self) -> bool {
        matches!(self, Json::Double(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Json::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Json::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Json::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload of `Int`, or of a `Double` with no
    /// fractional part that lies within the `i64` range.
    ///
    /// Never coerces from bool, string or containers.
    ///
    /// ```
    /// use json_any::Json;
    ///
    /// assert_eq!(Json::Int(7).as_i64(), Some(7));
    /// assert_eq!(Json::Double(0.0).as_i64(), Some(0));
    /// assert_eq!(Json::Double(0.1).as_i64(), None);
    /// assert_eq!(Json::Double(f64::NAN).as_i64(), None);
    /// assert_eq!(Json::Bool(true).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Json::Int(i) => Some(*i),
            Json::Double(d) => {
                if *d == d.round() && *d >= I64_LOWER && *d < I64_UPPER {
                    Some(*d as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns the `Double` payload, or the `Int` payload widened to `f64`.
    ///
    /// ```
    /// use json_any::Json;
    ///
    /// assert_eq!(Json::Int(5).as_f64(), Some(5.0));
    /// assert_eq!(Json::String("5".into()).as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Int(i) => Some(*i as f64),
            Json::Double(d) => Some(*d),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Json>> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Json>> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Number of elements or keys in a container.
    ///
    /// `None` for every scalar, including `Null`, so that "not a container"
    /// stays distinguishable from "empty container".
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        match self {
            Json::Null | Json::Bool(_) | Json::Int(_) | Json::Double(_) | Json::String(_) => None,
            Json::Array(items) => Some(items.len()),
            Json::Object(map) => Some(map.len()),
        }
    }

    /// Build an object from key/value pairs. When a key repeats, the value of
    /// its first occurrence is kept and later ones are ignored.
    ///
    /// ```
    /// use json_any::Json;
    ///
    /// let obj = Json::from_entries([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(obj.get("a"), Some(&Json::Int(1)));
    /// assert_eq!(obj.count(), Some(2));
    /// ```
    pub fn from_entries<I, K, V>(entries: I) -> Json
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Json>,
    {
        let iter = entries.into_iter();
        let mut map = Map::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.entry(key.into()).or_insert_with(|| value.into());
        }
        Json::Object(map)
    }
}
