//! Array index and object key access.
//!
//! Lookups return `None` on a wrong variant, a missing key or an index out of
//! bounds. Assignments on a wrong variant or an out-of-bounds index leave the
//! value untouched.

use super::Json;

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A position inside a [`Json`]: `usize` for arrays, string keys for objects.
///
/// This trait is sealed; it is implemented for `usize`, `str`, `String` and
/// references to those.
pub trait JsonIndex: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Json) -> Option<&'v Json>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Json) -> Option<&'v mut Json>;

    #[doc(hidden)]
    fn assign(&self, value: &mut Json, new_value: Json);
}

impl JsonIndex for usize {
    fn index_into<'v>(&self, value: &'v Json) -> Option<&'v Json> {
        match value {
            Json::Array(items) => items.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Json) -> Option<&'v mut Json> {
        match value {
            Json::Array(items) => items.get_mut(*self),
            _ => None,
        }
    }

    fn assign(&self, value: &mut Json, new_value: Json) {
        if let Some(slot) = self.index_into_mut(value) {
            *slot = new_value;
        }
    }
}

impl JsonIndex for str {
    fn index_into<'v>(&self, value: &'v Json) -> Option<&'v Json> {
        match value {
            Json::Object(map) => map.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Json) -> Option<&'v mut Json> {
        match value {
            Json::Object(map) => map.get_mut(self),
            _ => None,
        }
    }

    fn assign(&self, value: &mut Json, new_value: Json) {
        if let Json::Object(map) = value {
            map.insert(self.to_owned(), new_value);
        }
    }
}

impl JsonIndex for String {
    fn index_into<'v>(&self, value: &'v Json) -> Option<&'v Json> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Json) -> Option<&'v mut Json> {
        self.as_str().index_into_mut(value)
    }

    fn assign(&self, value: &mut Json, new_value: Json) {
        self.as_str().assign(value, new_value);
    }
}

impl<T: ?Sized + JsonIndex> JsonIndex for &T {
    fn index_into<'v>(&self, value: &'v Json) -> Option<&'v Json> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Json) -> Option<&'v mut Json> {
        (**self).index_into_mut(value)
    }

    fn assign(&self, value: &mut Json, new_value: Json) {
        (**self).assign(value, new_value);
    }
}

impl Json {
    /// Looks up an array element or an object member.
    ///
    /// ```
    /// use json_any::json;
    ///
    /// let doc = json!({"fib": [1, 1, 2, 3, 5]});
    /// let fib = doc.get("fib").unwrap();
    /// assert_eq!(fib.get(4).and_then(|v| v.as_i64()), Some(5));
    /// assert_eq!(fib.get(5), None);
    /// assert_eq!(fib.get("length"), None);
    /// ```
    pub fn get<I: JsonIndex>(&self, index: I) -> Option<&Json> {
        index.index_into(self)
    }

    pub fn get_mut<I: JsonIndex>(&mut self, index: I) -> Option<&mut Json> {
        index.index_into_mut(self)
    }

    /// Replaces an array slot or inserts/overwrites an object member.
    ///
    /// `None` stores [`Json::Null`]. Setting an index on a non-array, an
    /// out-of-bounds index, or a key on a non-object does nothing.
    ///
    /// ```
    /// use json_any::{json, Json};
    ///
    /// let mut list = json!(["a", "b", "c"]);
    /// list.set(1, json!("x"));
    /// list.set(3, json!("ignored"));
    /// assert_eq!(list, json!(["a", "x", "c"]));
    ///
    /// let mut obj = json!({"life": 42});
    /// obj.set("life", None);
    /// assert_eq!(obj.get("life"), Some(&Json::Null));
    /// ```
    pub fn set<I, V>(&mut self, index: I, value: V)
    where
        I: JsonIndex,
        V: Into<Option<Json>>,
    {
        index.assign(self, value.into().unwrap_or(Json::Null));
    }
}
