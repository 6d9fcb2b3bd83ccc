/// Builds a [`Json`](crate::Json) from JSON-like literal syntax.
///
/// `null` becomes [`Json::Null`](crate::Json::Null), `[...]` an array,
/// `{"key": value, ...}` an object, and any other expression goes through
/// `Json::from`. Object keys must be string literals. When a key repeats, the
/// first occurrence wins, as with [`Json::from_entries`](crate::Json::from_entries).
///
/// ```
/// use json_any::{json, Json};
///
/// let life = 42;
/// let doc = json!({
///     "foo": "bar",
///     "fib": [1, 1, 2, 3, 5, 8, 13],
///     "life": life,
///     "nothing": null,
///     "apple": {
///         "address": {"city": "Cupertino", "zip": "95014"}
///     }
/// });
/// assert_eq!(doc.count(), Some(5));
/// assert!(doc.get("nothing").unwrap().is_null());
/// assert_eq!(doc.pointer("/apple/address/city"), Some(&Json::from("Cupertino")));
/// ```
#[macro_export]
macro_rules! json {
    // Array elements are munched one at a time into an accumulator.
    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@array [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::json!(@array [$($elems,)* $crate::Json::Null,] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $crate::json!(@array [$($elems,)* $crate::json!([$($array)*]),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] {$($object:tt)*} $(, $($rest:tt)*)?) => {
        $crate::json!(@array [$($elems,)* $crate::json!({$($object)*}),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::json!(@array [$($elems,)* $crate::Json::from($next),] $($($rest)*)?)
    };

    // Object members are inserted into `$map` one at a time.
    (@object $map:ident ()) => {};
    (@object $map:ident ($key:literal : null $(, $($rest:tt)*)?)) => {
        $crate::json!(@insert $map, $key, $crate::Json::Null);
        $crate::json!(@object $map ($($($rest)*)?));
    };
    (@object $map:ident ($key:literal : [$($array:tt)*] $(, $($rest:tt)*)?)) => {
        $crate::json!(@insert $map, $key, $crate::json!([$($array)*]));
        $crate::json!(@object $map ($($($rest)*)?));
    };
    (@object $map:ident ($key:literal : {$($object:tt)*} $(, $($rest:tt)*)?)) => {
        $crate::json!(@insert $map, $key, $crate::json!({$($object)*}));
        $crate::json!(@object $map ($($($rest)*)?));
    };
    (@object $map:ident ($key:literal : $value:expr $(, $($rest:tt)*)?)) => {
        $crate::json!(@insert $map, $key, $crate::Json::from($value));
        $crate::json!(@object $map ($($($rest)*)?));
    };
    (@insert $map:ident, $key:literal, $value:expr) => {
        $map.entry(::std::string::String::from($key)).or_insert($value);
    };

    (null) => {
        $crate::Json::Null
    };
    ([]) => {
        $crate::Json::Array(::std::vec::Vec::new())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::Json::Array($crate::json!(@array [] $($tt)+))
    };
    ({}) => {
        $crate::Json::Object($crate::Map::new())
    };
    ({ $($tt:tt)+ }) => {{
        let mut map = $crate::Map::new();
        $crate::json!(@object map ($($tt)+));
        $crate::Json::Object(map)
    }};
    ($other:expr) => {
        $crate::Json::from($other)
    };
}
