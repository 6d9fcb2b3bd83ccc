//! Textual rendering of [`Json`] values.
//!
//! This is a human-oriented description, not JSON serialization: strings are
//! wrapped in quotes without escaping and doubles always show a fractional
//! part. Use [`crate::to_string`] for JSON text.

use super::{ordered_entries, Json};
use crate::config::RenderOptions;
use std::fmt;

const SEPARATOR: &str = ", ";

/// [`fmt::Display`] adapter returned by [`Json::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    value: &'a Json,
    options: RenderOptions,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.value, &self.options)
    }
}

/// Renders `null`, `true`, `"text"`, `5`, `0.5`, `[1, 2]` and
/// `{"k": v}`, with object keys in map iteration order.
impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, &RenderOptions::default())
    }
}

impl Json {
    /// Renders with explicit options.
    ///
    /// ```
    /// use json_any::{json, RenderOptions};
    ///
    /// let doc = json!({"b": 2, "a": [true, null]});
    /// assert_eq!(doc.to_string(), r#"{"b": 2, "a": [true, null]}"#);
    /// assert_eq!(
    ///     doc.render(RenderOptions::sorted()).to_string(),
    ///     r#"{"a": [true, null], "b": 2}"#
    /// );
    /// ```
    pub fn render(&self, options: RenderOptions) -> Rendered<'_> {
        Rendered {
            value: self,
            options,
        }
    }

    /// The description with every node prefixed by its variant tag.
    ///
    /// ```
    /// use json_any::json;
    ///
    /// assert_eq!(json!([1, "a"]).debug_description(), r#"<ARRAY>:[<INT>:1, <STRING>:"a"]"#);
    /// ```
    pub fn debug_description(&self) -> String {
        self.render(RenderOptions::tagged()).to_string()
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, value: &Json, options: &RenderOptions) -> fmt::Result {
    if options.tagged {
        write!(f, "<{}>:", value.kind().tag())?;
    }
    match value {
        Json::Null => f.write_str("null"),
        Json::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        Json::Int(i) => write!(f, "{i}"),
        // Debug keeps the fractional part (`5.0`) and round-trips exactly.
        Json::Double(d) => write!(f, "{d:?}"),
        Json::String(s) => write!(f, "\"{s}\""),
        Json::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(SEPARATOR)?;
                }
                write_node(f, item, options)?;
            }
            f.write_str("]")
        }
        Json::Object(map) => {
            let entries = ordered_entries(map, options.key_order);
            f.write_str("{")?;
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(SEPARATOR)?;
                }
                write!(f, "\"{key}\": ")?;
                write_node(f, item, options)?;
            }
            f.write_str("}")
        }
    }
}
