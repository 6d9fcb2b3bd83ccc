//! json-any: a dynamically-typed JSON value and a structured codec bridge.
//!
//! [`Json`] is a closed enum over null, bool, integer, float, string, array
//! and object. Accessors never fail: a shape mismatch reads as `None`.
//!
//! The [`codec`] module translates between `Json` and any hierarchical
//! serialization format that exposes keyed, ordered and scalar containers.
//! The functions at the crate root run that bridge over `serde_json`.
//!
//! # Example
//!
//! ```
//! use json_any::{json, Json};
//!
//! let doc = json_any::from_str(r#"{"a": {"b": [1, 2, 3]}}"#).unwrap();
//! assert_eq!(doc.pointer("/a/b/2").and_then(Json::as_i64), Some(3));
//!
//! let mut copy = doc.clone();
//! copy.set("a", json!("replaced"));
//! assert_eq!(doc.get("a").and_then(Json::count), Some(1));
//! assert_eq!(json_any::to_string(&copy).unwrap(), r#"{"a":"replaced"}"#);
//! ```

#[macro_use]
mod macros;

pub mod bridge;
pub mod codec;
pub mod config;
pub mod error;
mod pointer;
pub mod raw;
pub mod value;

pub use bridge::{
    from_serialize, from_slice, from_slice_with, from_str, from_str_with, from_value,
    from_value_with, to_deserialize, to_string, to_string_with, to_value, to_value_with, to_vec,
    to_vec_with,
};
pub use codec::{
    decode, decode_with, encode, encode_with, CodingKey, JsonSeed, KeyedDecodingContainer,
    KeyedEncodingContainer, OrderedDecodingContainer, OrderedEncodingContainer,
    ScalarDecodingContainer, ScalarEncodingContainer, StructuredDecoder, StructuredEncoder,
};
pub use config::{Config, KeyOrder, RenderOptions, DEFAULT_MAX_DEPTH};
pub use error::{ConversionError, DecodeError, EncodeError, Error};
pub use raw::RawValue;
pub use value::{Json, JsonIndex, Kind, Map, Rendered};
