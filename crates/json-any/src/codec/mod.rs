//! The structured codec bridge.
//!
//! A structured decoder exposes the data it wraps through three container
//! views: keyed (a map addressed by [`CodingKey`]), ordered (a sequence read
//! front to back) and scalar (a single primitive). [`decode()`] probes those
//! views in that order to discover which JSON shape is present; [`encode()`]
//! walks a [`Json`](crate::Json) tree and writes each node into the matching
//! container of a structured encoder.
//!
//! [`tree`] implements both sides over `serde_json::Value`, which is what the
//! byte-level entry points in the crate root use.

mod decode;
mod encode;
mod serde_impl;
pub mod tree;

use crate::error::{DecodeError, EncodeError};
use std::borrow::Cow;
use std::fmt;

pub use decode::{decode, decode_with};
pub use encode::{encode, encode_with};
pub use serde_impl::JsonSeed;

/// A key inside a keyed container.
///
/// Formats that address members by position produce `Index` keys; they are
/// exposed to [`Json`](crate::Json) objects under the string `"Index <n>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodingKey {
    Str(String),
    Index(usize),
}

impl CodingKey {
    /// The key as an object member name.
    ///
    /// ```
    /// use json_any::codec::CodingKey;
    ///
    /// assert_eq!(CodingKey::from("name").string_value(), "name");
    /// assert_eq!(CodingKey::Index(3).string_value(), "Index 3");
    /// ```
    pub fn string_value(&self) -> Cow<'_, str> {
        match self {
            CodingKey::Str(s) => Cow::Borrowed(s),
            CodingKey::Index(i) => Cow::Owned(format!("Index {i}")),
        }
    }

    /// The key as a position, parsing string keys when they are numeric.
    pub fn int_value(&self) -> Option<usize> {
        match self {
            CodingKey::Str(s) => s.parse().ok(),
            CodingKey::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for CodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value())
    }
}

impl From<&str> for CodingKey {
    fn from(value: &str) -> Self {
        CodingKey::Str(value.to_owned())
    }
}

impl From<String> for CodingKey {
    fn from(value: String) -> Self {
        CodingKey::Str(value)
    }
}

impl From<usize> for CodingKey {
    fn from(value: usize) -> Self {
        CodingKey::Index(value)
    }
}

/// Read side of a hierarchical serialization format.
///
/// Each probe either opens the requested view or fails when the underlying
/// data has a different shape. Probing must not consume anything on failure.
pub trait StructuredDecoder: Sized {
    type Keyed: KeyedDecodingContainer<Decoder = Self>;
    type Ordered: OrderedDecodingContainer<Decoder = Self>;
    type Scalar: ScalarDecodingContainer;

    fn keyed_container(&self) -> Result<Self::Keyed, DecodeError>;
    fn ordered_container(&self) -> Result<Self::Ordered, DecodeError>;
    fn scalar_container(&self) -> Result<Self::Scalar, DecodeError>;
}

pub trait KeyedDecodingContainer {
    type Decoder;

    /// Every key present in the container.
    fn all_keys(&self) -> Vec<CodingKey>;

    /// A decoder positioned at the value stored under `key`.
    fn nested_decoder(&self, key: &CodingKey) -> Result<Self::Decoder, DecodeError>;
}

pub trait OrderedDecodingContainer {
    type Decoder;

    /// Number of elements, when the format knows it up front.
    fn count(&self) -> Option<usize> {
        None
    }

    fn is_at_end(&self) -> bool;

    /// A decoder positioned at the next element; advances the container.
    fn next_decoder(&mut self) -> Result<Self::Decoder, DecodeError>;
}

/// Typed reads against a single primitive; each succeeds or fails on its own.
pub trait ScalarDecodingContainer {
    fn decode_nil(&self) -> bool;
    fn decode_string(&self) -> Result<String, DecodeError>;
    fn decode_i64(&self) -> Result<i64, DecodeError>;
    fn decode_f64(&self) -> Result<f64, DecodeError>;
    fn decode_bool(&self) -> Result<bool, DecodeError>;
}

/// Write side of a hierarchical serialization format.
///
/// An encoder represents one slot. It is consumed by opening exactly one
/// container; the container yields the slot's output when finished.
pub trait StructuredEncoder: Sized {
    type Ok;
    type Keyed: KeyedEncodingContainer<Encoder = Self, Ok = Self::Ok>;
    type Ordered: OrderedEncodingContainer<Encoder = Self, Ok = Self::Ok>;
    type Scalar: ScalarEncodingContainer<Ok = Self::Ok>;

    fn keyed_container(self, len: usize) -> Result<Self::Keyed, EncodeError>;
    fn ordered_container(self, len: usize) -> Result<Self::Ordered, EncodeError>;
    fn scalar_container(self) -> Result<Self::Scalar, EncodeError>;
}

pub trait KeyedEncodingContainer {
    type Encoder;
    type Ok;

    /// A fresh encoder for the value about to be stored under `key`.
    fn nested_encoder(&mut self, key: &CodingKey) -> Self::Encoder;

    /// Stores the output of a nested encoder under `key`.
    fn insert(&mut self, key: CodingKey, encoded: Self::Ok) -> Result<(), EncodeError>;

    fn finish(self) -> Result<Self::Ok, EncodeError>;
}

pub trait OrderedEncodingContainer {
    type Encoder;
    type Ok;

    /// A fresh encoder for the slot about to be appended.
    fn nested_encoder(&mut self) -> Self::Encoder;

    fn push(&mut self, encoded: Self::Ok) -> Result<(), EncodeError>;

    fn finish(self) -> Result<Self::Ok, EncodeError>;
}

pub trait ScalarEncodingContainer {
    type Ok;

    fn encode_nil(self) -> Result<Self::Ok, EncodeError>;
    fn encode_bool(self, value: bool) -> Result<Self::Ok, EncodeError>;
    fn encode_i64(self, value: i64) -> Result<Self::Ok, EncodeError>;
    fn encode_f64(self, value: f64) -> Result<Self::Ok, EncodeError>;
    fn encode_str(self, value: &str) -> Result<Self::Ok, EncodeError>;
}
