//! Error types for decoding, encoding and conversion.
//!
//! Accessors on [`Json`](crate::Json) never produce these: a shape mismatch
//! there is an `Option::None`. Errors are reserved for the codec bridge, where
//! a malformed or unrecognised input has to be reported to the caller.

use thiserror::Error;

/// Errors raised while turning a structured decoder (or raw bytes) into a
/// [`Json`](crate::Json).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A container or scalar read was attempted against a different shape.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The scalar container held none of null, string, integer, float or bool.
    #[error("unrecognized scalar shape")]
    UnrecognizedScalar,
    /// A keyed container reported a key it could not resolve.
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// An ordered container was read past its end.
    #[error("unexpected end of sequence")]
    EndOfSequence,
    #[error("nesting deeper than {0} containers")]
    DepthLimitExceeded(usize),
    /// The byte stage (`serde_json`) rejected the input.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
}

/// Errors raised while writing a [`Json`](crate::Json) into a structured
/// encoder (or raw bytes).
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JSON text has no representation for NaN or the infinities.
    #[error("non-finite float {0} cannot be encoded")]
    NonFiniteFloat(f64),
    #[error("nesting deeper than {0} containers")]
    DepthLimitExceeded(usize),
    /// The encoder rejected a write for a format-specific reason.
    #[error("{0}")]
    Message(String),
    /// The byte stage (`serde_json`) failed to render the tree.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),
}

/// Errors raised by fallible `TryFrom` constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("integer {0} does not fit in a 64-bit signed integer")]
    IntegerOutOfRange(String),
}

/// Umbrella error for the typed-structure bridge.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// `serde_json` failed on the typed side of the bridge.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
