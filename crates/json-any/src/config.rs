//! Codec and rendering options.

/// Default container nesting limit, matching `serde_json`'s parser limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Order in which object keys are visited when encoding or rendering.
///
/// Object equality never depends on key order, so this only matters for
/// byte-for-byte reproducible output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    /// Map iteration order (insertion order for [`Map`](crate::Map)).
    #[default]
    Iteration,
    /// Lexicographic byte order of the keys.
    Sorted,
}

/// Options for the encode/decode entry points.
///
/// # Example
///
/// ```
/// use json_any::{Config, KeyOrder};
///
/// let config = Config::new().with_max_depth(8).with_key_order(KeyOrder::Sorted);
/// assert_eq!(config.max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested containers (arrays or objects) accepted on
    /// either side of the bridge. Scalars do not count.
    pub max_depth: usize,
    /// Key order used when encoding objects.
    pub key_order: KeyOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            key_order: KeyOrder::Iteration,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }
}

/// Options for [`Json::render`](crate::Json::render).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub key_order: KeyOrder,
    /// Prefix every node with its variant tag, e.g. `<INT>:5`.
    pub tagged: bool,
}

impl RenderOptions {
    pub const fn sorted() -> Self {
        Self {
            key_order: KeyOrder::Sorted,
            tagged: false,
        }
    }

    pub const fn tagged() -> Self {
        Self {
            key_order: KeyOrder::Iteration,
            tagged: true,
        }
    }
}
