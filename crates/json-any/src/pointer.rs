//! JSON Pointer (RFC 6901) lookups on [`Json`].
//!
//! A pointer is either empty (the whole document) or a sequence of
//! `/`-prefixed reference tokens, with `~1` standing for `/` and `~0` for `~`.
//! Resolution follows the same contract as [`Json::get`]: any mismatch yields
//! `None`.

use crate::Json;

/// Maximum accepted pointer length in bytes.
const MAX_POINTER_LENGTH: usize = 1024;

/// Unescapes a reference token: `~1` becomes `/`, then `~0` becomes `~`.
fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so that "~01" decodes to "~1" rather than "/".
    component.replace("~1", "/").replace("~0", "~")
}

/// Splits a pointer into unescaped reference tokens.
///
/// Returns `None` for a non-empty pointer that does not start with `/` or
/// that exceeds the length limit.
fn parse(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    if !pointer.starts_with('/') || pointer.len() > MAX_POINTER_LENGTH {
        return None;
    }
    Some(pointer[1..].split('/').map(unescape_component).collect())
}

/// True for canonical array indices: digits only, no leading zero.
fn is_valid_index(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

fn step<'v>(current: &'v Json, token: &str) -> Option<&'v Json> {
    match current {
        Json::Array(_) if is_valid_index(token) => current.get(token.parse::<usize>().ok()?),
        Json::Object(_) => current.get(token),
        _ => None,
    }
}

fn step_mut<'v>(current: &'v mut Json, token: &str) -> Option<&'v mut Json> {
    match current {
        Json::Array(_) if is_valid_index(token) => current.get_mut(token.parse::<usize>().ok()?),
        Json::Object(_) => current.get_mut(token),
        _ => None,
    }
}

impl Json {
    /// Resolves a JSON Pointer against this value.
    ///
    /// ```
    /// use json_any::{json, Json};
    ///
    /// let doc = json!({"a": {"b": [1, 2, 3]}, "x/y": true});
    /// assert_eq!(doc.pointer("/a/b/2"), Some(&Json::Int(3)));
    /// assert_eq!(doc.pointer("/x~1y"), Some(&Json::Bool(true)));
    /// assert_eq!(doc.pointer("/a/b/03"), None);
    /// assert_eq!(doc.pointer(""), Some(&doc));
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<&Json> {
        let tokens = parse(pointer)?;
        let mut current = self;
        for token in &tokens {
            current = step(current, token)?;
        }
        Some(current)
    }

    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Json> {
        let tokens = parse(pointer)?;
        let mut current = self;
        for token in &tokens {
            current = step_mut(current, token)?;
        }
        Some(current)
    }
}
