//! Structured addresses into a value tree.
//!
//! A path is a plain slice of [`PathComponent`]s, ordered root-first. Paths
//! are pure descriptors: they hold no reference to any tree and can be
//! applied to any value via [`JsonValue::at`].

use std::fmt;

use crate::value::JsonValue;

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    Key(String),
    Index(usize),
}

impl PathComponent {
    /// Builds a key step.
    pub fn key(key: impl Into<String>) -> Self {
        PathComponent::Key(key.into())
    }

    /// Builds an index step.
    pub const fn index(index: usize) -> Self {
        PathComponent::Index(index)
    }
}

impl From<&str> for PathComponent {
    fn from(key: &str) -> Self {
        PathComponent::Key(key.to_string())
    }
}

impl From<String> for PathComponent {
    fn from(key: String) -> Self {
        PathComponent::Key(key)
    }
}

impl From<usize> for PathComponent {
    fn from(index: usize) -> Self {
        PathComponent::Index(index)
    }
}

/// Renders the step as a JSON Pointer reference token, escaping `~` as `~0`
/// and `/` as `~1`.
impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathComponent::Key(key) => f.write_str(&escape_token(key)),
            PathComponent::Index(index) => write!(f, "{index}"),
        }
    }
}

// Order matters: escaping `/` first would corrupt a literal `~1` in the key.
fn escape_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

/// Renders a path as JSON-Pointer-style text, e.g.
/// `/contact/customFields/0/value`.
///
/// The empty path renders as the empty string, the pointer for the whole
/// document. Rendering is one-way by design: a token like `"0"` is ambiguous
/// between a key and an index without a document at hand, so no parser is
/// provided.
pub fn format_path(path: &[PathComponent]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        match component {
            PathComponent::Key(key) => out.push_str(&escape_token(key)),
            PathComponent::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

impl JsonValue {
    /// Walks the value through `path`, one component at a time.
    ///
    /// A `Key` step requires the current value to be an object holding that
    /// key; an `Index` step requires an array with the index in bounds. The
    /// first failing step makes the whole traversal yield `None`. The empty
    /// path yields the starting value.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_probe::{from_json_str, PathComponent};
    ///
    /// let doc = from_json_str(
    ///     r#"{"contact":{"customFields":[{"value":"hello"},{"value":42}]}}"#,
    /// )
    /// .unwrap();
    ///
    /// let path = [
    ///     PathComponent::key("contact"),
    ///     PathComponent::key("customFields"),
    ///     PathComponent::index(0),
    ///     PathComponent::key("value"),
    /// ];
    /// assert_eq!(doc.str_at(&path), Some("hello"));
    /// assert_eq!(doc.at(&[PathComponent::key("missing")]), None);
    /// ```
    pub fn at(&self, path: &[PathComponent]) -> Option<&JsonValue> {
        let mut current = self;
        for component in path {
            current = match component {
                PathComponent::Key(key) => current.get(key)?,
                PathComponent::Index(index) => current.get_index(*index)?,
            };
        }
        Some(current)
    }
}
