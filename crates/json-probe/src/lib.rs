//! # json-probe
//!
//! Dynamic JSON value model with **lenient coercion, structured path
//! traversal, and deterministic recursive search**.
//!
//! [`JsonValue`] holds any JSON document as an owned tree and is aimed at
//! probing structure you do not control: every lookup reports absence as
//! `None` instead of erroring, scalar reads coerce across compatible
//! representations (numeric strings, truncating floats, textual booleans),
//! and recursive key search descends objects in sorted-key order so results
//! are reproducible regardless of map iteration order.
//!
//! ## Quick start
//!
//! ```rust
//! use json_probe::{from_json_str, PathComponent};
//!
//! let doc =
//!     from_json_str(r#"{"user":{"name":"Alice","age":"34","tags":["a","b"]}}"#).unwrap();
//!
//! // Lenient scalar reads: the string "34" coerces to an integer.
//! assert_eq!(doc.get_or_null("user").get_i64("age"), Some(34));
//!
//! // Structured paths.
//! let name = doc.str_at(&[PathComponent::key("user"), PathComponent::key("name")]);
//! assert_eq!(name, Some("Alice"));
//!
//! // Deterministic recursive search.
//! assert_eq!(doc.find_first("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`JsonValue`] tree, number duality, construction surface
//! - [`de`] / [`ser`]: serde integration and the JSON text boundary
//! - [`access`]: coercing accessors, element lookups, typed getters
//! - [`path`]: [`PathComponent`] addresses and `at` traversal
//! - [`search`]: depth-first key/predicate search with sorted-key descent
//! - [`error`]: error types for the text boundary

pub mod access;
pub mod de;
pub mod error;
pub mod path;
pub mod search;
pub mod ser;
pub mod value;

pub use access::{JsonMapExt, ValueSliceExt};
pub use de::from_json_str;
pub use error::ProbeError;
pub use path::{format_path, PathComponent};
pub use search::Match;
pub use ser::{to_json_string, to_json_string_pretty};
pub use value::{JsonMap, JsonNumber, JsonValue};
