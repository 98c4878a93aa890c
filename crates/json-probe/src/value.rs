//! Core value types: [`JsonValue`] and its numeric sub-variant [`JsonNumber`].
//!
//! A `JsonValue` is a closed tagged union over the six JSON shapes. Ownership
//! is strictly tree-shaped: containers own their children outright, so a
//! value is finite and acyclic by construction and needs no reference
//! counting.
//!
//! # Key design decisions
//!
//! - **Integer/float duality**: `JsonNumber` keeps `Int(i64)` and `Float(f64)`
//!   as distinct variants. `2` and `2.0` are different values and never
//!   compare equal.
//! - **Unordered objects**: `Object` is backed by `HashMap`, so insertion
//!   order carries no meaning. Equality is key-set based, and anything that
//!   needs a reproducible order (search, display) sorts keys explicitly.
//! - **Exact constructors**: the `From` impls accept only widths that embed
//!   exactly into `i64`/`f64`. There is no lossy construction path.

use std::collections::HashMap;
use std::fmt;

/// A JSON number: either a 64-bit signed integer or a 64-bit IEEE double.
///
/// The two sub-variants are never conflated: `Int(2)` and `Float(2.0)` are
/// distinct values for equality purposes. Which variant a decoded number
/// lands in is decided by the detection ladder in the codec (integer parse
/// attempted before double).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Int(i64),
    Float(f64),
}

/// The mapping used for the `Object` variant.
///
/// Deliberately unordered: two objects with the same entries are equal no
/// matter what order the entries were inserted in.
pub type JsonMap = HashMap<String, JsonValue>;

/// A dynamic JSON value that can represent any valid JSON document.
///
/// Values are immutable once built: construct them by decoding text (see
/// [`from_json_str`](crate::from_json_str)) or by composing literals through
/// the `From` impls, then query them with the accessor, path, and search
/// APIs. All of those are read-only and signal failure with `None` rather
/// than panicking or erroring.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    String(String),
    Number(JsonNumber),
    Bool(bool),
    #[default]
    Null,
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

impl JsonValue {
    /// Returns `true` if the value is `Null`.
    ///
    /// Note that a present `Null` is data; a missing key is absence. The
    /// accessor layer keeps those distinct (`None` vs `&Null`).
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number (either sub-variant).
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// The string content if this is a `String`, with no coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements if this is an `Array`, with no coercion.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// The entries if this is an `Object`, with no coercion.
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The raw number if this is a `Number`, preserving the sub-variant.
    ///
    /// Use this when the `Int`/`Float` distinction matters; the coercing
    /// [`as_i64`](JsonValue::as_i64) / [`as_f64`](JsonValue::as_f64)
    /// accessors deliberately blur it.
    pub fn as_number(&self) -> Option<JsonNumber> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The JSON type name, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            JsonValue::String(_) => "string",
            JsonValue::Number(_) => "number",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Null => "null",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

/// Renders compact JSON text with object keys in sorted order.
///
/// Routing through `serde_json::Value` (whose default map is ordered) keeps
/// the output deterministic even though the backing `HashMap` is not.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_value(self).map_err(|_| fmt::Error)?;
        write!(f, "{rendered}")
    }
}

impl From<i8> for JsonNumber {
    fn from(value: i8) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<i16> for JsonNumber {
    fn from(value: i16) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<i32> for JsonNumber {
    fn from(value: i32) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        JsonNumber::Int(value)
    }
}

impl From<u8> for JsonNumber {
    fn from(value: u8) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<u16> for JsonNumber {
    fn from(value: u16) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<u32> for JsonNumber {
    fn from(value: u32) -> Self {
        JsonNumber::Int(value as i64)
    }
}

impl From<f32> for JsonNumber {
    fn from(value: f32) -> Self {
        JsonNumber::Float(value as f64)
    }
}

impl From<f64> for JsonNumber {
    fn from(value: f64) -> Self {
        JsonNumber::Float(value)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i8> for JsonValue {
    fn from(value: i8) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<i16> for JsonValue {
    fn from(value: i16) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<u8> for JsonValue {
    fn from(value: u8) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<u16> for JsonValue {
    fn from(value: u16) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}
