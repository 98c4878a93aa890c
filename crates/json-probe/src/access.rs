//! Lenient accessors: the coercion ladder, object/array element access,
//! typed getters, and filter helpers for slices and maps.
//!
//! Everything in this module follows one rule: a lookup or conversion that
//! cannot succeed yields `None` (or skips the element, for the filter
//! helpers). Nothing here panics or returns an error, so chains of lookups
//! over malformed or partial structure stay guard-free.

use crate::path::PathComponent;
use crate::value::{JsonMap, JsonNumber, JsonValue};

/// Shared target for [`JsonValue::get_or_null`].
static NULL: JsonValue = JsonValue::Null;

impl JsonValue {
    /// Reads the value as an `i64`, coercing where the content allows it.
    ///
    /// Coercion rules:
    /// - `Int` passes through.
    /// - `Float` truncates toward zero (`3.9` becomes `3`, `-3.9` becomes
    ///   `-3`). Non-finite floats and floats whose integer part does not fit
    ///   an `i64` yield `None`.
    /// - `String` is parsed as a decimal integer, with no trimming and no
    ///   float fallback (`"42"` works, `"3.9"` does not).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(JsonNumber::Int(i)) => Some(*i),
            JsonValue::Number(JsonNumber::Float(f)) => float_to_i64(*f),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reads the value as an `f64`, coercing where the content allows it.
    ///
    /// `Float` passes through, `Int` widens exactly, `String` is parsed as a
    /// decimal float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(JsonNumber::Float(f)) => Some(*f),
            JsonValue::Number(JsonNumber::Int(i)) => Some(*i as f64),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Reads the value as a `bool`, coercing where the content allows it.
    ///
    /// Coercion rules:
    /// - `Bool` passes through.
    /// - Numbers equal to `0` read as `false` and numbers equal to `1` read
    ///   as `true`; every other numeric value yields `None`.
    /// - Strings are trimmed and lowercased, then matched against the
    ///   accepted sets `true/t/1/yes/y` and `false/f/0/no/n`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            JsonValue::Number(n) => numeric_bool(*n),
            JsonValue::String(s) => textual_bool(s),
            _ => None,
        }
    }

    /// Looks up `key`, yielding `None` if the value is not an object or the
    /// key is missing.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Like [`get`](JsonValue::get), but substitutes a `Null` reference for
    /// absence so lookups can chain without unwrapping.
    ///
    /// Note the substitution erases the difference between a missing key and
    /// a stored `Null`; use `get` when that difference matters.
    pub fn get_or_null(&self, key: &str) -> &JsonValue {
        self.get(key).unwrap_or(&NULL)
    }

    /// Returns the array element at `index`, or `None` if the value is not
    /// an array or the index is out of bounds.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// String content under `key`, strict.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(JsonValue::as_str)
    }

    /// Integer under `key`, applying the [`as_i64`](JsonValue::as_i64)
    /// coercion.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(JsonValue::as_i64)
    }

    /// Double under `key`, applying the [`as_f64`](JsonValue::as_f64)
    /// coercion.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(JsonValue::as_f64)
    }

    /// Boolean under `key`, applying the [`as_bool`](JsonValue::as_bool)
    /// coercion.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(JsonValue::as_bool)
    }

    /// Object under `key`, strict.
    pub fn get_object(&self, key: &str) -> Option<&JsonMap> {
        self.get(key).and_then(JsonValue::as_object)
    }

    /// Array under `key`, strict.
    pub fn get_array(&self, key: &str) -> Option<&[JsonValue]> {
        self.get(key).and_then(JsonValue::as_array)
    }

    /// String content at `path`, strict.
    pub fn str_at(&self, path: &[PathComponent]) -> Option<&str> {
        self.at(path).and_then(JsonValue::as_str)
    }

    /// Integer at `path`, applying the [`as_i64`](JsonValue::as_i64)
    /// coercion.
    pub fn i64_at(&self, path: &[PathComponent]) -> Option<i64> {
        self.at(path).and_then(JsonValue::as_i64)
    }

    /// Double at `path`, applying the [`as_f64`](JsonValue::as_f64)
    /// coercion.
    pub fn f64_at(&self, path: &[PathComponent]) -> Option<f64> {
        self.at(path).and_then(JsonValue::as_f64)
    }

    /// Boolean at `path`, applying the [`as_bool`](JsonValue::as_bool)
    /// coercion.
    pub fn bool_at(&self, path: &[PathComponent]) -> Option<bool> {
        self.at(path).and_then(JsonValue::as_bool)
    }

    /// Object at `path`, strict.
    pub fn object_at(&self, path: &[PathComponent]) -> Option<&JsonMap> {
        self.at(path).and_then(JsonValue::as_object)
    }

    /// Array at `path`, strict.
    pub fn array_at(&self, path: &[PathComponent]) -> Option<&[JsonValue]> {
        self.at(path).and_then(JsonValue::as_array)
    }
}

// i64::MAX as f64 rounds up to 2^63, so the upper bound check is strict.
fn float_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let truncated = f.trunc();
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

fn numeric_bool(n: JsonNumber) -> Option<bool> {
    match n {
        JsonNumber::Int(0) => Some(false),
        JsonNumber::Int(1) => Some(true),
        JsonNumber::Float(f) if f == 0.0 => Some(false),
        JsonNumber::Float(f) if f == 1.0 => Some(true),
        _ => None,
    }
}

fn textual_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Some(true),
        "false" | "f" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Typed filters over a slice of values.
///
/// Each method keeps the elements the matching accessor accepts and silently
/// drops the rest, preserving order. The scalar filters reuse the coercing
/// accessors, so an array of numeric strings still yields integers;
/// `strings` and `objects` are strict.
pub trait ValueSliceExt {
    /// Elements that are strings.
    fn strings(&self) -> Vec<&str>;
    /// Elements coercible to `i64` via [`JsonValue::as_i64`].
    fn i64s(&self) -> Vec<i64>;
    /// Elements coercible to `f64` via [`JsonValue::as_f64`].
    fn f64s(&self) -> Vec<f64>;
    /// Elements coercible to `bool` via [`JsonValue::as_bool`].
    fn bools(&self) -> Vec<bool>;
    /// Elements that are objects.
    fn objects(&self) -> Vec<&JsonMap>;
}

impl ValueSliceExt for [JsonValue] {
    fn strings(&self) -> Vec<&str> {
        self.iter().filter_map(JsonValue::as_str).collect()
    }

    fn i64s(&self) -> Vec<i64> {
        self.iter().filter_map(JsonValue::as_i64).collect()
    }

    fn f64s(&self) -> Vec<f64> {
        self.iter().filter_map(JsonValue::as_f64).collect()
    }

    fn bools(&self) -> Vec<bool> {
        self.iter().filter_map(JsonValue::as_bool).collect()
    }

    fn objects(&self) -> Vec<&JsonMap> {
        self.iter().filter_map(JsonValue::as_object).collect()
    }
}

/// Typed getters for a directly-held [`JsonMap`], mirroring the getters on
/// [`JsonValue`] for code that already unwrapped the object layer.
pub trait JsonMapExt {
    /// String content under `key`, strict.
    fn get_str(&self, key: &str) -> Option<&str>;
    /// Integer under `key`, applying the [`JsonValue::as_i64`] coercion.
    fn get_i64(&self, key: &str) -> Option<i64>;
    /// Double under `key`, applying the [`JsonValue::as_f64`] coercion.
    fn get_f64(&self, key: &str) -> Option<f64>;
    /// Boolean under `key`, applying the [`JsonValue::as_bool`] coercion.
    fn get_bool(&self, key: &str) -> Option<bool>;
    /// Object under `key`, strict.
    fn get_object(&self, key: &str) -> Option<&JsonMap>;
    /// Array under `key`, strict.
    fn get_array(&self, key: &str) -> Option<&[JsonValue]>;
}

impl JsonMapExt for JsonMap {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(JsonValue::as_str)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(JsonValue::as_i64)
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(JsonValue::as_f64)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(JsonValue::as_bool)
    }

    fn get_object(&self, key: &str) -> Option<&JsonMap> {
        self.get(key).and_then(JsonValue::as_object)
    }

    fn get_array(&self, key: &str) -> Option<&[JsonValue]> {
        self.get(key).and_then(JsonValue::as_array)
    }
}
