//! Serialization: [`JsonValue`] into any `serde` data format, plus JSON text
//! rendering helpers.
//!
//! The `Serialize` impl maps each variant onto the corresponding serde
//! primitive (`Null` to unit, `Int` to `i64`, `Float` to `f64`, containers
//! to seq/map), so a `JsonValue` can be fed to any serde serializer, not
//! just JSON.
//!
//! The text helpers route through `serde_json::Value`, whose map keeps keys
//! ordered. That makes the rendered text deterministic even though the
//! backing object map is a `HashMap`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::{ProbeError, Result};
use crate::value::{JsonNumber, JsonValue};

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(JsonNumber::Int(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(JsonNumber::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut obj = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    obj.serialize_entry(key, value)?;
                }
                obj.end()
            }
        }
    }
}

/// Renders a value as compact JSON text with object keys in sorted order.
///
/// # Errors
///
/// Returns [`ProbeError::Serialize`] if the value cannot be rendered. With
/// finite floats this does not happen; a non-finite `Float` renders as
/// `null` per serde_json convention rather than failing.
pub fn to_json_string(value: &JsonValue) -> Result<String> {
    let ordered = serde_json::to_value(value).map_err(ProbeError::Serialize)?;
    serde_json::to_string(&ordered).map_err(ProbeError::Serialize)
}

/// Renders a value as pretty-printed JSON text with object keys in sorted
/// order.
///
/// # Errors
///
/// Returns [`ProbeError::Serialize`] if the value cannot be rendered.
pub fn to_json_string_pretty(value: &JsonValue) -> Result<String> {
    let ordered = serde_json::to_value(value).map_err(ProbeError::Serialize)?;
    serde_json::to_string_pretty(&ordered).map_err(ProbeError::Serialize)
}
