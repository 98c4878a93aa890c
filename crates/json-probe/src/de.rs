//! Deserialization: [`JsonValue`] from any self-describing `serde` format,
//! plus the JSON text entry point.
//!
//! Decoding drives a fixed detection order through `deserialize_any`:
//! containers first (map, then sequence), then null, boolean, integer,
//! double, and finally string. Number tokens that parse as integers land in
//! `JsonNumber::Int`; only values with a fractional or exponent part land in
//! `JsonNumber::Float`, so `2` and `2.0` decode to different values. Input
//! shapes outside the JSON model (raw bytes, for instance) are rejected with
//! an invalid-type error naming what was expected.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::error::Result;
use crate::value::{JsonMap, JsonNumber, JsonValue};

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::Number(JsonNumber::Int(value)))
    }

    // Magnitudes beyond i64 stay representable, at double precision.
    fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
        if let Ok(int) = i64::try_from(value) {
            Ok(JsonValue::Number(JsonNumber::Int(int)))
        } else {
            Ok(JsonValue::Number(JsonNumber::Float(value as f64)))
        }
    }

    fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::Number(JsonNumber::Float(value)))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(JsonValue::Array(elements))
    }

    // Duplicate keys: the last occurrence wins.
    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = JsonMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry()? {
            entries.insert(key, value);
        }
        Ok(JsonValue::Object(entries))
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

/// Parses JSON text into a [`JsonValue`].
///
/// Accepts any top-level JSON value, not just objects and arrays.
///
/// # Errors
///
/// Returns [`ProbeError::Parse`](crate::ProbeError::Parse) if the input is
/// not valid JSON.
pub fn from_json_str(text: &str) -> Result<JsonValue> {
    let value = serde_json::from_str(text)?;
    Ok(value)
}
