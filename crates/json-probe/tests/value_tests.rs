use json_probe::{JsonMap, JsonNumber, JsonValue};

/// Build an object value from literal pairs.
fn obj(pairs: &[(&str, JsonValue)]) -> JsonValue {
    let map: JsonMap = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    JsonValue::Object(map)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn signed_integer_widths_normalize_to_int() {
    assert_eq!(JsonValue::from(7i8), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(JsonValue::from(7i16), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(JsonValue::from(7i32), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(JsonValue::from(7i64), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(
        JsonValue::from(i64::MIN),
        JsonValue::Number(JsonNumber::Int(i64::MIN))
    );
}

#[test]
fn unsigned_integer_widths_normalize_to_int() {
    assert_eq!(JsonValue::from(7u8), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(JsonValue::from(7u16), JsonValue::Number(JsonNumber::Int(7)));
    assert_eq!(
        JsonValue::from(u32::MAX),
        JsonValue::Number(JsonNumber::Int(4_294_967_295))
    );
}

#[test]
fn float_widths_normalize_to_float() {
    assert_eq!(
        JsonValue::from(2.5f32),
        JsonValue::Number(JsonNumber::Float(2.5))
    );
    assert_eq!(
        JsonValue::from(2.5f64),
        JsonValue::Number(JsonNumber::Float(2.5))
    );
}

#[test]
fn string_constructors() {
    assert_eq!(JsonValue::from("hi"), JsonValue::String("hi".to_string()));
    assert_eq!(
        JsonValue::from("hi".to_string()),
        JsonValue::String("hi".to_string())
    );
}

#[test]
fn container_constructors() {
    let arr = JsonValue::from(vec![JsonValue::from(1), JsonValue::from("x")]);
    assert!(arr.is_array());

    let map: JsonMap = [("k".to_string(), JsonValue::from(true))].into_iter().collect();
    let object = JsonValue::from(map);
    assert!(object.is_object());
}

#[test]
fn number_constructor_preserves_variant() {
    assert_eq!(
        JsonValue::from(JsonNumber::Int(3)),
        JsonValue::Number(JsonNumber::Int(3))
    );
    assert_eq!(
        JsonValue::from(JsonNumber::Float(3.0)),
        JsonValue::Number(JsonNumber::Float(3.0))
    );
}

#[test]
fn default_is_null() {
    assert_eq!(JsonValue::default(), JsonValue::Null);
    assert!(JsonValue::default().is_null());
}

// ============================================================================
// Structural Equality
// ============================================================================

#[test]
fn integer_and_float_never_compare_equal() {
    assert_ne!(JsonValue::from(2i64), JsonValue::from(2.0f64));
    assert_ne!(JsonNumber::Int(2), JsonNumber::Float(2.0));
}

#[test]
fn object_equality_ignores_insertion_order() {
    let forward = obj(&[
        ("a", JsonValue::from(1)),
        ("b", JsonValue::from(2)),
        ("c", JsonValue::from(3)),
    ]);
    let backward = obj(&[
        ("c", JsonValue::from(3)),
        ("b", JsonValue::from(2)),
        ("a", JsonValue::from(1)),
    ]);
    assert_eq!(forward, backward);
}

#[test]
fn object_equality_is_keyset_sensitive() {
    let with_extra = obj(&[("a", JsonValue::from(1)), ("b", JsonValue::from(2))]);
    let without = obj(&[("a", JsonValue::from(1))]);
    assert_ne!(with_extra, without);
}

#[test]
fn array_equality_is_order_sensitive() {
    let ab = JsonValue::from(vec![JsonValue::from(1), JsonValue::from(2)]);
    let ba = JsonValue::from(vec![JsonValue::from(2), JsonValue::from(1)]);
    assert_ne!(ab, ba);
}

#[test]
fn nested_equality_is_recursive() {
    let left = obj(&[(
        "outer",
        obj(&[("inner", JsonValue::from(vec![JsonValue::from(1)]))]),
    )]);
    let right = obj(&[(
        "outer",
        obj(&[("inner", JsonValue::from(vec![JsonValue::from(1)]))]),
    )]);
    assert_eq!(left, right);
}

#[test]
fn empty_string_is_a_valid_key() {
    let value = obj(&[("", JsonValue::from("anon"))]);
    assert_eq!(value.get_str(""), Some("anon"));
}

#[test]
fn null_is_data_not_absence() {
    let stored = obj(&[("k", JsonValue::Null)]);
    assert_eq!(stored.get("k"), Some(&JsonValue::Null));
    assert_eq!(stored.get("missing"), None);
}

// ============================================================================
// Predicates and Strict Projections
// ============================================================================

#[test]
fn predicates_match_exactly_one_variant() {
    let values = [
        JsonValue::from("s"),
        JsonValue::from(1),
        JsonValue::from(true),
        JsonValue::Null,
        JsonValue::Array(vec![]),
        JsonValue::Object(JsonMap::new()),
    ];
    for value in &values {
        let hits = [
            value.is_string(),
            value.is_number(),
            value.is_bool(),
            value.is_null(),
            value.is_array(),
            value.is_object(),
        ]
        .iter()
        .filter(|hit| **hit)
        .count();
        assert_eq!(hits, 1, "expected one predicate hit for {value:?}");
    }
}

#[test]
fn strict_projections_reject_other_variants() {
    let s = JsonValue::from("text");
    assert_eq!(s.as_str(), Some("text"));
    assert_eq!(s.as_array(), None);
    assert_eq!(s.as_object(), None);
    assert_eq!(s.as_number(), None);

    let n = JsonValue::from(4);
    assert_eq!(n.as_number(), Some(JsonNumber::Int(4)));
    assert_eq!(n.as_str(), None);

    let arr = JsonValue::from(vec![JsonValue::from(1)]);
    assert_eq!(arr.as_array().map(<[JsonValue]>::len), Some(1));
    assert_eq!(arr.as_object(), None);
}

#[test]
fn type_names() {
    assert_eq!(JsonValue::from("x").type_name(), "string");
    assert_eq!(JsonValue::from(1).type_name(), "number");
    assert_eq!(JsonValue::from(1.5).type_name(), "number");
    assert_eq!(JsonValue::from(false).type_name(), "boolean");
    assert_eq!(JsonValue::Null.type_name(), "null");
    assert_eq!(JsonValue::Array(vec![]).type_name(), "array");
    assert_eq!(JsonValue::Object(JsonMap::new()).type_name(), "object");
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn display_renders_scalars_as_json() {
    assert_eq!(JsonValue::Null.to_string(), "null");
    assert_eq!(JsonValue::from(true).to_string(), "true");
    assert_eq!(JsonValue::from(42).to_string(), "42");
    assert_eq!(JsonValue::from("hi").to_string(), r#""hi""#);
}

#[test]
fn display_preserves_the_float_marker() {
    // 2 and 2.0 are different values and must render differently.
    assert_eq!(JsonValue::from(2).to_string(), "2");
    assert_eq!(JsonValue::from(2.0).to_string(), "2.0");
    assert_eq!(JsonValue::from(3.14).to_string(), "3.14");
}

#[test]
fn display_escapes_string_content() {
    assert_eq!(
        JsonValue::from("say \"hi\"").to_string(),
        r#""say \"hi\"""#
    );
    assert_eq!(
        JsonValue::from("line1\nline2").to_string(),
        r#""line1\nline2""#
    );
}

#[test]
fn display_sorts_object_keys() {
    let value = obj(&[
        ("zeta", JsonValue::from(1)),
        ("alpha", JsonValue::from(2)),
        ("mid", JsonValue::from(3)),
    ]);
    assert_eq!(value.to_string(), r#"{"alpha":2,"mid":3,"zeta":1}"#);
}

#[test]
fn display_renders_nested_containers() {
    let value = obj(&[(
        "items",
        JsonValue::from(vec![JsonValue::from(1), JsonValue::Null]),
    )]);
    assert_eq!(value.to_string(), r#"{"items":[1,null]}"#);
}
