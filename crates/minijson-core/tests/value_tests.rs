use minijson_core::{JsonError, Value};

// ============================================================================
// Construction
// ============================================================================

#[test]
fn default_is_null() {
    assert!(Value::default().is_null());
}

#[test]
fn factories_produce_empty_containers() {
    let arr = Value::array();
    assert!(arr.is_array());
    assert!(arr.as_array().unwrap().is_empty());

    let obj = Value::object();
    assert!(obj.is_object());
    assert!(obj.as_object().unwrap().is_empty());
}

#[test]
fn from_bool() {
    assert_eq!(Value::from(true), Value::Bool(true));
}

#[test]
fn from_integer_normalizes_to_number() {
    assert_eq!(Value::from(42i64), Value::Number(42.0));
    assert_eq!(Value::from(-7i32), Value::Number(-7.0));
    assert_eq!(Value::from(7u32), Value::Number(7.0));
}

#[test]
fn from_float() {
    assert_eq!(Value::from(2.5), Value::Number(2.5));
}

#[test]
fn from_str_and_string() {
    assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    assert_eq!(Value::from("hi".to_string()), Value::String("hi".to_string()));
}

#[test]
fn from_vec_converts_elements() {
    let v = Value::from(vec![1i64, 2, 3]);
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0)
        ])
    );
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn predicates_are_exclusive_and_exhaustive() {
    let samples = [
        Value::Null,
        Value::Bool(false),
        Value::Number(0.0),
        Value::from(""),
        Value::array(),
        Value::object(),
    ];
    for (i, v) in samples.iter().enumerate() {
        let hits = [
            v.is_null(),
            v.is_bool(),
            v.is_number(),
            v.is_string(),
            v.is_array(),
            v.is_object(),
        ];
        assert_eq!(hits.iter().filter(|&&h| h).count(), 1, "value {v:?}");
        assert!(hits[i], "value {v:?} should match predicate {i}");
    }
}

// ============================================================================
// Checked accessors
// ============================================================================

#[test]
fn accessors_return_payload_on_match() {
    assert!(Value::Bool(true).as_bool().unwrap());
    assert_eq!(Value::Number(1.5).as_number().unwrap(), 1.5);
    assert_eq!(Value::from("s").as_str().unwrap(), "s");
    assert_eq!(Value::from(vec![1i64]).as_array().unwrap().len(), 1);
    assert!(Value::object().as_object().unwrap().is_empty());
}

#[test]
fn accessor_on_wrong_variant_is_type_mismatch() {
    let err = Value::Null.as_bool().unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: "bool",
            actual: "null"
        }
    );

    let err = Value::from("s").as_number().unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: "number",
            actual: "string"
        }
    );
}

#[test]
fn mutable_accessors_allow_in_place_edits() {
    let mut v = Value::from("old");
    v.as_string_mut().unwrap().push_str("er");
    assert_eq!(v.as_str().unwrap(), "older");

    let mut n = Value::Number(1.0);
    *n.as_number_mut().unwrap() += 1.0;
    assert_eq!(n, Value::Number(2.0));

    let mut b = Value::Bool(false);
    *b.as_bool_mut().unwrap() = true;
    assert!(b.as_bool().unwrap());
}

// ============================================================================
// Object conveniences
// ============================================================================

#[test]
fn entry_inserts_null_for_absent_key() {
    let mut v = Value::object();
    assert!(v.entry("missing").is_null());
    assert!(v.contains("missing"));
}

#[test]
fn entry_resets_non_object_to_empty_object() {
    let mut v = Value::from("about to vanish");
    *v.entry("k") = Value::from(1i64);
    assert!(v.is_object());
    assert_eq!(v.as_object().unwrap().len(), 1);
    assert_eq!(v.at("k").unwrap(), &Value::Number(1.0));
}

#[test]
fn entry_overwrite_replaces_value() {
    let mut v = Value::object();
    *v.entry("a") = Value::from(1i64);
    *v.entry("a") = Value::from(2i64);
    assert_eq!(v.as_object().unwrap().len(), 1);
    assert_eq!(v.at("a").unwrap(), &Value::Number(2.0));
}

#[test]
fn try_entry_fails_on_non_object() {
    let mut v = Value::from(3i64);
    let err = v.try_entry("k").unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: "object",
            actual: "number"
        }
    );
    // The value must be untouched by the failed access.
    assert_eq!(v, Value::Number(3.0));
}

#[test]
fn try_entry_works_on_object() {
    let mut v = Value::object();
    *v.try_entry("k").unwrap() = Value::Bool(true);
    assert!(v.at("k").unwrap().as_bool().unwrap());
}

#[test]
fn at_missing_key_is_key_not_found() {
    let v = Value::object();
    assert_eq!(
        v.at("nope").unwrap_err(),
        JsonError::KeyNotFound {
            key: "nope".to_string()
        }
    );
}

#[test]
fn at_on_non_object_is_type_mismatch() {
    let v = Value::from(vec![1i64]);
    assert_eq!(
        v.at("k").unwrap_err(),
        JsonError::TypeMismatch {
            expected: "object",
            actual: "array"
        }
    );
}

#[test]
fn contains_never_errors() {
    assert!(!Value::Null.contains("k"));
    assert!(!Value::from(1i64).contains("k"));
    assert!(!Value::object().contains("k"));

    let mut v = Value::object();
    *v.entry("k") = Value::Null;
    assert!(v.contains("k"));
}

// ============================================================================
// Array conveniences
// ============================================================================

#[test]
fn push_appends_in_order() {
    let mut v = Value::array();
    v.push(1i64);
    v.push("two");
    v.push(true);
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0], Value::Number(1.0));
    assert_eq!(arr[1], Value::from("two"));
    assert_eq!(arr[2], Value::Bool(true));
}

#[test]
fn push_resets_non_array_to_empty_array() {
    let mut v = Value::from("gone");
    v.push(1i64);
    assert!(v.is_array());
    assert_eq!(v.as_array().unwrap().len(), 1);
}

#[test]
fn try_push_fails_on_non_array() {
    let mut v = Value::object();
    let err = v.try_push(1i64).unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: "array",
            actual: "object"
        }
    );
    assert!(v.is_object());
}

#[test]
fn try_push_works_on_array() {
    let mut v = Value::array();
    v.try_push("x").unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
}

// ============================================================================
// Ownership and equality
// ============================================================================

#[test]
fn clone_is_a_deep_copy() {
    let mut original = Value::object();
    original.entry("list").push(1i64);
    let copy = original.clone();
    original.entry("list").push(2i64);

    assert_eq!(copy.at("list").unwrap().as_array().unwrap().len(), 1);
    assert_eq!(original.at("list").unwrap().as_array().unwrap().len(), 2);
}

#[test]
fn display_renders_compact_json() {
    let mut v = Value::object();
    *v.entry("x") = Value::from(1i64);
    assert_eq!(v.to_string(), r#"{"x":1}"#);
}

#[test]
fn from_str_parses() {
    let v: Value = "[1,2]".parse().unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);

    let err = "nope".parse::<Value>().unwrap_err();
    assert!(matches!(err, JsonError::Syntax { .. }));
}
