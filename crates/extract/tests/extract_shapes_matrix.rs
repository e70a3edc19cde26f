//! Shape extraction matrix: every declared shape against matching and
//! mismatching inputs, including the composite all-or-nothing rule.

use std::collections::BTreeMap;

use json_coerce_extract::extract;
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[test]
fn string_matches() {
    assert_eq!(extract::<String>(Some(&json!("hi"))), Some("hi".to_string()));
}

#[test]
fn string_rejects_other_scalars() {
    assert_eq!(extract::<String>(Some(&json!(1))), None);
    assert_eq!(extract::<String>(Some(&json!(true))), None);
    assert_eq!(extract::<String>(Some(&json!(null))), None);
}

#[test]
fn string_array_matches() {
    assert_eq!(
        extract::<Vec<String>>(Some(&json!(["a", "b"]))),
        Some(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn string_array_rejects_mixed_elements() {
    assert_eq!(extract::<Vec<String>>(Some(&json!(["a", 1]))), None);
}

#[test]
fn string_map_matches() {
    let mut expected = BTreeMap::new();
    expected.insert("k".to_string(), "v".to_string());
    assert_eq!(
        extract::<BTreeMap<String, String>>(Some(&json!({"k": "v"}))),
        Some(expected)
    );
}

#[test]
fn string_map_rejects_mixed_values() {
    assert_eq!(
        extract::<BTreeMap<String, String>>(Some(&json!({"k": "v", "n": 1}))),
        None
    );
}

// ---------------------------------------------------------------------------
// Bools
// ---------------------------------------------------------------------------

#[test]
fn bool_matches() {
    assert_eq!(extract::<bool>(Some(&json!(false))), Some(false));
}

#[test]
fn bool_rejects_truthy_lookalikes() {
    assert_eq!(extract::<bool>(Some(&json!(1))), None);
    assert_eq!(extract::<bool>(Some(&json!("true"))), None);
}

#[test]
fn bool_array_matches() {
    assert_eq!(
        extract::<Vec<bool>>(Some(&json!([true, false]))),
        Some(vec![true, false])
    );
}

#[test]
fn bool_map_matches() {
    let mut expected = BTreeMap::new();
    expected.insert("on".to_string(), true);
    assert_eq!(
        extract::<BTreeMap<String, bool>>(Some(&json!({"on": true}))),
        Some(expected)
    );
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

#[test]
fn int_matches() {
    assert_eq!(extract::<i64>(Some(&json!(-3))), Some(-3));
}

#[test]
fn int_rejects_floats_and_strings() {
    assert_eq!(extract::<i64>(Some(&json!(3.5))), None);
    assert_eq!(extract::<i64>(Some(&json!("3"))), None);
}

#[test]
fn int_array_matches() {
    assert_eq!(
        extract::<Vec<i64>>(Some(&json!([1, 2, 3]))),
        Some(vec![1, 2, 3])
    );
}

#[test]
fn int_map_matches() {
    let mut expected = BTreeMap::new();
    expected.insert("n".to_string(), 9_i64);
    assert_eq!(
        extract::<BTreeMap<String, i64>>(Some(&json!({"n": 9}))),
        Some(expected)
    );
}

// ---------------------------------------------------------------------------
// Generic arrays and array maps
// ---------------------------------------------------------------------------

#[test]
fn generic_array_matches_mixed_content() {
    assert_eq!(
        extract::<Vec<Value>>(Some(&json!([1, "a", null]))),
        Some(vec![json!(1), json!("a"), json!(null)])
    );
}

#[test]
fn generic_array_rejects_non_arrays() {
    assert_eq!(extract::<Vec<Value>>(Some(&json!({"a": 1}))), None);
}

#[test]
fn array_map_matches() {
    let source = json!({"xs": [1, 2], "ys": ["a"]});
    let extracted = extract::<BTreeMap<String, Vec<Value>>>(Some(&source)).unwrap();
    assert_eq!(extracted["xs"], vec![json!(1), json!(2)]);
    assert_eq!(extracted["ys"], vec![json!("a")]);
}

#[test]
fn array_map_rejects_scalar_values() {
    assert_eq!(
        extract::<BTreeMap<String, Vec<Value>>>(Some(&json!({"xs": [1], "n": 2}))),
        None
    );
}

// ---------------------------------------------------------------------------
// Object maps
// ---------------------------------------------------------------------------

#[test]
fn object_matches_as_map() {
    let extracted = extract::<Map<String, Value>>(Some(&json!({"a": 1}))).unwrap();
    assert_eq!(extracted.get("a"), Some(&json!(1)));
}

#[test]
fn object_rejects_arrays() {
    assert_eq!(extract::<Map<String, Value>>(Some(&json!([1]))), None);
}

#[test]
fn object_array_matches() {
    let extracted =
        extract::<Vec<Map<String, Value>>>(Some(&json!([{"a": 1}, {"b": 2}]))).unwrap();
    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted[0].get("a"), Some(&json!(1)));
    assert_eq!(extracted[1].get("b"), Some(&json!(2)));
}

#[test]
fn object_array_rejects_scalar_elements() {
    assert_eq!(
        extract::<Vec<Map<String, Value>>>(Some(&json!([{"a": 1}, 2]))),
        None
    );
}

#[test]
fn object_map_matches() {
    let extracted =
        extract::<BTreeMap<String, Map<String, Value>>>(Some(&json!({"x": {"a": 1}}))).unwrap();
    assert_eq!(extracted["x"].get("a"), Some(&json!(1)));
}

#[test]
fn object_map_rejects_mixed_values() {
    assert_eq!(
        extract::<BTreeMap<String, Map<String, Value>>>(Some(&json!({"x": {"a": 1}, "y": 2}))),
        None
    );
}

// ---------------------------------------------------------------------------
// Absence and nesting
// ---------------------------------------------------------------------------

#[test]
fn absent_input_extracts_nothing() {
    assert_eq!(extract::<Vec<String>>(None), None);
    assert_eq!(extract::<Map<String, Value>>(None), None);
}

#[test]
fn null_is_not_any_shape_but_value() {
    assert_eq!(extract::<String>(Some(&json!(null))), None);
    assert_eq!(extract::<Vec<Value>>(Some(&json!(null))), None);
    assert_eq!(extract::<Value>(Some(&json!(null))), Some(json!(null)));
}

#[test]
fn empty_composites_match_any_element_shape() {
    assert_eq!(extract::<Vec<String>>(Some(&json!([]))), Some(vec![]));
    assert_eq!(extract::<Vec<i64>>(Some(&json!([]))), Some(vec![]));
    assert_eq!(
        extract::<BTreeMap<String, bool>>(Some(&json!({}))),
        Some(BTreeMap::new())
    );
}

#[test]
fn nested_composites_compose() {
    assert_eq!(
        extract::<Vec<Vec<i64>>>(Some(&json!([[1], [2, 3]]))),
        Some(vec![vec![1], vec![2, 3]])
    );
}
