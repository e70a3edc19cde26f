//! json-coerce-extract - shape extraction for parsed JSON values.
//!
//! Provides the [`Extract`] trait: a pure type test plus clone from a
//! [`serde_json::Value`] to one concrete shape. Extraction never converts
//! between shapes; a string number stays a string, a float never becomes an
//! integer. Composite shapes (`Vec<T>`, `BTreeMap<String, T>`) match only
//! when every element matches, so a mixed array extracts as nothing.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A shape that can be read out of a JSON value by exact type test.
pub trait Extract: Sized {
    /// Returns the value cast to this shape, or `None` on any mismatch.
    fn extract(value: &Value) -> Option<Self>;
}

/// Extracts a shape from an optional value. Absent input extracts as nothing.
///
/// Examples:
/// - `extract::<String>(Some(&json!("a"))) == Some("a".to_string())`
/// - `extract::<i64>(Some(&json!("1"))) == None` (no coercion)
/// - `extract::<Vec<bool>>(None) == None`
pub fn extract<T: Extract>(value: Option<&Value>) -> Option<T> {
    T::extract(value?)
}

impl Extract for Value {
    fn extract(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl Extract for String {
    fn extract(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Extract for bool {
    fn extract(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Extract for i64 {
    fn extract(value: &Value) -> Option<Self> {
        // Integer numbers only; 2.0 is a float and does not match.
        value.as_i64()
    }
}

impl Extract for i32 {
    fn extract(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|wide| i32::try_from(wide).ok())
    }
}

impl Extract for u64 {
    fn extract(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl Extract for f64 {
    fn extract(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Extract for Map<String, Value> {
    fn extract(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl<T: Extract> Extract for Vec<T> {
    fn extract(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::extract).collect()
    }
}

impl<T: Extract> Extract for BTreeMap<String, T> {
    fn extract(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(key, element)| Some((key.clone(), T::extract(element)?)))
            .collect()
    }
}
