//! Scalar coercion: one value, one target type, a fixed fallback chain.

use json_coerce_extract::Extract;
use serde_json::Value;
use url::Url;

/// A type coercible from a single JSON value.
///
/// Every implementation runs a fixed chain, first match wins:
/// the exact shape is taken as-is; integer targets additionally parse
/// base-10 strings; [`Url`] parses strings; [`time::OffsetDateTime`]
/// reads any numeric form as Unix epoch seconds. Anything else fails.
pub trait Coerce: Sized {
    fn coerce(value: &Value) -> Option<Self>;
}

/// Coerces an optional value into `T`. Absent input fails.
pub fn coerce<T: Coerce>(value: Option<&Value>) -> Option<T> {
    T::coerce(value?)
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        String::extract(value)
    }
}

impl Coerce for bool {
    fn coerce(value: &Value) -> Option<Self> {
        bool::extract(value)
    }
}

impl Coerce for f64 {
    fn coerce(value: &Value) -> Option<Self> {
        f64::extract(value)
    }
}

impl Coerce for i64 {
    fn coerce(value: &Value) -> Option<Self> {
        if let Some(exact) = i64::extract(value) {
            return Some(exact);
        }
        String::extract(value)?.parse().ok()
    }
}

impl Coerce for i32 {
    fn coerce(value: &Value) -> Option<Self> {
        if let Some(exact) = i32::extract(value) {
            return Some(exact);
        }
        String::extract(value)?.parse().ok()
    }
}

impl Coerce for u64 {
    fn coerce(value: &Value) -> Option<Self> {
        if let Some(exact) = u64::extract(value) {
            return Some(exact);
        }
        String::extract(value)?.parse().ok()
    }
}

impl Coerce for Url {
    fn coerce(value: &Value) -> Option<Self> {
        Url::parse(&String::extract(value)?).ok()
    }
}
