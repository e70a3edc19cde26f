//! Date coercion.
//!
//! Two mutually exclusive entry points: the [`Coerce`] impl reads any
//! numeric form as Unix epoch seconds, while [`coerce_date`] and its
//! collection variants parse strings against an explicit format pattern
//! (the `time` format-description syntax, e.g. `"[year]-[month]-[day]"`).
//! Neither falls back to the other.

use std::collections::BTreeMap;

use json_coerce_extract::{extract, Extract};
use serde_json::Value;
use time::format_description;
use time::parsing::Parsable;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::scalar::Coerce;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

impl Coerce for OffsetDateTime {
    fn coerce(value: &Value) -> Option<Self> {
        if let Some(seconds) = i64::extract(value) {
            return OffsetDateTime::from_unix_timestamp(seconds).ok();
        }
        // Fractional seconds survive as sub-second precision.
        let seconds = f64::extract(value)?;
        OffsetDateTime::from_unix_timestamp_nanos((seconds * NANOS_PER_SECOND) as i128).ok()
    }
}

/// Parses a string value against an explicit format pattern.
///
/// The value must be a string; an absent value, any other shape, a bad
/// pattern, or a non-matching string all fail. The string is tried as an
/// offset datetime, then a naive datetime assumed UTC, then a calendar
/// date at midnight UTC.
pub fn coerce_date(value: Option<&Value>, format: &str) -> Option<OffsetDateTime> {
    let text: String = extract(value)?;
    let format = format_description::parse(format).ok()?;
    parse_formatted(&text, format.as_slice())
}

/// Parses every element of a generic array against a shared format.
///
/// All-or-nothing: one element that is not a string, or does not match the
/// pattern, fails the whole sequence.
pub fn coerce_date_seq(value: Option<&Value>, format: &str) -> Option<Vec<OffsetDateTime>> {
    let items = value?.as_array()?;
    let format = format_description::parse(format).ok()?;
    items
        .iter()
        .map(|element| {
            let text = String::extract(element)?;
            parse_formatted(&text, format.as_slice())
        })
        .collect()
}

/// Parses every value of a generic object map against a shared format.
/// Same all-or-nothing rule as [`coerce_date_seq`].
pub fn coerce_date_map(
    value: Option<&Value>,
    format: &str,
) -> Option<BTreeMap<String, OffsetDateTime>> {
    let entries = value?.as_object()?;
    let format = format_description::parse(format).ok()?;
    entries
        .iter()
        .map(|(key, element)| {
            let text = String::extract(element)?;
            Some((key.clone(), parse_formatted(&text, format.as_slice())?))
        })
        .collect()
}

fn parse_formatted(text: &str, format: &(impl Parsable + ?Sized)) -> Option<OffsetDateTime> {
    if let Ok(stamp) = OffsetDateTime::parse(text, format) {
        return Some(stamp);
    }
    if let Ok(stamp) = PrimitiveDateTime::parse(text, format) {
        return Some(stamp.assume_utc());
    }
    Date::parse(text, format)
        .ok()
        .map(|date| date.midnight().assume_utc())
}
