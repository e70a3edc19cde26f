//! Object deserialization protocol.
//!
//! Any type implementing [`FromObject`] can be built from an object map,
//! alone or composed into arrays and string-keyed maps. Constructors run
//! unconditionally for every matched element and typically use [`coerce`]
//! and the slot entry points for their own fields, which is what makes the
//! protocol recurse.
//!
//! [`coerce`]: crate::coerce

use std::collections::BTreeMap;
use std::str;

use serde_json::{Map, Value};

use crate::error::ParseError;

/// A type constructible from a string-keyed map of JSON values.
///
/// Constructors must be pure: no I/O, no panics, no shared state. A field
/// the map lacks or fails to convert becomes an absent or kept-prior value
/// through the slot entry points; construction itself never fails.
pub trait FromObject: Sized {
    fn from_object(data: &Map<String, Value>) -> Self;
}

/// Constructs `T` if the value is an object map, else fails.
pub fn coerce_object<T: FromObject>(value: Option<&Value>) -> Option<T> {
    Some(T::from_object(value?.as_object()?))
}

/// Constructs one `T` per element of an array of object maps, in source
/// order. A single non-object element fails the whole sequence.
pub fn coerce_object_seq<T: FromObject>(value: Option<&Value>) -> Option<Vec<T>> {
    value?
        .as_array()?
        .iter()
        .map(|element| Some(T::from_object(element.as_object()?)))
        .collect()
}

/// Constructs one `T` per entry of a map of object maps. A single
/// non-object value fails the whole map.
pub fn coerce_object_map<T: FromObject>(value: Option<&Value>) -> Option<BTreeMap<String, T>> {
    value?
        .as_object()?
        .iter()
        .map(|(key, element)| Some((key.clone(), T::from_object(element.as_object()?))))
        .collect()
}

/// Parses JSON text and delegates to [`coerce_object`].
///
/// Malformed text is an error; well-formed text of the wrong shape is
/// `Ok(None)`.
pub fn object_from_str<T: FromObject>(text: &str) -> Result<Option<T>, ParseError> {
    let root: Value = serde_json::from_str(text)?;
    Ok(coerce_object(Some(&root)))
}

/// Parses JSON text and delegates to [`coerce_object_seq`].
pub fn object_seq_from_str<T: FromObject>(text: &str) -> Result<Option<Vec<T>>, ParseError> {
    let root: Value = serde_json::from_str(text)?;
    Ok(coerce_object_seq(Some(&root)))
}

/// Parses JSON text and delegates to [`coerce_object_map`].
pub fn object_map_from_str<T: FromObject>(
    text: &str,
) -> Result<Option<BTreeMap<String, T>>, ParseError> {
    let root: Value = serde_json::from_str(text)?;
    Ok(coerce_object_map(Some(&root)))
}

/// Decodes bytes as UTF-8, then behaves like [`object_from_str`].
pub fn object_from_slice<T: FromObject>(bytes: &[u8]) -> Result<Option<T>, ParseError> {
    object_from_str(str::from_utf8(bytes)?)
}

/// Decodes bytes as UTF-8, then behaves like [`object_seq_from_str`].
pub fn object_seq_from_slice<T: FromObject>(bytes: &[u8]) -> Result<Option<Vec<T>>, ParseError> {
    object_seq_from_str(str::from_utf8(bytes)?)
}

/// Decodes bytes as UTF-8, then behaves like [`object_map_from_str`].
pub fn object_map_from_slice<T: FromObject>(
    bytes: &[u8],
) -> Result<Option<BTreeMap<String, T>>, ParseError> {
    object_map_from_str(str::from_utf8(bytes)?)
}
