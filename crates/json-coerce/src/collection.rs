//! Collection coercion: arrays and string-keyed maps of scalars.

use std::collections::BTreeMap;

use json_coerce_extract::Extract;
use serde_json::{Map, Value};

use crate::scalar::Coerce;

/// Coerces an array of same-shaped scalars into `Vec<T>`, all-or-nothing.
///
/// Element shape is probed in the fixed order string, bool, int; the first
/// shape matching every element is final, even if conversion to `T` then
/// fails, so an all-string array never converts as ints. A mixed-shape
/// array matches nothing. If any element fails to convert, the whole
/// result fails and converted elements are discarded.
pub fn coerce_seq<T: Coerce>(value: Option<&Value>) -> Option<Vec<T>> {
    let items = value?.as_array()?;
    if !seq_shape_matches(items) {
        return None;
    }
    items.iter().map(T::coerce).collect()
}

/// Coerces a string-keyed map of same-shaped scalars into a map of `T`.
/// Same probe order and all-or-nothing rule as [`coerce_seq`].
pub fn coerce_map<T: Coerce>(value: Option<&Value>) -> Option<BTreeMap<String, T>> {
    let entries = value?.as_object()?;
    if !map_shape_matches(entries) {
        return None;
    }
    entries
        .iter()
        .map(|(key, element)| Some((key.clone(), T::coerce(element)?)))
        .collect()
}

fn seq_shape_matches(items: &[Value]) -> bool {
    all_shape::<String, _>(items.iter())
        || all_shape::<bool, _>(items.iter())
        || all_shape::<i64, _>(items.iter())
}

fn map_shape_matches(entries: &Map<String, Value>) -> bool {
    all_shape::<String, _>(entries.values())
        || all_shape::<bool, _>(entries.values())
        || all_shape::<i64, _>(entries.values())
}

fn all_shape<'a, S, I>(mut elements: I) -> bool
where
    S: Extract,
    I: Iterator<Item = &'a Value>,
{
    elements.all(|element| S::extract(element).is_some())
}
