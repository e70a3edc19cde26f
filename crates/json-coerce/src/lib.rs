//! json-coerce - typed coercion from parsed JSON value trees.
//!
//! Converts [`serde_json::Value`] trees into strongly-typed values and
//! structures, field by field. Three layers build on each other:
//!
//! - [`coerce`] runs a fixed per-type fallback chain on one value
//!   (exact shape, then string to integer, string to URL, or epoch number
//!   to timestamp).
//! - [`coerce_seq`] and [`coerce_map`] apply the scalar chain across arrays
//!   and string-keyed maps, all-or-nothing.
//! - [`FromObject`] lets any type construct itself from a keyed map of
//!   values; [`coerce_object`] and friends compose such types into arrays
//!   and maps, recursively.
//!
//! Failures are uniform: every conversion returns `Option`, with no cause
//! attached, so failures propagate through nesting without special cases.
//! The one exception is malformed input text in the [`object_from_str`]
//! family, which surfaces as [`ParseError`] because it signals corrupted
//! input rather than a type mismatch. Target slots are written through
//! [`assign`] (optional slots, cleared on failure) and [`assign_or_keep`]
//! (required slots, kept on failure).

mod collection;
mod date;
mod error;
mod object;
mod scalar;
mod slot;

pub use collection::{coerce_map, coerce_seq};
pub use date::{coerce_date, coerce_date_map, coerce_date_seq};
pub use error::ParseError;
pub use json_coerce_extract::{extract, Extract};
pub use object::{
    coerce_object, coerce_object_map, coerce_object_seq, object_from_slice, object_from_str,
    object_map_from_slice, object_map_from_str, object_seq_from_slice, object_seq_from_str,
    FromObject,
};
pub use scalar::{coerce, Coerce};
pub use slot::{assign, assign_or_keep};
