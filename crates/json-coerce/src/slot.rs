//! Target slot assignment.
//!
//! The outcome of a coercion lands in a caller-owned slot under one of two
//! rules, and the asymmetry between them is observable state:
//!
//! - an optional slot is always overwritten, so a failed conversion clears
//!   any prior value;
//! - a required slot is overwritten only on success, so a failed conversion
//!   leaves the prior value untouched.

/// Writes the outcome into an optional slot unconditionally.
///
/// Returns whether the outcome was a success. On failure the slot is
/// cleared, not retained.
pub fn assign<T>(slot: &mut Option<T>, outcome: Option<T>) -> bool {
    let converted = outcome.is_some();
    *slot = outcome;
    converted
}

/// Writes the outcome into a required slot only on success.
///
/// Returns whether the slot was written. On failure the prior value stays
/// in place; no default is substituted.
pub fn assign_or_keep<T>(slot: &mut T, outcome: Option<T>) -> bool {
    match outcome {
        Some(converted) => {
            *slot = converted;
            true
        }
        None => false,
    }
}
