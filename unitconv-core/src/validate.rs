//! Sign checks for magnitude-only quantities.
//!
//! Storage sizes, distances, masses, durations and speeds are magnitudes: they are validated on construction and
//! on every mutation, and a failed mutation leaves the previous value untouched. Temperature is a signed reading
//! and never goes through this module.

use crate::decimal::Decimal;
use crate::error::{ConversionError, ConversionResult};

/// Fails with [`ConversionError::NegativeMagnitude`] if `value` is below zero.
pub fn non_negative(value: &Decimal) -> ConversionResult<()> {
    if value.is_negative() {
        return Err(ConversionError::NegativeMagnitude { value: value.clone() });
    }
    Ok(())
}

/// Returns `current + delta` when the sum is non-negative.
///
/// The error carries the would-be result so callers can report how far below zero it went.
pub fn checked_sum(current: &Decimal, delta: &Decimal) -> ConversionResult<Decimal> {
    let next = current + delta;
    non_negative(&next)?;
    Ok(next)
}
