//! Scale validation helpers — reusable checks for unit lengths.
//!
//! Purpose
//! -------
//! Centralize the small validation routines used by time-scale constructors,
//! so the value types can fail fast with structured errors instead of
//! carrying semantically meaningless (zero or negative) durations.
//!
//! Key behaviors
//! -------------
//! - Validate integer unit lengths for strict positivity.
//!
//! Conventions
//! -----------
//! - Validation functions return [`ScaleResult`] and never panic on invalid
//!   *inputs*; panics are reserved for programming errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects scalar
//!   values.
//!
//! Downstream usage
//! ----------------
//! - Call these helpers from constructors ([`TimeScale::new`]) to enforce
//!   documented invariants at the boundaries of the API.
//!
//! [`TimeScale::new`]: crate::scale::TimeScale::new
use crate::scale::errors::{ScaleError, ScaleResult};

/// Validate an integer unit length.
///
/// Parameters
/// ----------
/// - `unit_length`: `i64`
///   Candidate multiplier for a time unit. Must be strictly positive.
///
/// Returns
/// -------
/// `ScaleResult<i64>`
///   - `Ok(unit_length)` if `unit_length >= 1`.
///   - `Err(ScaleError::InvalidUnitLength)` with the offending value
///     otherwise.
///
/// Errors
/// ------
/// - `ScaleError::InvalidUnitLength`
///   - Returned if `unit_length` is zero or negative.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_timescale::scale::validation::validate_unit_length;
/// use rust_timescale::scale::ScaleError;
///
/// assert!(validate_unit_length(3).is_ok());
/// assert!(matches!(
///     validate_unit_length(0),
///     Err(ScaleError::InvalidUnitLength { .. })
/// ));
/// ```
pub fn validate_unit_length(unit_length: i64) -> ScaleResult<i64> {
    if unit_length < 1 {
        return Err(ScaleError::InvalidUnitLength { value: unit_length });
    }
    Ok(unit_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of strictly positive unit lengths, including the boundary
    //   value 1.
    // - Rejection of zero and negative unit lengths with the offending value
    //   carried in the error.
    //
    // They intentionally DO NOT cover:
    // - How `TimeScale::new` uses this helper (tested in `time_scale`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that strictly positive lengths pass through unchanged.
    //
    // Given
    // -----
    // - Lengths 1 (boundary) and 500.
    //
    // Expect
    // ------
    // - Both validate successfully and return the input value.
    fn validate_unit_length_accepts_positive() {
        assert_eq!(validate_unit_length(1), Ok(1));
        assert_eq!(validate_unit_length(500), Ok(500));
    }

    #[test]
    // Purpose
    // -------
    // Ensure zero and negative lengths are rejected with the offending value.
    //
    // Given
    // -----
    // - Lengths 0 and -7.
    //
    // Expect
    // ------
    // - Both fail with `InvalidUnitLength` carrying the input value.
    fn validate_unit_length_rejects_non_positive() {
        assert_eq!(validate_unit_length(0), Err(ScaleError::InvalidUnitLength { value: 0 }));
        assert_eq!(validate_unit_length(-7), Err(ScaleError::InvalidUnitLength { value: -7 }));
    }
}
