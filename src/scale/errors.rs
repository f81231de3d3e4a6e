//! Errors for time-scale construction and frequency conversion.
//!
//! This module defines the scale error type, [`ScaleError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - Unit lengths must be **strictly positive** integers; zero and negative
//!   lengths are rejected at construction rather than propagated as
//!   meaningless durations.
//! - Frequency conversion never divides by a zero duration; a degenerate
//!   denominator is surfaced as [`ScaleError::DegenerateTimeScale`] instead
//!   of a floating-point infinity/NaN.

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for scale operations that may produce
/// [`ScaleError`].
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Unified error type for time-scale operations.
///
/// Covers construction-time validation and degenerate-denominator guards in
/// frequency conversion. Implements `Display`/`Error` and converts to a
/// Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    // ---- Construction validation ----
    /// The unit length is zero or negative (lengths must be >= 1).
    InvalidUnitLength { value: i64 },

    // ---- Frequency conversion ----
    /// The denominator time scale has a zero total duration.
    DegenerateTimeScale,
}

impl std::error::Error for ScaleError {}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::InvalidUnitLength { value } => {
                write!(f, "Unit length must be a positive integer; got: {value}")
            }
            ScaleError::DegenerateTimeScale => {
                write!(f, "Time scale has zero total duration; frequency is undefined.")
            }
        }
    }
}

/// Convert a [`ScaleError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ScaleError> for PyErr {
    fn from(err: ScaleError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` output for each error variant, including the embedded
    //   offending value.
    //
    // They intentionally DO NOT cover:
    // - The code paths that *produce* these errors (tested in `time_scale`
    //   and `validation`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidUnitLength` reports the offending value in its
    // message.
    //
    // Given
    // -----
    // - An `InvalidUnitLength` carrying `value = -3`.
    //
    // Expect
    // ------
    // - The rendered message mentions the value `-3`.
    fn invalid_unit_length_displays_value() {
        let err = ScaleError::InvalidUnitLength { value: -3 };

        let msg = err.to_string();

        assert!(msg.contains("-3"), "message should mention the value: {msg}");
        assert!(msg.contains("positive integer"));
    }

    #[test]
    // Purpose
    // -------
    // Verify the `DegenerateTimeScale` message names the undefined-frequency
    // condition.
    //
    // Expect
    // ------
    // - The rendered message mentions the zero total duration.
    fn degenerate_time_scale_displays_condition() {
        let err = ScaleError::DegenerateTimeScale;

        assert!(err.to_string().contains("zero total duration"));
    }
}
