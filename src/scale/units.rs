//! Time units and their base durations in seconds.
//!
//! - [`TimeUnit`] declares the closed set of calendar/clock granularities
//!   (nanosecond through century).
//! - [`TimeUnit::total_duration`] maps each variant to its nominal duration
//!   in seconds, the common base unit of the crate.
//!
//! Notes
//! -----
//! - Calendar units use the average Gregorian year (31 556 952 s =
//!   365.2425 days); a month is exactly 1/12 of a year and a quarter is
//!   exactly 1/4, so unit ratios such as months-per-year are exact.
//! - Sub-second entries are stored directly in fractional seconds, so no
//!   caller needs to special-case them.

/// Average Gregorian year in seconds (365.2425 days).
const YEAR_SECONDS: f64 = 31_556_952.0;

/// A named, fixed granularity of time with an intrinsic nominal duration.
///
/// This is a closed enumeration: every variant carries a strictly positive
/// base duration in seconds, reported by [`TimeUnit::total_duration`]. The
/// type is `Copy` and compares structurally, so it can be used freely as a
/// map key or shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Nanoseconds (1e-9 s).
    Nanosecond,
    /// Microseconds (1e-6 s).
    Microsecond,
    /// Milliseconds (1e-3 s).
    Millisecond,
    /// Seconds.
    Second,
    /// Minutes (60 s).
    Minute,
    /// Hours (3 600 s).
    Hour,
    /// Days (86 400 s).
    Day,
    /// Weeks (604 800 s).
    Week,
    /// Months (1/12 of an average Gregorian year).
    Month,
    /// Quarters (1/4 of an average Gregorian year).
    Quarter,
    /// Average Gregorian years (31 556 952 s).
    Year,
    /// Decades (10 average Gregorian years).
    Decade,
    /// Centuries (100 average Gregorian years).
    Century,
}

impl TimeUnit {
    /// The nominal duration of one instance of this unit, in seconds.
    ///
    /// Returns
    /// -------
    /// `f64`
    ///   Strictly positive, finite seconds. Sub-second units return their
    ///   exact fractional value (`1e-9`, `1e-6`, `1e-3`).
    pub fn total_duration(&self) -> f64 {
        match self {
            TimeUnit::Nanosecond => 1e-9,
            TimeUnit::Microsecond => 1e-6,
            TimeUnit::Millisecond => 1e-3,
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Week => 604_800.0,
            TimeUnit::Month => YEAR_SECONDS / 12.0,
            TimeUnit::Quarter => YEAR_SECONDS / 4.0,
            TimeUnit::Year => YEAR_SECONDS,
            TimeUnit::Decade => 10.0 * YEAR_SECONDS,
            TimeUnit::Century => 100.0 * YEAR_SECONDS,
        }
    }

    /// How many times this unit occurs in `other`.
    ///
    /// Parameters
    /// ----------
    /// - `other`: `TimeUnit`
    ///   The unit whose span is measured in multiples of `self`.
    ///
    /// Returns
    /// -------
    /// `f64`
    ///   `other.total_duration() / self.total_duration()`. Always finite and
    ///   strictly positive, since every unit has a strictly positive base
    ///   duration.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_timescale::scale::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Month.frequency_per(TimeUnit::Year), 12.0);
    /// ```
    pub fn frequency_per(&self, other: TimeUnit) -> f64 {
        other.total_duration() / self.total_duration()
    }
}
