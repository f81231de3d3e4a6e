//! scale — time units, time scales, and their errors.
//!
//! Purpose
//! -------
//! Provide the crate's time-granularity layer: the closed [`TimeUnit`]
//! enumeration with base durations in seconds, the immutable [`TimeScale`]
//! value type pairing a unit with a positive integer multiplier, and the
//! shared [`ScaleError`] surface. This is the module consumers (including
//! the Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Define the unit enumeration and its base-seconds lookup in [`units`],
//!   with sub-second entries stored directly in fractional seconds.
//! - Expose the user-facing value type in [`time_scale`]: validated
//!   construction, accessors, the `one_year` factory, duration arithmetic,
//!   and frequency conversion between scales.
//! - Centralize structured errors in [`errors`] (`ScaleError` and the
//!   `ScaleResult` alias) and reusable checks in [`validation`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every `TimeUnit` variant has a strictly positive, finite base duration;
//!   every validly constructed `TimeScale` has `unit_length >= 1` and hence
//!   a strictly positive total duration.
//! - All values are immutable `Copy` types with structural equality; they
//!   are safe to share across threads without synchronization.
//!
//! Conventions
//! -----------
//! - Durations are expressed in seconds, the base SI unit of time. Calendar
//!   units use the average Gregorian year with no calendar-aware arithmetic.
//! - This module performs no I/O and no logging; error conditions are
//!   surfaced as [`ScaleResult`] values, never as panics.
//!
//! Downstream usage
//! ----------------
//! - Typical flow: pick a [`TimeUnit`], build a [`TimeScale`] via
//!   `TimeScale::new(unit, length)`, then use `total_duration()` for
//!   seconds or `frequency_per(&other)` to convert between granularities.
//! - Python bindings import from this module and rely on the
//!   `ScaleError` → `PyErr` conversion defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover the base-seconds table, construction
//!   round-trips and rejection paths, duration arithmetic, and frequency
//!   ratios; end-to-end scenarios live in `tests/integration_time_scale.rs`.

pub mod errors;
pub mod time_scale;
pub mod units;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. The validation helpers
// remain under their submodule.

pub use self::errors::{ScaleError, ScaleResult};
pub use self::time_scale::TimeScale;
pub use self::units::TimeUnit;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_timescale::scale::prelude::*;
//
// to import the main scale surface in a single line.

pub mod prelude {
    pub use super::{ScaleError, ScaleResult, TimeScale, TimeUnit};
}
