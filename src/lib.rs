//! rust_timescale — calendar/clock time scales for time-series code.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the time-scale types to Python via the `_rust_timescale`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing `TimeScale` class.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`scale`]) as the public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_timescale` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All domain logic is implemented in the inner [`scale`] module; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible class mirrors the
//!   invariants of its Rust counterpart ([`scale::TimeScale`]): unit lengths
//!   are validated at construction and frequencies are guarded.
//!
//! Conventions
//! -----------
//! - Python callers name units by string (`"weeks"`, `"ms"`, ...); the
//!   lookup lives in [`utils`] and rejects unknown names with `ValueError`.
//! - Errors from core Rust code are propagated as [`scale::ScaleError`]
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`scale`] (or its prelude)
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_timescale` module defined
//!   here.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in [`scale`] and by the
//!   integration tests under `tests/`. Smoke tests for the PyO3 bindings
//!   verify construction, accessors, and error mapping from Python.

pub mod scale;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    scale::TimeScale,
    utils::{extract_time_unit, unit_name},
};

/// Scale — Python-facing wrapper for the immutable time-scale value type.
///
/// Purpose
/// -------
/// Expose [`TimeScale`] to Python callers while preserving the core Rust
/// invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Convert a unit name string and integer length into a validated
///   [`TimeScale`], surfacing `ValueError` on bad input.
/// - Expose `unit` / `unit_length` as Python properties and forward
///   `total_duration` / `frequency_per` to the core implementation.
///
/// Parameters
/// ----------
/// Constructed from Python via `TimeScale(unit, unit_length)`:
/// - `unit`: `str`
///   Unit name, e.g. `"weeks"`, `"months"`, `"ms"` (case-insensitive).
/// - `unit_length`: `int`
///   Positive multiplier applied to the unit.
///
/// Fields
/// ------
/// - `inner`: [`TimeScale`]
///   Rust-side value used by all accessors and methods.
///
/// Invariants
/// ----------
/// - `inner` is always a validly constructed [`TimeScale`]
///   (`unit_length >= 1`).
///
/// Notes
/// -----
/// - This type exists solely for the PyO3 binding surface; native Rust code
///   should use [`TimeScale`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "TimeScale", module = "rust_timescale")]
pub struct Scale {
    /// Underlying Rust TimeScale value.
    inner: TimeScale,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Scale {
    /// An immutable time scale: a named unit and a positive integer length.
    #[new]
    #[pyo3(text_signature = "(unit, unit_length, /)")]
    pub fn new(unit: &str, unit_length: i64) -> PyResult<Scale> {
        let time_unit = extract_time_unit(unit)?;
        let inner = TimeScale::new(time_unit, unit_length)?;
        Ok(Scale { inner })
    }

    /// A time scale representing exactly one year.
    #[staticmethod]
    pub fn one_year() -> Scale {
        Scale { inner: TimeScale::one_year() }
    }

    /// The unit name underlying this time scale.
    #[getter]
    pub fn unit(&self) -> &'static str {
        unit_name(self.inner.time_unit())
    }

    /// The number of units spanned by this time scale.
    #[getter]
    pub fn unit_length(&self) -> i64 {
        self.inner.unit_length()
    }

    /// The total amount of time in this scale, in seconds.
    pub fn total_duration(&self) -> f64 {
        self.inner.total_duration()
    }

    /// How many times this time scale occurs in `other`.
    pub fn frequency_per(&self, other: &Scale) -> PyResult<f64> {
        Ok(self.inner.frequency_per(&other.inner)?)
    }

    fn __eq__(&self, other: &Scale) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = std::hash::DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_timescale<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<Scale>()?;
    Ok(())
}
