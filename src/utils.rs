#[cfg(feature = "python-bindings")]
use pyo3::{PyResult, exceptions::PyValueError};

#[cfg(feature = "python-bindings")]
use crate::scale::units::TimeUnit;

#[cfg(feature = "python-bindings")]
pub fn extract_time_unit(unit: &str) -> PyResult<TimeUnit> {
    let unit_str = unit.to_lowercase();
    let time_unit = match unit_str.as_str() {
        "nanoseconds" | "nanosecond" | "ns" => TimeUnit::Nanosecond,
        "microseconds" | "microsecond" | "us" => TimeUnit::Microsecond,
        "milliseconds" | "millisecond" | "ms" => TimeUnit::Millisecond,
        "seconds" | "second" | "s" => TimeUnit::Second,
        "minutes" | "minute" | "min" => TimeUnit::Minute,
        "hours" | "hour" | "h" => TimeUnit::Hour,
        "days" | "day" | "d" => TimeUnit::Day,
        "weeks" | "week" | "w" => TimeUnit::Week,
        "months" | "month" => TimeUnit::Month,
        "quarters" | "quarter" => TimeUnit::Quarter,
        "years" | "year" | "y" => TimeUnit::Year,
        "decades" | "decade" => TimeUnit::Decade,
        "centuries" | "century" => TimeUnit::Century,
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid time unit {:?} (expected one of 'nanoseconds' through 'centuries')",
                other
            )));
        }
    };
    Ok(time_unit)
}

#[cfg(feature = "python-bindings")]
pub fn unit_name(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Nanosecond => "nanoseconds",
        TimeUnit::Microsecond => "microseconds",
        TimeUnit::Millisecond => "milliseconds",
        TimeUnit::Second => "seconds",
        TimeUnit::Minute => "minutes",
        TimeUnit::Hour => "hours",
        TimeUnit::Day => "days",
        TimeUnit::Week => "weeks",
        TimeUnit::Month => "months",
        TimeUnit::Quarter => "quarters",
        TimeUnit::Year => "years",
        TimeUnit::Decade => "decades",
        TimeUnit::Century => "centuries",
    }
}
