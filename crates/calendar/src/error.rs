//! Error types for the nephele-calendar crate.

/// Error type for all fallible operations in the nephele-calendar crate.
///
/// Covers day-of-year validation, time-step validation, and contiguity
/// checks on daily date sequences.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a time step is zero or does not divide a day evenly.
    #[error("invalid time step: {minutes} minutes (must be > 0 and divide 1440)")]
    InvalidTimeStep {
        /// The rejected step length in minutes.
        minutes: u32,
    },

    /// Returned when consecutive dates are not exactly one day apart.
    #[error("dates are not contiguous at index {index}: {previous} followed by {current}")]
    NonContiguous {
        /// Index of the offending date.
        index: usize,
        /// The date preceding the gap.
        previous: chrono::NaiveDate,
        /// The date following the gap.
        current: chrono::NaiveDate,
    },

    /// Returned when a date range runs past the supported calendar.
    #[error("date out of range: {start} + {n_days} days")]
    OutOfRange {
        /// First date of the range.
        start: chrono::NaiveDate,
        /// Requested number of days.
        n_days: usize,
    },
}
