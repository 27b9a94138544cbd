//! Error types for the nephele-disagg crate.

use nephele_calendar::CalendarError;
use nephele_interp::InterpError;
use nephele_precip::PrecipError;
use nephele_radiation::RadiationError;

/// Error type for all fallible operations in the nephele-disagg crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DisaggError {
    /// Returned when the daily record is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when one or more daily input checks fail.
    #[error("validation failed ({count} error(s)): {details}")]
    Validation {
        /// Number of individual violations.
        count: usize,
        /// All violation messages joined by `"; "`.
        details: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a column has no usable value at all.
    #[error("no finite values in {field}")]
    MissingData {
        /// Name of the empty column.
        field: String,
    },

    /// Returned when array lengths do not match.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Wrapped error from the interpolation crate.
    #[error(transparent)]
    Interp(#[from] InterpError),

    /// Wrapped error from the radiation crate.
    #[error(transparent)]
    Radiation(#[from] RadiationError),

    /// Wrapped error from the precipitation crate.
    #[error(transparent)]
    Precip(#[from] PrecipError),
}
