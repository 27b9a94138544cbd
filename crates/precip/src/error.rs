//! Error types for the nephele-precip crate.

/// Error type for all fallible operations in the nephele-precip crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrecipError {
    /// Returned when a precipitation method name is not recognised.
    #[error("unknown precipitation method: {name:?}")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a storm climatology entry is unusable.
    #[error("invalid storm climatology for month {month}: {reason}")]
    InvalidClimatology {
        /// Calendar month (1..=12).
        month: u8,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a triangular pulse cannot be represented on the kernel
    /// window.
    #[error("invalid triangle kernel (duration {duration}, peak {peak_time}): {reason}")]
    InvalidKernel {
        /// Storm duration [min].
        duration: f64,
        /// Peak time [min from day start].
        peak_time: f64,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a month index is outside 1..=12.
    #[error("invalid month {month}, expected 1..=12")]
    InvalidMonth {
        /// The rejected month.
        month: u8,
    },

    /// Returned when the chosen method needs an input that was not supplied.
    #[error("missing input for {method} precipitation: {what}")]
    MissingInput {
        /// Method that required the input.
        method: String,
        /// Name of the missing input.
        what: String,
    },

    /// Returned when input arrays have inconsistent lengths.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched field.
        field: String,
    },
}
