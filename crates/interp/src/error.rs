//! Error types for the nephele-interp crate.

/// Error type for all fallible operations in the nephele-interp crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpError {
    /// Returned when there are not enough knots to build an interpolant.
    #[error("too few points: need at least {needed}, got {got}")]
    TooFewPoints {
        /// Minimum number of knots required.
        needed: usize,
        /// Number of knots provided.
        got: usize,
    },

    /// Returned when the abscissa and ordinate slices differ in length.
    #[error("length mismatch: {x_len} abscissae vs {y_len} ordinates")]
    LengthMismatch {
        /// Number of abscissae.
        x_len: usize,
        /// Number of ordinates.
        y_len: usize,
    },

    /// Returned when abscissae are not strictly increasing.
    #[error("abscissae not strictly increasing at index {index}")]
    NotIncreasing {
        /// Index of the first offending knot.
        index: usize,
    },

    /// Returned when a knot holds NaN or infinity.
    #[error("non-finite knot at index {index}")]
    NonFinite {
        /// Index of the offending knot.
        index: usize,
    },
}
