//! Error types for the nephele-radiation crate.

/// Error type for all fallible operations in the nephele-radiation crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RadiationError {
    /// Returned when an emissivity parameterization name is not recognised.
    #[error("unknown longwave emissivity method: {name:?}")]
    UnknownEmissivityMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a cloud-adjustment method name is not recognised.
    #[error("unknown longwave cloud method: {name:?}")]
    UnknownCloudMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a solar geometry table is malformed.
    #[error("invalid solar geometry: {reason}")]
    InvalidGeometry {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a day of year has no row in the solar geometry table.
    #[error("day of year {doy} not covered by solar geometry with {n_rows} rows")]
    DoyOutOfRange {
        /// The requested day of year.
        doy: u16,
        /// Number of rows in the table.
        n_rows: usize,
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
