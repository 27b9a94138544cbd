//! Precomputed intra-day radiation shape table.

use nephele_calendar::Doy;
use nephele_physics::constants::FINE_STEPS_PER_DAY;

use crate::error::RadiationError;

/// Day-of-year indexed table of fractional radiation at
/// [`SW_RAD_DT`](nephele_physics::constants::SW_RAD_DT) resolution.
///
/// Row `doy - 1` holds [`FINE_STEPS_PER_DAY`] non-negative fractions
/// describing how that calendar day's radiation is spread over the day.
/// The table is built once by the caller and shared read-only.
#[derive(Debug, Clone)]
pub struct SolarGeometry {
    fractions: Vec<f64>,
    n_rows: usize,
}

impl SolarGeometry {
    /// Wraps a flat row-major table.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::InvalidGeometry`] if the length is not a
    /// whole number of rows, there are no rows or more than 366, or any
    /// value is negative or non-finite.
    pub fn new(fractions: Vec<f64>) -> Result<Self, RadiationError> {
        if fractions.is_empty() || fractions.len() % FINE_STEPS_PER_DAY != 0 {
            return Err(RadiationError::InvalidGeometry {
                reason: format!(
                    "table length {} is not a positive multiple of {FINE_STEPS_PER_DAY}",
                    fractions.len()
                ),
            });
        }
        let n_rows = fractions.len() / FINE_STEPS_PER_DAY;
        if n_rows > 366 {
            return Err(RadiationError::InvalidGeometry {
                reason: format!("{n_rows} rows exceeds 366 days of year"),
            });
        }
        if let Some(i) = fractions.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(RadiationError::InvalidGeometry {
                reason: format!(
                    "value at row {} step {} must be finite and >= 0, got {}",
                    i / FINE_STEPS_PER_DAY + 1,
                    i % FINE_STEPS_PER_DAY,
                    fractions[i]
                ),
            });
        }
        Ok(Self { fractions, n_rows })
    }

    /// Builds a table from one vector per day of year.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SolarGeometry::new`], plus any row whose length
    /// differs from [`FINE_STEPS_PER_DAY`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RadiationError> {
        let mut flat = Vec::with_capacity(rows.len() * FINE_STEPS_PER_DAY);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != FINE_STEPS_PER_DAY {
                return Err(RadiationError::InvalidGeometry {
                    reason: format!(
                        "row {} has {} values, expected {FINE_STEPS_PER_DAY}",
                        i + 1,
                        row.len()
                    ),
                });
            }
            flat.extend(row);
        }
        Self::new(flat)
    }

    /// Builds a table by evaluating `f(doy, fine_step)` for `n_rows` days.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SolarGeometry::new`].
    pub fn from_fn(
        n_rows: usize,
        mut f: impl FnMut(u16, usize) -> f64,
    ) -> Result<Self, RadiationError> {
        let mut flat = Vec::with_capacity(n_rows * FINE_STEPS_PER_DAY);
        for doy in 1..=n_rows {
            for step in 0..FINE_STEPS_PER_DAY {
                flat.push(f(doy as u16, step));
            }
        }
        Self::new(flat)
    }

    /// Returns the number of day-of-year rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the fine-resolution shape for `doy`.
    ///
    /// # Errors
    ///
    /// Returns [`RadiationError::DoyOutOfRange`] if the table has no row for
    /// `doy` (e.g. day 366 against a 365-row table).
    pub fn row(&self, doy: Doy) -> Result<&[f64], RadiationError> {
        if doy.index() >= self.n_rows {
            return Err(RadiationError::DoyOutOfRange {
                doy: doy.get(),
                n_rows: self.n_rows,
            });
        }
        let start = doy.index() * FINE_STEPS_PER_DAY;
        Ok(&self.fractions[start..start + FINE_STEPS_PER_DAY])
    }
}
