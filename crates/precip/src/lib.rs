//! Precipitation disaggregation for nephele.
//!
//! ```text
//! PrecipMethod ──► PrecipPlan::new ──► Uniform(step)
//!                       │
//!                       └─ StormClimatology ─► MonthlyKernelTable ─► Triangle
//! ```
//!
//! [`PrecipPlan`] resolves the method and builds any kernel table once, before
//! the per-day loop; [`PrecipPlan::apply`] then runs it over a daily series.

mod climatology;
mod error;
mod kernel;
mod method;
mod triangle;
mod uniform;

use nephele_calendar::TimeStep;
use tracing::debug;

pub use climatology::StormClimatology;
pub use error::PrecipError;
pub use kernel::{KernelShape, MonthlyKernelTable, TriangleKernel};
pub use method::PrecipMethod;
pub use triangle::disaggregate_triangle;
pub use uniform::disaggregate_uniform;

/// A resolved precipitation method, ready to apply.
#[derive(Debug, Clone)]
pub enum PrecipPlan {
    /// Even share per step.
    Uniform(TimeStep),
    /// Monthly triangular kernels.
    Triangle(MonthlyKernelTable),
}

impl PrecipPlan {
    /// Resolves `method` for `step`, building the kernel table for
    /// [`PrecipMethod::Triangle`].
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::MissingInput`] if Triangle is requested without
    /// a climatology, or any error from [`MonthlyKernelTable::new`].
    pub fn new(
        method: PrecipMethod,
        climatology: Option<&StormClimatology>,
        step: TimeStep,
    ) -> Result<Self, PrecipError> {
        match method {
            PrecipMethod::Uniform => Ok(Self::Uniform(step)),
            PrecipMethod::Triangle => {
                let climatology = climatology.ok_or_else(|| PrecipError::MissingInput {
                    method: method.to_string(),
                    what: "storm climatology".to_string(),
                })?;
                Ok(Self::Triangle(MonthlyKernelTable::new(climatology, step)?))
            }
        }
    }

    /// The method this plan runs.
    pub fn method(&self) -> PrecipMethod {
        match self {
            Self::Uniform(_) => PrecipMethod::Uniform,
            Self::Triangle(_) => PrecipMethod::Triangle,
        }
    }

    /// Disaggregates `daily` totals; `months` (1..=12 per day) is required for
    /// the triangle method and ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::MissingInput`] if the triangle method has no
    /// month indices, or any error from [`disaggregate_triangle`].
    pub fn apply(&self, daily: &[f64], months: Option<&[u8]>) -> Result<Vec<f64>, PrecipError> {
        debug!(method = %self.method(), n_days = daily.len(), "disaggregating precipitation");
        match self {
            Self::Uniform(step) => Ok(disaggregate_uniform(daily, *step)),
            Self::Triangle(table) => {
                let months = months.ok_or_else(|| PrecipError::MissingInput {
                    method: self.method().to_string(),
                    what: "month of year".to_string(),
                })?;
                disaggregate_triangle(daily, months, table)
            }
        }
    }
}
