//! Monthly storm climatology.

use crate::error::PrecipError;

/// Typical storm duration and peak time for each calendar month, in minutes.
///
/// Index 0 is January. Peak times are measured from the start of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct StormClimatology {
    duration: [f64; 12],
    peak_time: [f64; 12],
}

impl StormClimatology {
    /// Creates a climatology from twelve durations and twelve peak times.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::InvalidClimatology`] if any value is
    /// non-finite or any duration is negative.
    pub fn new(duration: [f64; 12], peak_time: [f64; 12]) -> Result<Self, PrecipError> {
        for (i, (&d, &p)) in duration.iter().zip(&peak_time).enumerate() {
            let month = i as u8 + 1;
            if !d.is_finite() || d < 0.0 {
                return Err(PrecipError::InvalidClimatology {
                    month,
                    reason: format!("duration must be finite and >= 0, got {d}"),
                });
            }
            if !p.is_finite() {
                return Err(PrecipError::InvalidClimatology {
                    month,
                    reason: format!("peak time must be finite, got {p}"),
                });
            }
        }
        Ok(Self {
            duration,
            peak_time,
        })
    }

    /// Builds a climatology from slices, as read from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::LengthMismatch`] unless both slices hold twelve
    /// values, then validates as [`StormClimatology::new`].
    pub fn from_slices(duration: &[f64], peak_time: &[f64]) -> Result<Self, PrecipError> {
        let duration: [f64; 12] =
            duration
                .try_into()
                .map_err(|_| PrecipError::LengthMismatch {
                    expected: 12,
                    got: duration.len(),
                    field: "duration".to_string(),
                })?;
        let peak_time: [f64; 12] =
            peak_time
                .try_into()
                .map_err(|_| PrecipError::LengthMismatch {
                    expected: 12,
                    got: peak_time.len(),
                    field: "peak_time".to_string(),
                })?;
        Self::new(duration, peak_time)
    }

    /// Same storm for every month.
    ///
    /// # Errors
    ///
    /// Same conditions as [`StormClimatology::new`].
    pub fn constant(duration: f64, peak_time: f64) -> Result<Self, PrecipError> {
        Self::new([duration; 12], [peak_time; 12])
    }

    /// Storm durations [min], January first.
    pub fn durations(&self) -> &[f64; 12] {
        &self.duration
    }

    /// Peak times [min], January first.
    pub fn peak_times(&self) -> &[f64; 12] {
        &self.peak_time
    }
}
