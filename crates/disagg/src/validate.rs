//! Accumulated validation of daily input columns.
//!
//! [`ValidationCollector`] gathers every violation found in a daily record
//! and reports them together as a single [`DisaggError::Validation`].

use crate::error::DisaggError;

/// Accumulates validation errors and converts them into a single
/// [`DisaggError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Append every error from `other`.
    pub(crate) fn merge(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(DisaggError::Validation { count, details })` otherwise.
    pub(crate) fn finish(self) -> Result<(), DisaggError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DisaggError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that every value of a required column is finite, and at least
/// `min` when a lower bound is given.
pub(crate) fn validate_finite(name: &str, values: &[f64], min: Option<f64>) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            c.push(format!("{name} at day {i} is not finite: {v}"));
        } else if let Some(lo) = min
            && v < lo
        {
            c.push(format!("{name} at day {i} must be >= {lo}, got {v}"));
        }
    }
    c
}

/// Check that `t_min[i] <= t_max[i]` for every index.
///
/// Non-finite pairs are skipped; [`validate_finite`] reports them.
pub(crate) fn validate_temp_ordering(t_min: &[f64], t_max: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, (&lo, &hi)) in t_min.iter().zip(t_max).enumerate() {
        if lo.is_finite() && hi.is_finite() && lo > hi {
            c.push(format!("t_min ({lo}) > t_max ({hi}) at day {i}"));
        }
    }
    c
}

/// Check the present values of a gap-tolerant column against `[lo, hi]`.
///
/// NaN marks a gap and is skipped; infinities are reported.
pub(crate) fn validate_present_range(
    name: &str,
    values: &[f64],
    lo: f64,
    hi: Option<f64>,
) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if v < lo || hi.is_some_and(|hi| v > hi) || v.is_infinite() {
            match hi {
                Some(hi) => c.push(format!("{name} at day {i} must be in [{lo}, {hi}], got {v}")),
                None => c.push(format!("{name} at day {i} must be finite and >= {lo}, got {v}")),
            }
        }
    }
    c
}

/// Check that a gap-tolerant column has a defined first value, so a
/// forward fill can close every later gap.
pub(crate) fn validate_leading_value(name: &str, values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if let Some(&first) = values.first()
        && first.is_nan()
    {
        c.push(format!("{name} on the first day must not be missing"));
    }
    c
}
