//! Piecewise-linear interpolation with linear extrapolation.

use crate::error::InterpError;
use crate::knots;

/// Piecewise-linear interpolant.
///
/// Beyond the knot range the first or last segment is extended. A single
/// knot yields a constant.
#[derive(Debug, Clone)]
pub struct Linear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Linear {
    /// Builds the interpolant.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError`] if no knots are given, lengths differ, any knot
    /// is non-finite, or `x` is not strictly increasing.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpError> {
        knots::validate(x, y, 1)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Evaluates the interpolant at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        if self.x.len() == 1 {
            return self.y[0];
        }
        let k = knots::interval(&self.x, t);
        let slope = (self.y[k + 1] - self.y[k]) / (self.x[k + 1] - self.x[k]);
        self.y[k] + slope * (t - self.x[k])
    }

    /// Evaluates the interpolant at every point of `t`.
    pub fn evaluate_many(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&ti| self.evaluate(ti)).collect()
    }
}
