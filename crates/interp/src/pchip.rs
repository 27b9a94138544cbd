//! Piecewise cubic Hermite interpolating polynomial (PCHIP).
//!
//! Shape-preserving, C¹-continuous interpolation after Fritsch & Carlson
//! (1980). Interior derivatives are weighted harmonic means of the adjacent
//! secant slopes (zero at local extrema); end derivatives use the one-sided
//! three-point formula with the usual monotonicity limits.

use crate::error::InterpError;
use crate::knots;

/// Monotone cubic interpolant through a set of knots.
#[derive(Debug, Clone)]
pub struct Pchip {
    x: Vec<f64>,
    y: Vec<f64>,
    d: Vec<f64>,
}

impl Pchip {
    /// Fits the interpolant.
    ///
    /// # Errors
    ///
    /// Returns [`InterpError`] if fewer than two knots are given, lengths
    /// differ, any knot is non-finite, or `x` is not strictly increasing.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpError> {
        knots::validate(x, y, 2)?;
        let d = derivatives(x, y);
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            d,
        })
    }

    /// Returns the knot abscissae.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Returns the knot ordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the fitted first derivatives at the knots.
    pub fn derivatives(&self) -> &[f64] {
        &self.d
    }

    /// Evaluates the interpolant at `t`.
    ///
    /// Outside the knot range the first or last cubic piece is extended.
    pub fn evaluate(&self, t: f64) -> f64 {
        let k = knots::interval(&self.x, t);
        let h = self.x[k + 1] - self.x[k];
        let s = (t - self.x[k]) / h;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * self.y[k] + h10 * h * self.d[k] + h01 * self.y[k + 1] + h11 * h * self.d[k + 1]
    }

    /// Evaluates the interpolant at every point of `t`.
    pub fn evaluate_many(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&ti| self.evaluate(ti)).collect()
    }
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let m: Vec<f64> = y
        .windows(2)
        .zip(&h)
        .map(|(w, &hk)| (w[1] - w[0]) / hk)
        .collect();

    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (m0, m1) = (m[k - 1], m[k]);
        if sign(m0) * sign(m1) <= 0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        d[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
    }

    d[0] = edge_derivative(h[0], h[1], m[0], m[1]);
    d[n - 1] = edge_derivative(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// One-sided three-point end derivative, limited to keep the end piece
/// shape-preserving.
fn edge_derivative(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if sign(d) != sign(m0) {
        0.0
    } else if sign(m0) != sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}
