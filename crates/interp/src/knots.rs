//! Knot validation and interval lookup shared by the interpolants.

use crate::error::InterpError;

/// Validates a knot set: equal lengths, at least `needed` points, finite
/// abscissae and ordinates, strictly increasing abscissae.
pub(crate) fn validate(x: &[f64], y: &[f64], needed: usize) -> Result<(), InterpError> {
    if x.len() != y.len() {
        return Err(InterpError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < needed {
        return Err(InterpError::TooFewPoints {
            needed,
            got: x.len(),
        });
    }
    for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        if !xi.is_finite() || !yi.is_finite() {
            return Err(InterpError::NonFinite { index: i });
        }
    }
    for (i, w) in x.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(InterpError::NotIncreasing { index: i + 1 });
        }
    }
    Ok(())
}

/// Returns the index `k` of the interval `[x[k], x[k+1]]` used to evaluate
/// at `t`. Points outside the knot range map to the first or last interval.
///
/// Requires `x.len() >= 2`.
pub(crate) fn interval(x: &[f64], t: f64) -> usize {
    let upper = x.partition_point(|&xi| xi <= t);
    upper.saturating_sub(1).min(x.len() - 2)
}
