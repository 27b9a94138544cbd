//! Step-function hold and forward-fill gap closing.

/// Repeats each daily value `steps_per_day` times.
///
/// The result holds each day's value constant over that day's sub-daily
/// steps; NaN days stay NaN (see [`forward_fill`]).
pub fn hold_daily(daily: &[f64], steps_per_day: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(daily.len() * steps_per_day);
    for &v in daily {
        out.extend(std::iter::repeat_n(v, steps_per_day));
    }
    out
}

/// Replaces every NaN with the most recent preceding non-NaN value.
///
/// Leading NaNs (before any defined value) are left untouched. Returns the
/// number of values that were filled.
pub fn forward_fill(values: &mut [f64]) -> usize {
    let mut last: Option<f64> = None;
    let mut filled = 0;
    for v in values.iter_mut() {
        if v.is_nan() {
            if let Some(prev) = last {
                *v = prev;
                filled += 1;
            }
        } else {
            last = Some(*v);
        }
    }
    filled
}

/// Returns the number of NaN values in `values`.
pub fn count_gaps(values: &[f64]) -> usize {
    values.iter().filter(|v| v.is_nan()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_repeats_each_day() {
        let out = hold_daily(&[1.0, 2.0], 3);
        assert_eq!(out, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn hold_empty() {
        assert!(hold_daily(&[], 24).is_empty());
    }

    #[test]
    fn fills_interior_and_trailing_gaps() {
        let mut v = vec![1.0, f64::NAN, f64::NAN, 4.0, f64::NAN];
        let n = forward_fill(&mut v);
        assert_eq!(n, 3);
        assert_eq!(v, vec![1.0, 1.0, 1.0, 4.0, 4.0]);
    }

    #[test]
    fn leading_gap_kept() {
        let mut v = vec![f64::NAN, 2.0, f64::NAN];
        let n = forward_fill(&mut v);
        assert_eq!(n, 1);
        assert!(v[0].is_nan());
        assert_eq!(v[1..], [2.0, 2.0]);
        assert_eq!(count_gaps(&v), 1);
    }

    #[test]
    fn idempotent() {
        let mut v = vec![f64::NAN, 1.0, f64::NAN, 3.0, f64::NAN];
        forward_fill(&mut v);
        let first = v.clone();
        assert_eq!(forward_fill(&mut v), 0);
        assert_eq!(count_gaps(&first), count_gaps(&v));
        assert_eq!(first[1..], v[1..]);
    }
}
