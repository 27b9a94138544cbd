//! Sub-daily wind speed.

use nephele_interp::{forward_fill, hold_daily};

/// Holds each day's wind speed over its steps; missing days take the
/// previous day's value.
pub fn replicate_wind(daily: &[f64], steps_per_day: usize) -> Vec<f64> {
    let mut out = hold_daily(daily, steps_per_day);
    forward_fill(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_within_each_day() {
        let out = replicate_wind(&[2.0, 5.5], 24);
        assert_eq!(out.len(), 48);
        assert!(out[..24].iter().all(|&w| w == 2.0));
        assert!(out[24..].iter().all(|&w| w == 5.5));
    }

    #[test]
    fn gap_day_carries_previous() {
        let out = replicate_wind(&[3.0, f64::NAN, 1.0], 4);
        assert_eq!(out[4..8], [3.0; 4]);
        assert_eq!(out[8..], [1.0; 4]);
    }
}
