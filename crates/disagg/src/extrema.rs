//! Daily times of minimum and maximum temperature from the daylight pattern.

use nephele_calendar::{MINUTES_PER_DAY, TimeStep};
use tracing::warn;

use crate::error::DisaggError;

/// Times of `t_min` and `t_max` for every day, in minutes from the day's
/// midnight.
///
/// `t_min_time` lies in `[0, 1440)`. `t_max_time` may reach past 1440 when
/// the day's sunset falls after midnight. On the absolute minute axis the
/// times of successive days are strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaTimes {
    t_min_time: Vec<f64>,
    t_max_time: Vec<f64>,
    n_patched: usize,
}

impl ExtremaTimes {
    /// Returns the time of minimum temperature (sunrise) per day.
    pub fn t_min_time(&self) -> &[f64] {
        &self.t_min_time
    }

    /// Returns the time of maximum temperature per day.
    pub fn t_max_time(&self) -> &[f64] {
        &self.t_max_time
    }

    /// Number of days whose sunrise or sunset could not be detected and
    /// were copied from a neighbouring day (or set to the whole day).
    pub fn n_patched(&self) -> usize {
        self.n_patched
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.t_min_time.len()
    }

    /// Returns `true` if there are no days.
    pub fn is_empty(&self) -> bool {
        self.t_min_time.is_empty()
    }
}

/// Estimates sunrise and sunset from sub-daily shortwave and places the
/// temperature extremes relative to them.
///
/// A step is daylight when its shortwave is positive. A night-to-day
/// transition between steps `j` and `j + 1` is a sunrise at `j * ts`; a
/// day-to-night transition is a sunset at `j * ts`. A day's sunrise is the
/// first one falling in that day; its sunset is the next sunset anywhere in
/// the record, provided it comes within one day of the sunrise. `t_min`
/// falls at sunrise and `t_max` at `sunrise + fraction * (sunset - sunrise)`.
///
/// Days without a sunrise, or whose sunrise has no sunset within a day,
/// copy the nearest earlier detected day, or the nearest later one when
/// none precedes. With no detected day at all, sunrise is taken as midnight
/// and sunset as the following midnight. A copied `t_max` that would reach
/// the next day's `t_min` is pulled back to the same fraction of the gap
/// between them.
///
/// # Errors
///
/// Returns [`DisaggError::LengthMismatch`] if `shortwave` does not cover
/// `n_days` whole days.
pub fn estimate_extrema_times(
    shortwave: &[f64],
    n_days: usize,
    step: TimeStep,
    tmax_daylength_fraction: f64,
) -> Result<ExtremaTimes, DisaggError> {
    let spd = step.steps_per_day();
    if shortwave.len() != n_days * spd {
        return Err(DisaggError::LengthMismatch {
            expected: n_days * spd,
            got: shortwave.len(),
            field: "shortwave".to_string(),
        });
    }
    let ts = step.minutes_f64();
    let day = f64::from(MINUTES_PER_DAY);

    // Step indices on the whole record.
    let mut first_rise: Vec<Option<usize>> = vec![None; n_days];
    let mut sets: Vec<usize> = Vec::new();
    for (j, pair) in shortwave.windows(2).enumerate() {
        match (pair[0] > 0.0, pair[1] > 0.0) {
            (false, true) => {
                first_rise[j / spd].get_or_insert(j);
            }
            (true, false) => sets.push(j),
            _ => {}
        }
    }

    let detected: Vec<Option<(f64, f64)>> = first_rise
        .iter()
        .enumerate()
        .map(|(d, rise)| {
            let rise = (*rise)?;
            let set = *sets.get(sets.partition_point(|&s| s <= rise))?;
            let midnight = d * spd;
            (set - rise <= spd)
                .then(|| ((rise - midnight) as f64 * ts, (set - midnight) as f64 * ts))
        })
        .collect();

    let n_patched = detected.iter().filter(|d| d.is_none()).count();
    let whole_day = (0.0, day);
    let first_valid = detected.iter().flatten().next().copied();
    let mut last_valid = None;
    let mut t_min_time = Vec::with_capacity(n_days);
    let mut t_max_time = Vec::with_capacity(n_days);
    for d in &detected {
        let (rise, set) = match d {
            Some(v) => {
                last_valid = Some(*v);
                *v
            }
            None => last_valid.or(first_valid).unwrap_or(whole_day),
        };
        t_min_time.push(rise);
        t_max_time.push(rise + tmax_daylength_fraction * (set - rise));
    }

    for d in 0..n_days.saturating_sub(1) {
        let limit = day + t_min_time[d + 1];
        if detected[d].is_none() && t_max_time[d] >= limit {
            t_max_time[d] = t_min_time[d] + tmax_daylength_fraction * (limit - t_min_time[d]);
        }
    }

    if n_patched > 0 {
        warn!(
            n_patched,
            n_days,
            any_detected = first_valid.is_some(),
            "sunrise/sunset not detected, extrema times patched"
        );
    }

    Ok(ExtremaTimes {
        t_min_time,
        t_max_time,
        n_patched,
    })
}
