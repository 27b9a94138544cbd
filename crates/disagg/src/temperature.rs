//! Sub-daily temperature from daily extremes.

use nephele_calendar::MINUTES_PER_DAY;
use nephele_interp::Pchip;

use crate::bounds::TemperatureBounds;
use crate::error::DisaggError;
use crate::extrema::ExtremaTimes;

/// Fits the monotone cubic temperature curve through the daily extremes.
///
/// Knots alternate `(t_min_time, t_min)` and `(t_max_time, t_max)` for each
/// day on an absolute minute axis starting at the first day's midnight. Two
/// extra knots one day before the first pair and two one day after the last
/// pair anchor the ends, taking their values from `bounds` or else repeating
/// the nearest real pair.
///
/// # Errors
///
/// Returns [`DisaggError::LengthMismatch`] if the inputs disagree in length,
/// or [`DisaggError::Interp`] if the knots are unusable (e.g. non-finite
/// boundary values).
pub fn build_temperature_curve(
    t_min: &[f64],
    t_max: &[f64],
    extrema: &ExtremaTimes,
    bounds: &TemperatureBounds,
) -> Result<Pchip, DisaggError> {
    let n_days = t_min.len();
    for (len, field) in [(t_max.len(), "t_max"), (extrema.len(), "extrema")] {
        if len != n_days {
            return Err(DisaggError::LengthMismatch {
                expected: n_days,
                got: len,
                field: field.to_string(),
            });
        }
    }
    if n_days == 0 {
        return Err(DisaggError::EmptyData);
    }

    let day = f64::from(MINUTES_PER_DAY);
    let mut times = Vec::with_capacity(2 * n_days + 4);
    let mut values = Vec::with_capacity(2 * n_days + 4);
    for d in 0..n_days {
        let base = d as f64 * day;
        times.push(base + extrema.t_min_time()[d]);
        values.push(t_min[d]);
        times.push(base + extrema.t_max_time()[d]);
        values.push(t_max[d]);
    }

    let (head_min, head_max) = bounds
        .begin()
        .map_or((values[0], values[1]), |b| (b.t_min, b.t_max));
    let (tail_min, tail_max) = bounds
        .end()
        .map_or((values[values.len() - 2], values[values.len() - 1]), |b| {
            (b.t_min, b.t_max)
        });

    let last = times.len() - 1;
    let head_times = [times[0] - day, times[1] - day];
    let tail_times = [times[last - 1] + day, times[last] + day];

    let x: Vec<f64> = head_times
        .into_iter()
        .chain(times)
        .chain(tail_times)
        .collect();
    let y: Vec<f64> = [head_min, head_max]
        .into_iter()
        .chain(values)
        .chain([tail_min, tail_max])
        .collect();

    Ok(Pchip::new(&x, &y)?)
}

/// Evaluates the temperature curve at `minutes`, elapsed from the first
/// day's midnight (see [`nephele_calendar::SubDailyGrid::minutes`]).
///
/// # Errors
///
/// Same conditions as [`build_temperature_curve`].
pub fn interpolate_temperature(
    t_min: &[f64],
    t_max: &[f64],
    extrema: &ExtremaTimes,
    bounds: &TemperatureBounds,
    minutes: &[f64],
) -> Result<Vec<f64>, DisaggError> {
    let curve = build_temperature_curve(t_min, t_max, extrema, bounds)?;
    Ok(curve.evaluate_many(minutes))
}
