//! Uniform precipitation disaggregation.

use nephele_calendar::TimeStep;

/// Spreads each daily total evenly over the day's steps.
///
/// Each step receives `total * ts / 1440`. Values are written from the first
/// step through the first step of the final day; the remaining steps of the
/// final day are left NaN for the caller's forward-fill to close.
pub fn disaggregate_uniform(daily: &[f64], step: TimeStep) -> Vec<f64> {
    let spd = step.steps_per_day();
    let mut out = vec![f64::NAN; daily.len() * spd];
    if daily.is_empty() {
        return out;
    }
    let share = step.day_fraction();
    let last = (daily.len() - 1) * spd;
    for (i, v) in out.iter_mut().enumerate().take(last + 1) {
        *v = daily[i / spd] * share;
    }
    out
}
