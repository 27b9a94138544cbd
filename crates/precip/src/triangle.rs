//! Triangular unit-hyetograph precipitation disaggregation.

use tracing::debug;

use crate::error::PrecipError;
use crate::kernel::MonthlyKernelTable;

/// Decimal places kept in the output.
const ROUND_SCALE: f64 = 1e5;

/// Distributes each daily total with the kernel of its calendar month.
///
/// Day `d`'s kernel is scaled by its total and added to the output starting
/// `offset` steps before the day, so storms may spill into the neighbouring
/// days. Where the window is clipped by the ends of the record the in-bounds
/// weights are renormalised to carry the whole total; if they hold no weight
/// at all the total is spread evenly over the day's own steps. The result is
/// rounded to five decimals.
///
/// # Errors
///
/// Returns [`PrecipError::LengthMismatch`] if `months` and `daily` differ in
/// length, or [`PrecipError::InvalidMonth`] for a month outside 1..=12.
#[tracing::instrument(skip_all, fields(n_days = daily.len(), step = table.step().minutes()))]
pub fn disaggregate_triangle(
    daily: &[f64],
    months: &[u8],
    table: &MonthlyKernelTable,
) -> Result<Vec<f64>, PrecipError> {
    if months.len() != daily.len() {
        return Err(PrecipError::LengthMismatch {
            expected: daily.len(),
            got: months.len(),
            field: "months".to_string(),
        });
    }

    let spd = table.step().steps_per_day();
    let n = daily.len() * spd;
    let mut out = vec![0.0; n];
    let mut renormalized = 0usize;

    for (d, (&total, &month)) in daily.iter().zip(months).enumerate() {
        let kernel = table.kernel(month)?;
        if total == 0.0 {
            continue;
        }
        let weights = kernel.weights();
        let start = (d * spd) as isize - kernel.offset() as isize;
        let lo = start.max(0);
        let hi = (start + weights.len() as isize).min(n as isize);
        let k_lo = (lo - start) as usize;
        let k_hi = (hi - start) as usize;
        let window = &weights[k_lo..k_hi];
        let target = &mut out[lo as usize..hi as usize];

        if k_lo == 0 && k_hi == weights.len() {
            for (o, &w) in target.iter_mut().zip(window) {
                *o += total * w;
            }
            continue;
        }

        renormalized += 1;
        let in_bounds: f64 = window.iter().sum();
        if in_bounds > 0.0 {
            for (o, &w) in target.iter_mut().zip(window) {
                *o += total * w / in_bounds;
            }
        } else {
            let share = total / spd as f64;
            for o in &mut out[d * spd..(d + 1) * spd] {
                *o += share;
            }
        }
    }

    if renormalized > 0 {
        debug!(renormalized, "renormalised clipped kernels at record edges");
    }

    for v in &mut out {
        *v = (*v * ROUND_SCALE).round() / ROUND_SCALE;
    }
    Ok(out)
}
