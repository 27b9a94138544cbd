//! Sub-daily vapor pressure and relative humidity.

use nephele_calendar::MINUTES_PER_DAY;
use nephele_interp::Linear;
use nephele_physics::constants::{MAX_PERCENT, MBAR_PER_BAR};
use nephele_physics::saturation_vapor_pressure_series;

use crate::error::DisaggError;
use crate::extrema::ExtremaTimes;

/// Interpolates daily vapor pressure onto the sub-daily grid.
///
/// Daily values [Pa] are converted to kPa and placed at each day's time of
/// minimum temperature; days with a missing value are skipped. The
/// piecewise-linear curve is evaluated at `minutes` (elapsed from the first
/// day's midnight), extrapolated past the first and last knots, and clamped
/// pointwise to `[0, svp(temp)]`. The lower bound only binds where the
/// extrapolation runs below zero. Output is in kPa.
///
/// # Errors
///
/// Returns [`DisaggError::LengthMismatch`] if the inputs disagree, or
/// [`DisaggError::MissingData`] if no day has a vapor pressure.
pub fn interpolate_vapor_pressure(
    daily_vp: &[f64],
    extrema: &ExtremaTimes,
    temp: &[f64],
    minutes: &[f64],
) -> Result<Vec<f64>, DisaggError> {
    let n_days = daily_vp.len();
    if extrema.len() != n_days {
        return Err(DisaggError::LengthMismatch {
            expected: n_days,
            got: extrema.len(),
            field: "extrema".to_string(),
        });
    }
    if temp.len() != minutes.len() {
        return Err(DisaggError::LengthMismatch {
            expected: minutes.len(),
            got: temp.len(),
            field: "temp".to_string(),
        });
    }

    let day = f64::from(MINUTES_PER_DAY);
    let (x, y): (Vec<f64>, Vec<f64>) = daily_vp
        .iter()
        .zip(extrema.t_min_time())
        .enumerate()
        .filter(|(_, (vp, _))| vp.is_finite())
        .map(|(d, (&vp, &t))| (d as f64 * day + t, vp / MBAR_PER_BAR))
        .unzip();
    if x.is_empty() {
        return Err(DisaggError::MissingData {
            field: "vapor_pressure".to_string(),
        });
    }
    let curve = Linear::new(&x, &y)?;

    let sat = saturation_vapor_pressure_series(temp);
    Ok(curve
        .evaluate_many(minutes)
        .into_iter()
        .zip(sat)
        .map(|(vp, svp)| vp.max(0.0).min(svp / MBAR_PER_BAR))
        .collect())
}

/// Relative humidity [%] from vapor pressure [kPa] and temperature [°C],
/// clamped to `[0, 100]`.
pub fn relative_humidity(vapor_pressure: &[f64], temp: &[f64]) -> Vec<f64> {
    vapor_pressure
        .iter()
        .zip(saturation_vapor_pressure_series(temp))
        .map(|(&vp, svp)| (MAX_PERCENT * MBAR_PER_BAR * vp / svp).clamp(0.0, MAX_PERCENT))
        .collect()
}
