//! Intra-day shortwave radiation distribution.

use nephele_calendar::{Doy, TimeStep};
use nephele_physics::constants::{DEG_PER_REV, FINE_STEPS_PER_DAY, SEC_PER_DAY, SW_RAD_DT};
use rayon::prelude::*;

use crate::error::RadiationError;
use crate::geometry::SolarGeometry;

/// Solar phase alignment between the site and its time zone.
///
/// `theta_l` is the site longitude and `theta_s` the longitude of the time
/// zone's standard meridian, both in degrees. The shift is the full
/// difference `theta_l - theta_s` scaled by fine steps per degree, not
/// `theta_l - theta_s / (24 / 360)` as older tooling evaluated it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolarOffset {
    /// Site longitude [deg].
    pub theta_l: f64,
    /// Standard meridian longitude [deg].
    pub theta_s: f64,
}

impl SolarOffset {
    /// Creates a new offset.
    pub fn new(theta_l: f64, theta_s: f64) -> Self {
        Self { theta_l, theta_s }
    }

    /// Returns the rotation in fine steps, wrapped into `[0, FINE_STEPS_PER_DAY)`.
    ///
    /// One full revolution (360°) corresponds to one day of fine steps.
    pub fn fine_steps(self) -> usize {
        let n = FINE_STEPS_PER_DAY as i64;
        let raw = ((self.theta_l - self.theta_s) / DEG_PER_REV * n as f64).round() as i64;
        raw.rem_euclid(n) as usize
    }
}

/// Spreads each day's shortwave total over the sub-daily grid.
///
/// For every day, the geometry row of its day of year is rotated by the
/// solar offset (fine index `i` reads row index `i - offset`, circularly),
/// summed in chunks of one output step, and scaled by
/// `sw_total * daylength / SEC_PER_DAY`. Days are processed in parallel.
///
/// # Errors
///
/// Returns [`RadiationError::LengthMismatch`] if the daily inputs differ in
/// length, or [`RadiationError::DoyOutOfRange`] if a day of year has no
/// geometry row.
#[tracing::instrument(skip_all, fields(n_days = sw_total.len(), step = step.minutes()))]
pub fn disaggregate_shortwave(
    sw_total: &[f64],
    daylength: &[f64],
    days_of_year: &[Doy],
    geometry: &SolarGeometry,
    step: TimeStep,
    offset: SolarOffset,
) -> Result<Vec<f64>, RadiationError> {
    let n_days = sw_total.len();
    for (len, field) in [(daylength.len(), "daylength"), (days_of_year.len(), "days_of_year")] {
        if len != n_days {
            return Err(RadiationError::LengthMismatch {
                expected: n_days,
                got: len,
                field: field.to_string(),
            });
        }
    }

    let rows = days_of_year
        .iter()
        .map(|&doy| geometry.row(doy))
        .collect::<Result<Vec<_>, _>>()?;
    let scale: Vec<f64> = sw_total
        .iter()
        .zip(daylength)
        .map(|(&sw, &dayl)| sw * dayl / SEC_PER_DAY)
        .collect();

    let spd = step.steps_per_day();
    let chunk = (f64::from(step.seconds()) / SW_RAD_DT) as usize;
    let shift = offset.fine_steps();

    let mut out = vec![0.0; n_days * spd];
    out.par_chunks_mut(spd)
        .enumerate()
        .for_each(|(day, slots)| {
            let row = rows[day];
            for (j, slot) in slots.iter_mut().enumerate() {
                let weight: f64 = (j * chunk..(j + 1) * chunk)
                    .map(|i| row[(i + FINE_STEPS_PER_DAY - shift) % FINE_STEPS_PER_DAY])
                    .sum();
                *slot = weight * scale[day];
            }
        });
    Ok(out)
}
