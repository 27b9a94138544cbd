//! Daily-to-sub-daily meteorological disaggregation.
//!
//! This crate turns a [`DailySeries`] of daily summaries into a regular
//! [`SubDailySeries`] at the configured step.
//!
//! # Pipeline Order
//!
//! 1. **Shortwave**: daily totals spread with the solar geometry table
//! 2. **Extrema times**: sunrise/sunset from the shortwave pattern
//! 3. **Temperature**: monotone cubic through daily extremes
//! 4. **Vapor pressure**: linear between min-temperature times, saturation-capped
//! 5. **Relative humidity**: from vapor pressure and temperature
//! 6. **Longwave**: emissivity parameterization with cloud correction
//! 7. **Precipitation** and **wind**: independent of the chain above
//! 8. **Forward fill**: closes any remaining gaps

mod bounds;
mod config;
mod error;
mod extrema;
mod humidity;
mod record;
mod result;
mod temperature;
mod validate;
mod wind;

pub use bounds::{BoundaryExtension, TemperatureBounds};
pub use config::{DEFAULT_TMAX_DAYLENGTH_FRACTION, DisaggConfig};
pub use error::DisaggError;
pub use extrema::{ExtremaTimes, estimate_extrema_times};
pub use humidity::{interpolate_vapor_pressure, relative_humidity};
pub use record::{DailyRecord, DailySeries};
pub use result::{SubDailyRecord, SubDailySeries};
pub use temperature::{build_temperature_curve, interpolate_temperature};
pub use wind::replicate_wind;

// Re-export the types needed to configure a run.
pub use nephele_calendar::TimeStep;
pub use nephele_precip::{PrecipMethod, StormClimatology};
pub use nephele_radiation::{CloudMethod, EmissivityMethod, SolarGeometry};

use nephele_calendar::SubDailyGrid;
use nephele_precip::PrecipPlan;
use nephele_radiation::{disaggregate_shortwave, longwave};
use tracing::debug;

/// Runs the full disaggregation pipeline.
///
/// # Arguments
///
/// * `daily`: Validated daily input.
/// * `config`: Pipeline configuration.
/// * `geometry`: Intra-day radiation shape per day of year.
/// * `bounds`: Optional temperatures for the days around the record.
///
/// # Errors
///
/// Returns [`DisaggError`] on invalid configuration (checked before any
/// computation) or when a component rejects its inputs, e.g. a day of year
/// missing from `geometry`.
#[tracing::instrument(skip(daily, config, geometry, bounds), fields(n_days = daily.len()))]
pub fn disaggregate(
    daily: &DailySeries,
    config: &DisaggConfig,
    geometry: &SolarGeometry,
    bounds: &TemperatureBounds,
) -> Result<SubDailySeries, DisaggError> {
    config.validate()?;
    let step = config.time_step();
    let plan = PrecipPlan::new(config.prec_method(), config.storm(), step)?;
    let grid = SubDailyGrid::new(daily.start(), daily.len(), step);
    let spd = grid.steps_per_day();

    // --- Shortwave ---
    let shortwave = disaggregate_shortwave(
        daily.shortwave(),
        daily.daylength(),
        daily.days_of_year(),
        geometry,
        step,
        config.solar_offset(),
    )?;
    debug!(module = "shortwave", "applied");

    // --- Extrema times ---
    let extrema = estimate_extrema_times(
        &shortwave,
        daily.len(),
        step,
        config.tmax_daylength_fraction(),
    )?;
    debug!(module = "extrema", n_patched = extrema.n_patched(), "applied");

    // --- Temperature ---
    let minutes = grid.minutes();
    let temp = interpolate_temperature(daily.t_min(), daily.t_max(), &extrema, bounds, &minutes)?;
    debug!(module = "temperature", "applied");

    // --- Humidity ---
    let vapor_pressure = interpolate_vapor_pressure(daily.vapor_pressure(), &extrema, &temp, &minutes)?;
    let rel_humid = relative_humidity(&vapor_pressure, &temp);
    debug!(module = "humidity", "applied");

    // --- Longwave ---
    let lw = longwave(
        &temp,
        &vapor_pressure,
        daily.tskc(),
        spd,
        config.lw_method(),
        config.cloud_method(),
    )?;
    debug!(module = "longwave", "applied");

    // --- Precipitation ---
    let prec = plan.apply(daily.prec(), Some(daily.months()))?;
    debug!(module = "precipitation", method = %plan.method(), "applied");

    // --- Wind ---
    let wind = daily.wind().map(|w| replicate_wind(w, spd));

    let mut out = SubDailySeries::new(
        grid.timestamps(),
        shortwave,
        temp,
        vapor_pressure,
        rel_humid,
        lw.longwave,
        lw.tskc,
        prec,
        wind,
    );
    let filled = out.fill_forward();
    debug!(filled, n_steps = out.len(), "forward fill");
    Ok(out)
}
