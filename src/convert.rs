//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use crate::config::*;

use nephele_calendar::TimeStep;
use nephele_disagg::{DisaggConfig, TemperatureBounds};
use nephele_precip::{PrecipMethod, StormClimatology};
use nephele_radiation::{CloudMethod, EmissivityMethod};

/// Parses a precipitation method name (`uniform`, `triangle`).
pub fn parse_prec_method(s: &str) -> Result<PrecipMethod> {
    s.parse().context("invalid [disagg] prec_type")
}

/// Parses a longwave emissivity method name (`default`, `tva`, `anderson`,
/// `brutsaert`, `satterlund`, `idso`, `prata`).
pub fn parse_lw_method(s: &str) -> Result<EmissivityMethod> {
    s.parse().context("invalid [disagg] lw_type")
}

/// Parses a longwave cloud method name (`default`, `cloud_deardorff`).
pub fn parse_cloud_method(s: &str) -> Result<CloudMethod> {
    s.parse().context("invalid [disagg] lw_cloud")
}

/// Builds a [`StormClimatology`] from the TOML storm table.
pub fn build_storm(storm: &StormToml) -> Result<StormClimatology> {
    StormClimatology::from_slices(&storm.duration, &storm.peak_time)
        .context("invalid [storm] section")
}

/// Builds and validates a [`DisaggConfig`] from the full TOML configuration.
///
/// Method names are resolved and the triangle method's storm requirement is
/// checked here, so a bad file fails before any data is touched.
pub fn build_disagg_config(cfg: &NepheleConfig) -> Result<DisaggConfig> {
    let d = &cfg.disagg;
    let step = TimeStep::new(d.time_step).context("invalid [disagg] time_step")?;
    let mut out = DisaggConfig::new()
        .with_time_step(step)
        .with_prec_method(parse_prec_method(&d.prec_type)?)
        .with_lw_method(parse_lw_method(&d.lw_type)?)
        .with_cloud_method(parse_cloud_method(&d.lw_cloud)?)
        .with_tmax_daylength_fraction(d.tmax_daylength_fraction)
        .with_solar_offset(d.theta_l, d.theta_s);
    if let Some(ref storm) = cfg.storm {
        out = out.with_storm(build_storm(storm)?);
    }
    out.validate().context("invalid disaggregation configuration")?;
    Ok(out)
}

/// Builds [`TemperatureBounds`] from the TOML bounds section.
pub fn build_bounds(bounds: &BoundsToml) -> TemperatureBounds {
    let mut out = TemperatureBounds::new();
    if let Some([t_min, t_max]) = bounds.t_begin {
        out = out.with_begin(t_min, t_max);
    }
    if let Some([t_min, t_max]) = bounds.t_end {
        out = out.with_end(t_min, t_max);
    }
    out
}
