//! # nephele
//!
//! Disaggregation of daily meteorological records into sub-daily forcing
//! series.
//!
//! This facade loads a TOML configuration, sets up logging, and re-exports
//! the workspace crates:
//!
//! | Crate | Re-exported as |
//! |-------|----------------|
//! | `nephele-physics` | [`physics`] |
//! | `nephele-calendar` | [`calendar`] |
//! | `nephele-interp` | [`interp`] |
//! | `nephele-radiation` | [`radiation`] |
//! | `nephele-precip` | [`precip`] |
//! | `nephele-disagg` | [`disagg`], plus the pipeline types at the root |
//!
//! ```no_run
//! use nephele::{SolarGeometry, disaggregate, load_config};
//! # fn run(daily: &nephele::DailySeries, geometry: &SolarGeometry) -> anyhow::Result<()> {
//! nephele::logging::init(1)?;
//! let settings = load_config("nephele.toml")?;
//! let out = disaggregate(daily, &settings.disagg, geometry, &settings.bounds)?;
//! println!("{} sub-daily steps", out.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub use nephele_calendar as calendar;
pub use nephele_disagg as disagg;
pub use nephele_interp as interp;
pub use nephele_physics as physics;
pub use nephele_precip as precip;
pub use nephele_radiation as radiation;

pub use nephele_disagg::{
    DailyRecord, DailySeries, DisaggConfig, DisaggError, SolarGeometry, SubDailyRecord,
    SubDailySeries, TemperatureBounds, disaggregate,
};

use config::NepheleConfig;

/// Everything a run needs from the configuration file.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Validated pipeline configuration.
    pub disagg: DisaggConfig,
    /// Temperatures of the days around the record.
    pub bounds: TemperatureBounds,
}

/// Parses and converts a TOML configuration document.
pub fn parse_config(text: &str) -> Result<Settings> {
    let cfg: NepheleConfig = toml::from_str(text).context("failed to parse TOML config")?;
    let disagg = convert::build_disagg_config(&cfg)?;
    let bounds = convert::build_bounds(&cfg.bounds);
    Ok(Settings { disagg, bounds })
}

/// Reads, parses and converts the configuration file at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let settings =
        parse_config(&text).with_context(|| format!("in config file: {}", path.display()))?;
    info!(
        path = %path.display(),
        time_step = settings.disagg.time_step().minutes(),
        prec_method = %settings.disagg.prec_method(),
        "configuration loaded"
    );
    Ok(settings)
}
