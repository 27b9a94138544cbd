//! Configuration for the disaggregation pipeline.

use nephele_calendar::TimeStep;
use nephele_precip::{PrecipError, PrecipMethod, StormClimatology};
use nephele_radiation::{CloudMethod, EmissivityMethod, SolarOffset};

use crate::error::DisaggError;

/// Default fraction of daylight after sunrise at which `t_max` occurs.
pub const DEFAULT_TMAX_DAYLENGTH_FRACTION: f64 = 0.67;

/// Master configuration for [`disaggregate`](crate::disaggregate).
#[derive(Debug, Clone)]
pub struct DisaggConfig {
    /// Output step.
    time_step: TimeStep,
    /// Precipitation distribution method.
    prec_method: PrecipMethod,
    /// Monthly storm shapes (required for Triangle).
    storm: Option<StormClimatology>,
    /// Clear-sky emissivity parameterization.
    lw_method: EmissivityMethod,
    /// Cloud correction of emissivity.
    cloud_method: CloudMethod,
    /// Position of `t_max` between sunrise and sunset, in (0, 1).
    tmax_daylength_fraction: f64,
    /// Site and standard-meridian longitudes.
    solar_offset: SolarOffset,
}

impl DisaggConfig {
    /// Creates a configuration with hourly steps, uniform precipitation,
    /// Prata emissivity, Deardorff cloud correction, `t_max` at 0.67 of
    /// daylight, and zero solar offset.
    pub fn new() -> Self {
        Self {
            time_step: TimeStep::default(),
            prec_method: PrecipMethod::default(),
            storm: None,
            lw_method: EmissivityMethod::default(),
            cloud_method: CloudMethod::default(),
            tmax_daylength_fraction: DEFAULT_TMAX_DAYLENGTH_FRACTION,
            solar_offset: SolarOffset::default(),
        }
    }

    /// Sets the output step.
    pub fn with_time_step(mut self, step: TimeStep) -> Self {
        self.time_step = step;
        self
    }

    /// Sets the precipitation method.
    pub fn with_prec_method(mut self, method: PrecipMethod) -> Self {
        self.prec_method = method;
        self
    }

    /// Sets the storm climatology used by the triangle method.
    pub fn with_storm(mut self, storm: StormClimatology) -> Self {
        self.storm = Some(storm);
        self
    }

    /// Sets the emissivity parameterization.
    pub fn with_lw_method(mut self, method: EmissivityMethod) -> Self {
        self.lw_method = method;
        self
    }

    /// Sets the cloud correction.
    pub fn with_cloud_method(mut self, method: CloudMethod) -> Self {
        self.cloud_method = method;
        self
    }

    /// Sets the `t_max` daylight fraction.
    pub fn with_tmax_daylength_fraction(mut self, fraction: f64) -> Self {
        self.tmax_daylength_fraction = fraction;
        self
    }

    /// Sets site (`theta_l`) and standard-meridian (`theta_s`) longitudes.
    pub fn with_solar_offset(mut self, theta_l: f64, theta_s: f64) -> Self {
        self.solar_offset = SolarOffset::new(theta_l, theta_s);
        self
    }

    // --- Accessors ---

    /// Returns the output step.
    pub fn time_step(&self) -> TimeStep {
        self.time_step
    }

    /// Returns the precipitation method.
    pub fn prec_method(&self) -> PrecipMethod {
        self.prec_method
    }

    /// Returns the storm climatology, if set.
    pub fn storm(&self) -> Option<&StormClimatology> {
        self.storm.as_ref()
    }

    /// Returns the emissivity parameterization.
    pub fn lw_method(&self) -> EmissivityMethod {
        self.lw_method
    }

    /// Returns the cloud correction.
    pub fn cloud_method(&self) -> CloudMethod {
        self.cloud_method
    }

    /// Returns the `t_max` daylight fraction.
    pub fn tmax_daylength_fraction(&self) -> f64 {
        self.tmax_daylength_fraction
    }

    /// Returns the solar offset.
    pub fn solar_offset(&self) -> SolarOffset {
        self.solar_offset
    }

    /// Validates the entire configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DisaggError::InvalidConfig`] for a fraction outside (0, 1)
    /// or non-finite longitudes, and [`DisaggError::Precip`] wrapping
    /// [`PrecipError::MissingInput`] when Triangle has no climatology.
    pub fn validate(&self) -> Result<(), DisaggError> {
        let f = self.tmax_daylength_fraction;
        if !f.is_finite() || f <= 0.0 || f >= 1.0 {
            return Err(DisaggError::InvalidConfig {
                reason: format!("tmax_daylength_fraction must be in (0, 1), got {f}"),
            });
        }
        let SolarOffset { theta_l, theta_s } = self.solar_offset;
        if !theta_l.is_finite() || !theta_s.is_finite() {
            return Err(DisaggError::InvalidConfig {
                reason: format!("theta_l ({theta_l}) and theta_s ({theta_s}) must be finite"),
            });
        }
        if self.prec_method == PrecipMethod::Triangle && self.storm.is_none() {
            return Err(PrecipError::MissingInput {
                method: self.prec_method.to_string(),
                what: "storm climatology".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for DisaggConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let c = DisaggConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.time_step().minutes(), 60);
        assert_eq!(c.prec_method(), PrecipMethod::Uniform);
        assert_eq!(c.lw_method(), EmissivityMethod::Prata);
        assert_eq!(c.cloud_method(), CloudMethod::CloudDeardorff);
        assert_eq!(c.tmax_daylength_fraction(), 0.67);
        assert_eq!(c.solar_offset(), SolarOffset::new(0.0, 0.0));
    }

    #[test]
    fn fraction_bounds() {
        for f in [0.0, 1.0, -0.1, f64::NAN] {
            let c = DisaggConfig::new().with_tmax_daylength_fraction(f);
            assert!(
                matches!(c.validate(), Err(DisaggError::InvalidConfig { .. })),
                "fraction {f} should be rejected"
            );
        }
        assert!(
            DisaggConfig::new()
                .with_tmax_daylength_fraction(0.5)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn non_finite_longitude_rejected() {
        let c = DisaggConfig::new().with_solar_offset(f64::INFINITY, 0.0);
        assert!(c.validate().is_err());
    }

    #[test]
    fn triangle_needs_storm() {
        let c = DisaggConfig::new().with_prec_method(PrecipMethod::Triangle);
        assert!(matches!(
            c.validate(),
            Err(DisaggError::Precip(PrecipError::MissingInput { .. }))
        ));
        let c = c.with_storm(StormClimatology::constant(120.0, 720.0).unwrap());
        assert!(c.validate().is_ok());
    }
}
