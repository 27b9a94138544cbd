//! Incoming longwave radiation from temperature, humidity and cloud cover.

use std::fmt;
use std::str::FromStr;

use nephele_interp::{forward_fill, hold_daily};
use nephele_physics::constants::{KELVIN, STEFAN_B};
use tracing::debug;

use crate::error::RadiationError;

/// Clear-sky emissivity parameterization.
///
/// Formulas take vapor pressure `e` in hPa and air temperature `T` in K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmissivityMethod {
    /// Passes the vapor pressure through unchanged.
    Default,
    /// Linear in vapor pressure: `0.74 + 0.0049 e`.
    Tva,
    /// Anderson (1954): `0.68 + 0.036 sqrt(e)`.
    Anderson,
    /// Brutsaert (1975): `1.24 (e / T)^(1/7)`.
    Brutsaert,
    /// Satterlund (1979): `1.08 (1 - exp(-e^(T / 2016)))`.
    Satterlund,
    /// Idso (1981): `0.7 + 5.95e-5 e exp(1500 / T)`.
    Idso,
    /// Prata (1996), from precipitable water `w = 46.5 e / T`.
    #[default]
    Prata,
}

impl EmissivityMethod {
    /// Every variant, in declaration order.
    pub const ALL: [EmissivityMethod; 7] = [
        Self::Default,
        Self::Tva,
        Self::Anderson,
        Self::Brutsaert,
        Self::Satterlund,
        Self::Idso,
        Self::Prata,
    ];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Tva => "TVA",
            Self::Anderson => "ANDERSON",
            Self::Brutsaert => "BRUTSAERT",
            Self::Satterlund => "SATTERLUND",
            Self::Idso => "IDSO",
            Self::Prata => "PRATA",
        }
    }

    /// Clear-sky emissivity for vapor pressure `vp_hpa` [hPa] and air
    /// temperature `t_k` [K].
    pub fn clear_sky(self, vp_hpa: f64, t_k: f64) -> f64 {
        match self {
            Self::Default => vp_hpa,
            Self::Tva => 0.74 + 0.0049 * vp_hpa,
            Self::Anderson => 0.68 + 0.036 * vp_hpa.sqrt(),
            Self::Brutsaert => 1.24 * (vp_hpa / t_k).powf(1.0 / 7.0),
            Self::Satterlund => 1.08 * (1.0 - (-vp_hpa.powf(t_k / 2016.0)).exp()),
            Self::Idso => 0.7 + 5.95e-5 * vp_hpa * (1500.0 / t_k).exp(),
            Self::Prata => {
                let w = 46.5 * vp_hpa / t_k;
                1.0 - (1.0 + w) * (-(1.2 + 3.0 * w).sqrt()).exp()
            }
        }
    }
}

impl fmt::Display for EmissivityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmissivityMethod {
    type Err = RadiationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RadiationError::UnknownEmissivityMethod {
                name: s.to_string(),
            })
    }
}

/// Cloud-cover adjustment applied on top of the clear-sky emissivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CloudMethod {
    /// Quadratic enhancement: `(1 + 0.17 tskc^2) emis`.
    Default,
    /// Deardorff (1978) blend of a black-body cloud deck and clear sky:
    /// `tskc + (1 - tskc) emis`.
    #[default]
    CloudDeardorff,
}

impl CloudMethod {
    /// Every variant, in declaration order.
    pub const ALL: [CloudMethod; 2] = [Self::Default, Self::CloudDeardorff];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::CloudDeardorff => "CLOUD_DEARDORFF",
        }
    }

    /// Adjusts clear-sky emissivity `emis` for cloud fraction `tskc` in `[0, 1]`.
    pub fn adjust(self, emis: f64, tskc: f64) -> f64 {
        match self {
            Self::Default => (1.0 + 0.17 * tskc * tskc) * emis,
            Self::CloudDeardorff => tskc + (1.0 - tskc) * emis,
        }
    }
}

impl fmt::Display for CloudMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloudMethod {
    type Err = RadiationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RadiationError::UnknownCloudMethod {
                name: s.to_string(),
            })
    }
}

/// Sub-daily longwave radiation together with the cloud fraction used.
#[derive(Debug, Clone)]
pub struct LongwaveOutput {
    /// Incoming longwave radiation [W m-2].
    pub longwave: Vec<f64>,
    /// Cloud fraction held over each day and forward-filled.
    pub tskc: Vec<f64>,
}

/// Computes incoming longwave radiation on the sub-daily grid.
///
/// `temp` is air temperature [°C] and `vapor_pressure` is in kPa, both on
/// the sub-daily grid; `daily_tskc` is the daily cloud fraction. Cloud
/// fraction is held over each day's steps and NaN days are forward-filled
/// before use.
///
/// # Errors
///
/// Returns [`RadiationError::LengthMismatch`] if `temp`, `vapor_pressure`
/// and `daily_tskc.len() * steps_per_day` disagree.
#[tracing::instrument(skip_all, fields(n = temp.len(), emissivity = %emissivity, cloud = %cloud))]
pub fn longwave(
    temp: &[f64],
    vapor_pressure: &[f64],
    daily_tskc: &[f64],
    steps_per_day: usize,
    emissivity: EmissivityMethod,
    cloud: CloudMethod,
) -> Result<LongwaveOutput, RadiationError> {
    let n = daily_tskc.len() * steps_per_day;
    for (len, field) in [(temp.len(), "temp"), (vapor_pressure.len(), "vapor_pressure")] {
        if len != n {
            return Err(RadiationError::LengthMismatch {
                expected: n,
                got: len,
                field: field.to_string(),
            });
        }
    }

    let mut tskc = hold_daily(daily_tskc, steps_per_day);
    let filled = forward_fill(&mut tskc);
    if filled > 0 {
        debug!(filled, "forward-filled cloud fraction");
    }

    let longwave = temp
        .iter()
        .zip(vapor_pressure)
        .zip(&tskc)
        .map(|((&t, &vp), &c)| {
            let t_k = t + KELVIN;
            let emis = cloud.adjust(emissivity.clear_sky(vp * 10.0, t_k), c);
            emis * STEFAN_B * t_k.powi(4)
        })
        .collect();

    Ok(LongwaveOutput { longwave, tskc })
}
