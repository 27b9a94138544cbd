//! Precipitation disaggregation method selector.

use std::fmt;
use std::str::FromStr;

use crate::error::PrecipError;

/// How daily precipitation totals are spread over sub-daily steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecipMethod {
    /// Equal share in every step of the day.
    #[default]
    Uniform,
    /// Monthly triangular unit hyetograph from a storm climatology.
    Triangle,
}

impl PrecipMethod {
    /// Every variant, in declaration order.
    pub const ALL: [PrecipMethod; 2] = [Self::Uniform, Self::Triangle];

    /// Canonical upper-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "UNIFORM",
            Self::Triangle => "TRIANGLE",
        }
    }
}

impl fmt::Display for PrecipMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrecipMethod {
    type Err = PrecipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PrecipError::UnknownMethod {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("uniform".parse::<PrecipMethod>().unwrap(), PrecipMethod::Uniform);
        assert_eq!("Triangle".parse::<PrecipMethod>().unwrap(), PrecipMethod::Triangle);
        assert_eq!(
            "gamma".parse::<PrecipMethod>().unwrap_err(),
            PrecipError::UnknownMethod {
                name: "gamma".to_string()
            }
        );
    }

    #[test]
    fn default_is_uniform() {
        assert_eq!(PrecipMethod::default(), PrecipMethod::Uniform);
    }
}
