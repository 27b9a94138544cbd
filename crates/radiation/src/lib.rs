//! Shortwave and longwave radiation disaggregation for nephele.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`SolarGeometry`] | Day-of-year table of intra-day radiation fractions at 30 s resolution |
//! | [`disaggregate_shortwave`] | Spreads daily shortwave totals over the sub-daily grid |
//! | [`EmissivityMethod`] / [`CloudMethod`] | Closed sets of longwave parameterizations |
//! | [`longwave`] | Incoming longwave radiation from temperature, vapor pressure and cloud |

mod error;
mod geometry;
mod longwave;
mod shortwave;

pub use error::RadiationError;
pub use geometry::SolarGeometry;
pub use longwave::{CloudMethod, EmissivityMethod, LongwaveOutput, longwave};
pub use shortwave::{SolarOffset, disaggregate_shortwave};
