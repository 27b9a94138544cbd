//! # nephele-physics
//!
//! Shared constants and thermodynamic helpers for the nephele
//! disaggregation crates.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `constants` | Time, unit-conversion and radiation constants |
//! | `svp` | Saturation vapor pressure over water/ice |

pub mod constants;
mod svp;

pub use svp::{saturation_vapor_pressure, saturation_vapor_pressure_series};
