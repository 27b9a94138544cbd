//! Interpolation and gap-filling helpers for nephele.
//!
//! - [`Pchip`]: monotone cubic Hermite interpolation (temperature curves)
//! - [`Linear`]: piecewise-linear interpolation with extrapolation
//! - [`forward_fill`] / [`hold_daily`]: step-function hold and gap closing

mod error;
mod fill;
mod knots;
mod linear;
mod pchip;

pub use error::InterpError;
pub use fill::{count_gaps, forward_fill, hold_daily};
pub use linear::Linear;
pub use pchip::Pchip;
