//! Time, unit-conversion and radiation constants.

// -- Time --

/// Seconds per day.
pub const SEC_PER_DAY: f64 = 86_400.0;

// -- Solar geometry --

/// Resolution of the fine-grained radiation shape table [s].
pub const SW_RAD_DT: f64 = 30.0;

/// Number of fine radiation steps in one day.
pub const FINE_STEPS_PER_DAY: usize = (SEC_PER_DAY / SW_RAD_DT) as usize;

/// Degrees per full revolution.
pub const DEG_PER_REV: f64 = 360.0;

// -- Thermodynamics / radiation --

/// Offset between degrees Celsius and Kelvin.
pub const KELVIN: f64 = 273.15;

/// Stefan-Boltzmann constant [W m-2 K-4].
pub const STEFAN_B: f64 = 5.669e-8;

/// Pa per kPa; also mbar per bar.
pub const MBAR_PER_BAR: f64 = 1000.0;

/// Upper bound for relative humidity [%].
pub const MAX_PERCENT: f64 = 100.0;
