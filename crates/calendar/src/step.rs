//! Validated sub-daily time step.

use crate::error::CalendarError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Length of one output step in minutes.
///
/// Always positive and an exact divisor of [`MINUTES_PER_DAY`], so every day
/// holds a whole number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeStep(u32);

impl TimeStep {
    /// Creates a new time step.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimeStep`] if `minutes` is zero or does
    /// not divide 1440.
    pub fn new(minutes: u32) -> Result<Self, CalendarError> {
        if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
            return Err(CalendarError::InvalidTimeStep { minutes });
        }
        Ok(Self(minutes))
    }

    /// Returns the step length in minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Returns the step length in minutes as `f64`.
    pub fn minutes_f64(self) -> f64 {
        self.0 as f64
    }

    /// Returns the step length in seconds.
    pub fn seconds(self) -> u32 {
        self.0 * 60
    }

    /// Returns the number of steps in one day.
    pub fn steps_per_day(self) -> usize {
        (MINUTES_PER_DAY / self.0) as usize
    }

    /// Returns the fraction of a day covered by one step.
    pub fn day_fraction(self) -> f64 {
        self.0 as f64 / MINUTES_PER_DAY as f64
    }
}

impl Default for TimeStep {
    /// Hourly steps.
    fn default() -> Self {
        Self(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_steps_valid() {
        for m in [1, 5, 10, 15, 30, 60, 120, 180, 360, 720, 1440] {
            let ts = TimeStep::new(m).unwrap();
            assert_eq!(ts.steps_per_day() * m as usize, 1440);
        }
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(
            TimeStep::new(0),
            Err(CalendarError::InvalidTimeStep { minutes: 0 })
        );
    }

    #[test]
    fn non_divisor_rejected() {
        for m in [7, 11, 25, 1000, 2880] {
            assert!(TimeStep::new(m).is_err(), "{m} should be rejected");
        }
    }

    #[test]
    fn derived_quantities() {
        let ts = TimeStep::new(15).unwrap();
        assert_eq!(ts.minutes(), 15);
        assert_eq!(ts.seconds(), 900);
        assert_eq!(ts.steps_per_day(), 96);
        assert!((ts.day_fraction() - 15.0 / 1440.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_is_hourly() {
        assert_eq!(TimeStep::default().minutes(), 60);
    }
}
