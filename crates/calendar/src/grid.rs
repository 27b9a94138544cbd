//! Regular sub-daily time grid spanning a run of whole days.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::step::TimeStep;

/// Regular grid from the first day's midnight to the last day's end minus
/// one step, at `step` spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubDailyGrid {
    start: NaiveDate,
    n_days: usize,
    step: TimeStep,
}

impl SubDailyGrid {
    /// Creates a grid covering `n_days` days starting at `start`.
    pub fn new(start: NaiveDate, n_days: usize, step: TimeStep) -> Self {
        Self {
            start,
            n_days,
            step,
        }
    }

    /// Returns the first day of the grid.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the number of days covered.
    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// Returns the grid spacing.
    pub fn step(&self) -> TimeStep {
        self.step
    }

    /// Returns the number of steps in each day.
    pub fn steps_per_day(&self) -> usize {
        self.step.steps_per_day()
    }

    /// Returns the total number of grid points.
    pub fn len(&self) -> usize {
        self.n_days * self.steps_per_day()
    }

    /// Returns `true` if the grid has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elapsed minutes from the grid start for every point.
    pub fn minutes(&self) -> Vec<f64> {
        let ts = self.step.minutes_f64();
        (0..self.len()).map(|i| ts * i as f64).collect()
    }

    /// Returns the wall-clock timestamp of every point.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        let origin = self.start.and_time(chrono::NaiveTime::MIN);
        let step = TimeDelta::minutes(i64::from(self.step.minutes()));
        let mut out = Vec::with_capacity(self.len());
        let mut t = origin;
        for _ in 0..self.len() {
            out.push(t);
            t += step;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn length_is_days_times_steps() {
        let grid = SubDailyGrid::new(date(2000, 1, 1), 3, TimeStep::new(60).unwrap());
        assert_eq!(grid.len(), 72);
        assert_eq!(grid.steps_per_day(), 24);
        assert!(!grid.is_empty());
    }

    #[test]
    fn empty_grid() {
        let grid = SubDailyGrid::new(date(2000, 1, 1), 0, TimeStep::default());
        assert!(grid.is_empty());
        assert!(grid.timestamps().is_empty());
    }

    #[test]
    fn timestamps_span_to_last_step() {
        let grid = SubDailyGrid::new(date(2000, 2, 28), 2, TimeStep::new(180).unwrap());
        let ts = grid.timestamps();
        assert_eq!(ts.len(), 16);
        assert_eq!(ts[0], date(2000, 2, 28).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(ts[8], date(2000, 2, 29).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(*ts.last().unwrap(), date(2000, 2, 29).and_hms_opt(21, 0, 0).unwrap());
    }

    #[test]
    fn minutes_are_multiples_of_step() {
        let grid = SubDailyGrid::new(date(2000, 1, 1), 1, TimeStep::new(30).unwrap());
        let m = grid.minutes();
        assert_eq!(m.len(), 48);
        assert_eq!(m[0], 0.0);
        assert_eq!(m[47], 1410.0);
    }
}
