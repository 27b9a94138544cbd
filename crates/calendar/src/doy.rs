//! Day-of-year newtype for the proleptic Gregorian calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Day-of-year in the Gregorian calendar (1..=366).
///
/// Leap years carry day 366 (December 31), so the same calendar day maps to
/// different day-of-year values in leap and common years after February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=366).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the day-of-year of a calendar date.
    ///
    /// Infallible because chrono guarantees an ordinal in 1..=366.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.ordinal() as u16)
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=365).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// Returns the month (1..=12) of a calendar date.
pub fn month_of(date: NaiveDate) -> u8 {
    date.month() as u8
}
