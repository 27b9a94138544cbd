//! Daily date sequence generation and contiguity checks.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Generates a contiguous sequence of daily dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates.
/// Month, year and leap-day boundaries are handled by chrono.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the sequence runs past the
/// last date chrono can represent.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use nephele_calendar::daily_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2000, 2, 28).unwrap();
/// let dates = daily_sequence(start, 3).unwrap();
/// assert_eq!(dates[1], NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
/// ```
pub fn daily_sequence(start: NaiveDate, n_days: usize) -> Result<Vec<NaiveDate>, CalendarError> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return Ok(dates);
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current
            .succ_opt()
            .ok_or(CalendarError::OutOfRange { start, n_days })?;
        dates.push(current);
    }
    Ok(dates)
}

/// Checks that every date follows its predecessor by exactly one day.
///
/// # Errors
///
/// Returns [`CalendarError::NonContiguous`] at the first gap, repeat or
/// reversal.
pub fn check_contiguous(dates: &[NaiveDate]) -> Result<(), CalendarError> {
    for (i, pair) in dates.windows(2).enumerate() {
        if pair[0].succ_opt() != Some(pair[1]) {
            return Err(CalendarError::NonContiguous {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
