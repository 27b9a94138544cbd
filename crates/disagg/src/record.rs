//! Daily input records and the validated daily series.

use chrono::NaiveDate;
use nephele_calendar::{Doy, check_contiguous, daily_sequence, month_of};

use crate::error::DisaggError;
use crate::validate::{
    ValidationCollector, validate_finite, validate_leading_value, validate_present_range,
    validate_temp_ordering,
};

/// One day of meteorological summaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    /// Minimum air temperature [°C].
    pub t_min: f64,
    /// Maximum air temperature [°C].
    pub t_max: f64,
    /// Precipitation total [mm/day].
    pub prec: f64,
    /// Mean shortwave radiation over daylight [W m-2].
    pub shortwave: f64,
    /// Daylength [s].
    pub daylength: f64,
    /// Cloud fraction (0..1); NaN marks a gap.
    pub tskc: f64,
    /// Vapor pressure [Pa]; NaN marks a gap.
    pub vapor_pressure: f64,
    /// Wind speed [m s-1], if observed.
    pub wind: Option<f64>,
}

/// A contiguous, validated run of [`DailyRecord`]s stored column-wise.
///
/// Carries the calendar metadata each component needs: the date, day of
/// year and month of every day.
#[derive(Debug, Clone)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    days_of_year: Vec<Doy>,
    months: Vec<u8>,
    t_min: Vec<f64>,
    t_max: Vec<f64>,
    prec: Vec<f64>,
    shortwave: Vec<f64>,
    daylength: Vec<f64>,
    tskc: Vec<f64>,
    vapor_pressure: Vec<f64>,
    wind: Option<Vec<f64>>,
}

impl DailySeries {
    /// Builds a series of consecutive days starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DisaggError::EmptyData`] for no records,
    /// [`DisaggError::Calendar`] if the dates overflow, or
    /// [`DisaggError::Validation`] listing every failed check:
    /// - `t_min`, `t_max`, `prec`, `shortwave`, `daylength` must be finite
    /// - `prec`, `shortwave`, `daylength` must be non-negative
    /// - `t_min <= t_max`
    /// - present `tskc` values in `[0, 1]`; present `vapor_pressure` and
    ///   `wind` values non-negative
    /// - `tskc` and `wind` must be defined on the first day
    pub fn new(start: NaiveDate, records: &[DailyRecord]) -> Result<Self, DisaggError> {
        if records.is_empty() {
            return Err(DisaggError::EmptyData);
        }
        let dates = daily_sequence(start, records.len())?;
        Self::build(dates, records)
    }

    /// Builds a series from explicitly dated records.
    ///
    /// # Errors
    ///
    /// As [`DailySeries::new`], plus [`DisaggError::Calendar`] if the dates
    /// are not consecutive or `dates` and `records` differ in length.
    pub fn from_dated(dates: Vec<NaiveDate>, records: &[DailyRecord]) -> Result<Self, DisaggError> {
        if records.is_empty() {
            return Err(DisaggError::EmptyData);
        }
        if dates.len() != records.len() {
            return Err(DisaggError::LengthMismatch {
                expected: records.len(),
                got: dates.len(),
                field: "dates".to_string(),
            });
        }
        check_contiguous(&dates)?;
        Self::build(dates, records)
    }

    fn build(dates: Vec<NaiveDate>, records: &[DailyRecord]) -> Result<Self, DisaggError> {
        let column = |f: fn(&DailyRecord) -> f64| records.iter().map(f).collect::<Vec<f64>>();
        let t_min = column(|r| r.t_min);
        let t_max = column(|r| r.t_max);
        let prec = column(|r| r.prec);
        let shortwave = column(|r| r.shortwave);
        let daylength = column(|r| r.daylength);
        let tskc = column(|r| r.tskc);
        let vapor_pressure = column(|r| r.vapor_pressure);
        let wind = records
            .iter()
            .any(|r| r.wind.is_some())
            .then(|| column(|r| r.wind.unwrap_or(f64::NAN)));

        let mut c = ValidationCollector::new();
        c.merge(validate_finite("t_min", &t_min, None));
        c.merge(validate_finite("t_max", &t_max, None));
        c.merge(validate_finite("prec", &prec, Some(0.0)));
        c.merge(validate_finite("shortwave", &shortwave, Some(0.0)));
        c.merge(validate_finite("daylength", &daylength, Some(0.0)));
        c.merge(validate_temp_ordering(&t_min, &t_max));
        c.merge(validate_present_range("tskc", &tskc, 0.0, Some(1.0)));
        c.merge(validate_present_range("vapor_pressure", &vapor_pressure, 0.0, None));
        c.merge(validate_leading_value("tskc", &tskc));
        if let Some(w) = &wind {
            c.merge(validate_present_range("wind", w, 0.0, None));
            c.merge(validate_leading_value("wind", w));
        }
        c.finish()?;

        let days_of_year = dates.iter().map(|&d| Doy::from_date(d)).collect();
        let months = dates.iter().map(|&d| month_of(d)).collect();

        Ok(Self {
            dates,
            days_of_year,
            months,
            t_min,
            t_max,
            prec,
            shortwave,
            daylength,
            tskc,
            vapor_pressure,
            wind,
        })
    }

    /// Returns the first date.
    pub fn start(&self) -> NaiveDate {
        self.dates[0]
    }

    /// Returns the day of year of every day.
    pub fn days_of_year(&self) -> &[Doy] {
        &self.days_of_year
    }

    /// Returns the calendar month (1..=12) of every day.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Returns daily minimum temperature [°C].
    pub fn t_min(&self) -> &[f64] {
        &self.t_min
    }

    /// Returns daily maximum temperature [°C].
    pub fn t_max(&self) -> &[f64] {
        &self.t_max
    }

    /// Returns daily precipitation [mm/day].
    pub fn prec(&self) -> &[f64] {
        &self.prec
    }

    /// Returns daily shortwave radiation [W m-2].
    pub fn shortwave(&self) -> &[f64] {
        &self.shortwave
    }

    /// Returns daylength [s].
    pub fn daylength(&self) -> &[f64] {
        &self.daylength
    }

    /// Returns cloud fraction, NaN where missing.
    pub fn tskc(&self) -> &[f64] {
        &self.tskc
    }

    /// Returns vapor pressure [Pa], NaN where missing.
    pub fn vapor_pressure(&self) -> &[f64] {
        &self.vapor_pressure
    }

    /// Returns wind speed [m s-1] if any day carries it, NaN where missing.
    pub fn wind(&self) -> Option<&[f64]> {
        self.wind.as_deref()
    }

    /// Returns the record for day `i`, if in range.
    pub fn record(&self, i: usize) -> Option<DailyRecord> {
        (i < self.len()).then(|| DailyRecord {
            t_min: self.t_min[i],
            t_max: self.t_max[i],
            prec: self.prec[i],
            shortwave: self.shortwave[i],
            daylength: self.daylength[i],
            tskc: self.tskc[i],
            vapor_pressure: self.vapor_pressure[i],
            wind: self.wind.as_ref().map(|w| w[i]),
        })
    }

    /// Returns the number of days.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if there are no days. Never true for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
