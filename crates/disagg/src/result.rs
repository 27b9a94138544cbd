//! Sub-daily output series.

use chrono::NaiveDateTime;
use nephele_interp::{count_gaps, forward_fill};

/// One sub-daily step of [`SubDailySeries`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubDailyRecord {
    /// Start of the step.
    pub time: NaiveDateTime,
    /// Shortwave radiation [W m-2].
    pub shortwave: f64,
    /// Air temperature [°C].
    pub temp: f64,
    /// Vapor pressure [kPa].
    pub vapor_pressure: f64,
    /// Relative humidity [%].
    pub rel_humid: f64,
    /// Incoming longwave radiation [W m-2].
    pub longwave: f64,
    /// Cloud fraction.
    pub tskc: f64,
    /// Precipitation [mm/step].
    pub prec: f64,
    /// Wind speed [m s-1], when the input carried wind.
    pub wind: Option<f64>,
}

/// Column-wise sub-daily output of [`disaggregate`](crate::disaggregate).
#[derive(Debug, Clone)]
pub struct SubDailySeries {
    timestamps: Vec<NaiveDateTime>,
    shortwave: Vec<f64>,
    temp: Vec<f64>,
    vapor_pressure: Vec<f64>,
    rel_humid: Vec<f64>,
    longwave: Vec<f64>,
    tskc: Vec<f64>,
    prec: Vec<f64>,
    wind: Option<Vec<f64>>,
}

impl SubDailySeries {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        timestamps: Vec<NaiveDateTime>,
        shortwave: Vec<f64>,
        temp: Vec<f64>,
        vapor_pressure: Vec<f64>,
        rel_humid: Vec<f64>,
        longwave: Vec<f64>,
        tskc: Vec<f64>,
        prec: Vec<f64>,
        wind: Option<Vec<f64>>,
    ) -> Self {
        Self {
            timestamps,
            shortwave,
            temp,
            vapor_pressure,
            rel_humid,
            longwave,
            tskc,
            prec,
            wind,
        }
    }

    /// Forward-fills every column and returns the number of values filled.
    pub fn fill_forward(&mut self) -> usize {
        let mut filled = 0;
        for column in [
            &mut self.shortwave,
            &mut self.temp,
            &mut self.vapor_pressure,
            &mut self.rel_humid,
            &mut self.longwave,
            &mut self.tskc,
            &mut self.prec,
        ] {
            filled += forward_fill(column);
        }
        if let Some(w) = &mut self.wind {
            filled += forward_fill(w);
        }
        filled
    }

    /// Returns the number of NaN values left across all columns.
    pub fn gap_count(&self) -> usize {
        [
            &self.shortwave,
            &self.temp,
            &self.vapor_pressure,
            &self.rel_humid,
            &self.longwave,
            &self.tskc,
            &self.prec,
        ]
        .iter()
        .map(|c| count_gaps(c))
        .sum::<usize>()
            + self.wind.as_deref().map_or(0, count_gaps)
    }

    /// Returns the start time of every step.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Returns shortwave radiation [W m-2].
    pub fn shortwave(&self) -> &[f64] {
        &self.shortwave
    }

    /// Returns air temperature [°C].
    pub fn temp(&self) -> &[f64] {
        &self.temp
    }

    /// Returns vapor pressure [kPa].
    pub fn vapor_pressure(&self) -> &[f64] {
        &self.vapor_pressure
    }

    /// Returns relative humidity [%].
    pub fn rel_humid(&self) -> &[f64] {
        &self.rel_humid
    }

    /// Returns incoming longwave radiation [W m-2].
    pub fn longwave(&self) -> &[f64] {
        &self.longwave
    }

    /// Returns cloud fraction.
    pub fn tskc(&self) -> &[f64] {
        &self.tskc
    }

    /// Returns precipitation [mm/step].
    pub fn prec(&self) -> &[f64] {
        &self.prec
    }

    /// Returns wind speed [m s-1], if the input carried wind.
    pub fn wind(&self) -> Option<&[f64]> {
        self.wind.as_deref()
    }

    /// Returns step `i` as a record, if in range.
    pub fn record(&self, i: usize) -> Option<SubDailyRecord> {
        Some(SubDailyRecord {
            time: *self.timestamps.get(i)?,
            shortwave: self.shortwave[i],
            temp: self.temp[i],
            vapor_pressure: self.vapor_pressure[i],
            rel_humid: self.rel_humid[i],
            longwave: self.longwave[i],
            tskc: self.tskc[i],
            prec: self.prec[i],
            wind: self.wind.as_ref().map(|w| w[i]),
        })
    }

    /// Iterates over all steps as records.
    pub fn records(&self) -> impl Iterator<Item = SubDailyRecord> + '_ {
        (0..self.len()).filter_map(|i| self.record(i))
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if there are no steps.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
