//! Triangular unit-hyetograph kernels.
//!
//! A kernel spans two days of bins centred on the day it belongs to: `offset`
//! bins before the day, the day's own `steps_per_day` bins, and `offset` bins
//! after it, with `offset = ceil(steps_per_day / 2)`. Bin `k` covers
//! `[(k - offset) * ts, (k - offset + 1) * ts)` minutes from the day's start.

use nephele_calendar::TimeStep;

use crate::climatology::StormClimatology;
use crate::error::PrecipError;

/// Which bins the triangular pulse touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelShape {
    /// Start, peak and end share one bin (includes zero duration).
    Delta,
    /// The peak lies in the start bin; the falling edge spans later bins.
    PeakInStartBin,
    /// The peak lies in the end bin; the rising edge spans earlier bins.
    PeakInEndBin,
    /// Start, peak and end bins are all distinct.
    Spread,
}

/// Fractional precipitation per bin for one storm shape. Sums to one.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleKernel {
    weights: Vec<f64>,
    offset: usize,
    shape: KernelShape,
}

impl TriangleKernel {
    /// Builds the kernel for a symmetric triangular storm of `duration`
    /// minutes peaking at `peak_time` minutes from the day's start.
    ///
    /// Each bin receives the exact area of the triangle over its interval,
    /// so the weights sum to one up to rounding.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::InvalidKernel`] if either value is non-finite,
    /// the duration is negative, or the pulse extends beyond the two-day
    /// window.
    pub fn new(duration: f64, peak_time: f64, step: TimeStep) -> Result<Self, PrecipError> {
        let invalid = |reason: String| PrecipError::InvalidKernel {
            duration,
            peak_time,
            reason,
        };
        if !duration.is_finite() || duration < 0.0 {
            return Err(invalid("duration must be finite and >= 0".to_string()));
        }
        if !peak_time.is_finite() {
            return Err(invalid("peak time must be finite".to_string()));
        }

        let spd = step.steps_per_day();
        let ts = step.minutes_f64();
        let offset = spd.div_ceil(2);
        let len = spd + 2 * offset;
        let window_start = -(offset as f64) * ts;
        let window_end = (spd + offset) as f64 * ts;

        let half = duration / 2.0;
        let t_start = peak_time - half;
        let t_end = peak_time + half;
        if t_start < window_start || t_end > window_end {
            return Err(invalid(format!(
                "pulse [{t_start}, {t_end}] outside window [{window_start}, {window_end}]"
            )));
        }

        let bin_of = |t: f64| ((t / ts).floor() as i64 + offset as i64) as usize;
        let mut weights = vec![0.0; len];

        if duration == 0.0 {
            let i = bin_of(peak_time);
            if i >= len {
                return Err(invalid(format!(
                    "peak {peak_time} on the closing edge of the window"
                )));
            }
            weights[i] = 1.0;
            return Ok(Self {
                weights,
                offset,
                shape: KernelShape::Delta,
            });
        }

        let i_start = bin_of(t_start);
        // bin holding t_end approached from the left
        let i_end = ((t_end / ts).ceil() as i64 - 1 + offset as i64) as usize;
        let i_pk = bin_of(peak_time);

        let shape = if i_start == i_end {
            KernelShape::Delta
        } else if i_start == i_pk {
            KernelShape::PeakInStartBin
        } else if i_pk == i_end {
            KernelShape::PeakInEndBin
        } else {
            KernelShape::Spread
        };

        if shape == KernelShape::Delta {
            weights[i_start] = 1.0;
        } else {
            // Cumulative area under the unit triangle up to time t.
            let denom = duration * duration / 2.0;
            let cumulative = |t: f64| {
                if t <= t_start {
                    0.0
                } else if t >= t_end {
                    1.0
                } else if t <= peak_time {
                    (t - t_start).powi(2) / denom
                } else {
                    1.0 - (t_end - t).powi(2) / denom
                }
            };
            for (k, w) in weights.iter_mut().enumerate().take(i_end + 1).skip(i_start) {
                let lo = (k as f64 - offset as f64) * ts;
                *w = cumulative(lo + ts) - cumulative(lo);
            }
        }

        Ok(Self {
            weights,
            offset,
            shape,
        })
    }

    /// Bin weights, `steps_per_day + 2 * offset` long.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of bins before the day's first step.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; a kernel has at least one bin.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Which bins the pulse touches.
    pub fn shape(&self) -> KernelShape {
        self.shape
    }
}

/// One [`TriangleKernel`] per calendar month, built once per run.
#[derive(Debug, Clone)]
pub struct MonthlyKernelTable {
    kernels: Vec<TriangleKernel>,
    step: TimeStep,
}

impl MonthlyKernelTable {
    /// Builds all twelve kernels from a storm climatology.
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::InvalidClimatology`] naming the first month
    /// whose storm does not fit the kernel window.
    pub fn new(climatology: &StormClimatology, step: TimeStep) -> Result<Self, PrecipError> {
        let kernels = climatology
            .durations()
            .iter()
            .zip(climatology.peak_times())
            .enumerate()
            .map(|(i, (&d, &p))| {
                TriangleKernel::new(d, p, step).map_err(|e| PrecipError::InvalidClimatology {
                    month: i as u8 + 1,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { kernels, step })
    }

    /// Kernel for calendar month `month` (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`PrecipError::InvalidMonth`] outside 1..=12.
    pub fn kernel(&self, month: u8) -> Result<&TriangleKernel, PrecipError> {
        if !(1..=12).contains(&month) {
            return Err(PrecipError::InvalidMonth { month });
        }
        Ok(&self.kernels[month as usize - 1])
    }

    /// Time step the kernels were built for.
    pub fn step(&self) -> TimeStep {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hourly() -> TimeStep {
        TimeStep::new(60).unwrap()
    }

    #[test]
    fn window_geometry() {
        let k = TriangleKernel::new(240.0, 720.0, hourly()).unwrap();
        assert_eq!(k.offset(), 12);
        assert_eq!(k.len(), 48);
        let k = TriangleKernel::new(60.0, 720.0, TimeStep::new(480).unwrap()).unwrap();
        // 3 steps per day: offset 2, 7 bins
        assert_eq!(k.offset(), 2);
        assert_eq!(k.len(), 7);
    }

    #[test]
    fn spread_kernel_sums_to_one() {
        let k = TriangleKernel::new(240.0, 750.0, hourly()).unwrap();
        assert_eq!(k.shape(), KernelShape::Spread);
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        // 10:30..14:30 touches bins for hours 10..=14
        let nonzero: Vec<usize> = (0..k.len()).filter(|&i| k.weights()[i] > 0.0).collect();
        assert_eq!(nonzero, (22..=26).collect::<Vec<_>>());
    }

    #[test]
    fn spread_kernel_is_symmetric_about_peak_bin() {
        let k = TriangleKernel::new(240.0, 750.0, hourly()).unwrap();
        let w = k.weights();
        assert_relative_eq!(w[22], w[26], epsilon = 1e-12);
        assert_relative_eq!(w[23], w[25], epsilon = 1e-12);
        // rising edge 10:30-11:00: area 2*(30)^2/240^2
        assert_relative_eq!(w[22], 2.0 * 900.0 / 57_600.0, epsilon = 1e-12);
    }

    #[test]
    fn peak_in_start_bin() {
        // start 12:20, peak 12:50, end 13:20
        let k = TriangleKernel::new(60.0, 770.0, hourly()).unwrap();
        assert_eq!(k.shape(), KernelShape::PeakInStartBin);
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn peak_in_end_bin() {
        let k = TriangleKernel::new(60.0, 760.0, hourly()).unwrap();
        // 12:40 peak; start 12:10 is hour 12, end 13:10 is hour 13.
        assert_eq!(k.shape(), KernelShape::PeakInStartBin);
        let k = TriangleKernel::new(60.0, 790.0, hourly()).unwrap();
        // start 12:40, peak 13:10, end 13:40
        assert_eq!(k.shape(), KernelShape::PeakInEndBin);
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_duration_is_delta() {
        let k = TriangleKernel::new(0.0, 725.0, hourly()).unwrap();
        assert_eq!(k.shape(), KernelShape::Delta);
        assert_eq!(k.weights()[24], 1.0);
        assert_eq!(k.weights().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn pulse_inside_one_bin_is_delta() {
        let k = TriangleKernel::new(20.0, 730.0, hourly()).unwrap();
        assert_eq!(k.shape(), KernelShape::Delta);
        assert_eq!(k.weights()[24], 1.0);
    }

    #[test]
    fn short_storms_approach_delta() {
        let mut prev = 0.0;
        for d in [480.0, 240.0, 120.0, 60.0, 30.0] {
            let k = TriangleKernel::new(d, 750.0, hourly()).unwrap();
            let peak = k.weights()[24];
            assert!(peak >= prev);
            prev = peak;
        }
        assert_relative_eq!(prev, 1.0);
    }

    #[test]
    fn pulse_outside_window_rejected() {
        assert!(TriangleKernel::new(600.0, -600.0, hourly()).is_err());
        assert!(TriangleKernel::new(600.0, 2000.0, hourly()).is_err());
        assert!(TriangleKernel::new(0.0, 2160.0, hourly()).is_err());
        assert!(TriangleKernel::new(-1.0, 720.0, hourly()).is_err());
        assert!(TriangleKernel::new(60.0, f64::NAN, hourly()).is_err());
    }

    #[test]
    fn pulse_reaching_window_edges_accepted() {
        let k = TriangleKernel::new(720.0, -360.0, hourly()).unwrap();
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        let k = TriangleKernel::new(720.0, 1800.0, hourly()).unwrap();
        assert_relative_eq!(k.weights().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(k.weights()[47] > 0.0);
    }

    #[test]
    fn table_lookup() {
        let c = StormClimatology::constant(120.0, 720.0).unwrap();
        let t = MonthlyKernelTable::new(&c, hourly()).unwrap();
        assert!(t.kernel(1).is_ok());
        assert!(t.kernel(12).is_ok());
        assert_eq!(t.kernel(0).unwrap_err(), PrecipError::InvalidMonth { month: 0 });
        assert!(t.kernel(13).is_err());
    }

    #[test]
    fn every_month_has_unit_mass() {
        let durations = [
            0.0, 30.0, 60.0, 90.0, 120.0, 180.0, 240.0, 300.0, 360.0, 480.0, 600.0, 720.0,
        ];
        let peaks = [
            720.0, 15.0, 1439.0, 100.0, 1320.0, 770.0, 360.0, 1200.0, 900.0, 30.0, 1000.0, 1500.0,
        ];
        let c = StormClimatology::new(durations, peaks).unwrap();
        for minutes in [15, 60, 180, 1440] {
            let step = TimeStep::new(minutes).unwrap();
            let t = MonthlyKernelTable::new(&c, step).unwrap();
            for month in 1..=12 {
                let k = t.kernel(month).unwrap();
                let total: f64 = k.weights().iter().sum();
                assert_relative_eq!(total, 1.0, epsilon = 1e-12);
                assert!(k.weights().iter().all(|&w| w >= 0.0));
            }
            assert_eq!(t.kernel(1).unwrap().shape(), KernelShape::Delta);
        }
    }

    #[test]
    fn table_reports_bad_month() {
        let mut p = [720.0; 12];
        p[6] = 5000.0;
        let c = StormClimatology::new([120.0; 12], p).unwrap();
        let err = MonthlyKernelTable::new(&c, hourly()).unwrap_err();
        assert!(matches!(err, PrecipError::InvalidClimatology { month: 7, .. }));
    }
}
