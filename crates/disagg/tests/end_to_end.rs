use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::{NaiveDate, Timelike};
use nephele_disagg::{
    DailyRecord, DailySeries, DisaggConfig, EmissivityMethod, PrecipMethod, SolarGeometry,
    StormClimatology, TemperatureBounds, TimeStep, build_temperature_curve, disaggregate,
    estimate_extrema_times,
};
use nephele_physics::constants::FINE_STEPS_PER_DAY;
use nephele_physics::saturation_vapor_pressure;

/// Flat daylight from 06:00 to 18:00, summing to one over the day.
fn geometry() -> SolarGeometry {
    let rise = FINE_STEPS_PER_DAY / 4;
    let set = 3 * FINE_STEPS_PER_DAY / 4;
    let width = (set - rise) as f64;
    SolarGeometry::from_fn(366, |_, s| if (rise..set).contains(&s) { 1.0 / width } else { 0.0 })
        .unwrap()
}

fn record(t_min: f64, t_max: f64, prec: f64) -> DailyRecord {
    DailyRecord {
        t_min,
        t_max,
        prec,
        shortwave: 250.0,
        daylength: 43_200.0,
        tskc: 0.5,
        vapor_pressure: 900.0,
        wind: None,
    }
}

fn three_days() -> DailySeries {
    DailySeries::new(
        NaiveDate::from_ymd_opt(2015, 7, 14).unwrap(),
        &[
            record(5.0, 15.0, 0.0),
            record(7.0, 18.0, 10.0),
            record(6.0, 16.0, 0.0),
        ],
    )
    .unwrap()
}

#[test]
fn hourly_uniform_scenario() {
    let daily = three_days();
    let out = disaggregate(
        &daily,
        &DisaggConfig::default(),
        &geometry(),
        &TemperatureBounds::new(),
    )
    .unwrap();

    assert_eq!(out.len(), 72);
    assert_eq!(out.gap_count(), 0);
    assert_eq!(out.timestamps()[0].hour(), 0);
    assert_eq!(out.timestamps()[25].hour(), 1);

    for (i, &p) in out.prec().iter().enumerate() {
        let expected = if (24..48).contains(&i) { 10.0 / 24.0 } else { 0.0 };
        assert_relative_eq!(p, expected, epsilon = 1e-12);
    }
    for d in 0..3 {
        let total: f64 = out.prec()[d * 24..(d + 1) * 24].iter().sum();
        assert_relative_eq!(total, daily.prec()[d], epsilon = 1e-9);
    }

    // Sunrise falls at the 05:00 step; t_min is hit exactly there.
    assert_relative_eq!(out.temp()[5], 5.0, epsilon = 1e-9);
    assert_relative_eq!(out.temp()[29], 7.0, epsilon = 1e-9);
    assert_relative_eq!(out.temp()[53], 6.0, epsilon = 1e-9);

    // Night steps get no shortwave; day totals follow the daily scale.
    assert_eq!(out.shortwave()[2], 0.0);
    let sw_day: f64 = out.shortwave()[..24].iter().sum();
    assert_relative_eq!(sw_day, 250.0 * 43_200.0 / 86_400.0, epsilon = 1e-9);
}

#[test]
fn humidity_respects_saturation() {
    let mut records = vec![record(-5.0, 2.0, 0.0); 4];
    records[1].vapor_pressure = 2_000.0;
    records[3].vapor_pressure = f64::NAN;
    let daily = DailySeries::new(NaiveDate::from_ymd_opt(2010, 1, 5).unwrap(), &records).unwrap();
    let out = disaggregate(
        &daily,
        &DisaggConfig::new().with_time_step(TimeStep::new(30).unwrap()),
        &geometry(),
        &TemperatureBounds::new(),
    )
    .unwrap();

    for ((&vp, &t), &rh) in out.vapor_pressure().iter().zip(out.temp()).zip(out.rel_humid()) {
        assert!(vp >= 0.0);
        assert!(vp <= saturation_vapor_pressure(t) / 1000.0 + 1e-12);
        assert!((0.0..=100.0).contains(&rh));
    }
}

#[test]
fn wind_constant_within_each_day() {
    let mut records = vec![record(5.0, 15.0, 0.0); 3];
    records[0].wind = Some(2.5);
    records[2].wind = Some(6.0);
    let daily = DailySeries::new(NaiveDate::from_ymd_opt(2012, 3, 1).unwrap(), &records).unwrap();
    let step = TimeStep::new(15).unwrap();
    let out = disaggregate(
        &daily,
        &DisaggConfig::new().with_time_step(step),
        &geometry(),
        &TemperatureBounds::new(),
    )
    .unwrap();

    let wind = out.wind().unwrap();
    let spd = step.steps_per_day();
    assert_eq!(wind.len(), 3 * spd);
    assert!(wind[..spd].iter().all(|&w| w == 2.5));
    // day without wind carries the previous day
    assert!(wind[spd..2 * spd].iter().all(|&w| w == 2.5));
    assert!(wind[2 * spd..].iter().all(|&w| w == 6.0));
    assert_eq!(out.record(0).unwrap().wind, Some(2.5));
}

#[test]
fn temperature_curve_hits_every_extreme() {
    let daily = three_days();
    let config = DisaggConfig::default();
    let step = config.time_step();
    let out = disaggregate(&daily, &config, &geometry(), &TemperatureBounds::new()).unwrap();
    let extrema = estimate_extrema_times(
        out.shortwave(),
        daily.len(),
        step,
        config.tmax_daylength_fraction(),
    )
    .unwrap();
    let bounds = TemperatureBounds::new().with_begin(3.0, 12.0).with_end(8.0, 20.0);
    let curve = build_temperature_curve(daily.t_min(), daily.t_max(), &extrema, &bounds).unwrap();
    for d in 0..daily.len() {
        let base = d as f64 * 1440.0;
        assert_relative_eq!(
            curve.evaluate(base + extrema.t_min_time()[d]),
            daily.t_min()[d],
            epsilon = 1e-9
        );
        assert_relative_eq!(
            curve.evaluate(base + extrema.t_max_time()[d]),
            daily.t_max()[d],
            epsilon = 1e-9
        );
    }
}

#[test]
fn triangle_run_conserves_precipitation() {
    let mut records = vec![record(5.0, 15.0, 0.0); 5];
    records[0].prec = 4.0;
    records[2].prec = 25.0;
    records[4].prec = 8.0;
    let daily = DailySeries::new(NaiveDate::from_ymd_opt(2018, 8, 30).unwrap(), &records).unwrap();
    let storm = StormClimatology::constant(300.0, 1_320.0).unwrap();
    let config = DisaggConfig::new()
        .with_prec_method(PrecipMethod::Triangle)
        .with_storm(storm)
        .with_lw_method(EmissivityMethod::Brutsaert);
    let out = disaggregate(&daily, &config, &geometry(), &TemperatureBounds::new()).unwrap();

    let total: f64 = out.prec().iter().sum();
    assert_abs_diff_eq!(total, 37.0, epsilon = 120.0 * 5e-6);
    assert!(out.prec().iter().all(|&p| p >= 0.0));
    // the late storm of day 2 spills past midnight into day 3
    assert!(out.prec()[72] > 0.0);
    assert!(out.longwave().iter().all(|&lw| lw > 0.0 && lw.is_finite()));
}

#[test]
fn triangle_without_storm_is_rejected() {
    let config = DisaggConfig::new().with_prec_method(PrecipMethod::Triangle);
    let err = disaggregate(&three_days(), &config, &geometry(), &TemperatureBounds::new())
        .unwrap_err();
    assert!(err.to_string().contains("storm climatology"));
}

#[test]
fn sunset_after_midnight_keeps_detected_sunrise() {
    // Dark only from 00:30 to 01:00; the sun sets just after midnight.
    let dark = FINE_STEPS_PER_DAY / 48..FINE_STEPS_PER_DAY / 24;
    let lit = (FINE_STEPS_PER_DAY - dark.len()) as f64;
    let geometry =
        SolarGeometry::from_fn(366, |_, s| if dark.contains(&s) { 0.0 } else { 1.0 / lit })
            .unwrap();
    let config = DisaggConfig::new().with_time_step(TimeStep::new(30).unwrap());
    let out = disaggregate(&three_days(), &config, &geometry, &TemperatureBounds::new()).unwrap();

    assert_eq!(out.len(), 144);
    assert_eq!(out.gap_count(), 0);
    // t_min falls on the 00:30 step of every day.
    assert_relative_eq!(out.temp()[1], 5.0, epsilon = 1e-9);
    assert_relative_eq!(out.temp()[49], 7.0, epsilon = 1e-9);
    assert_relative_eq!(out.temp()[97], 6.0, epsilon = 1e-9);
}
