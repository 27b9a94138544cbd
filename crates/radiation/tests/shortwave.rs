use approx::assert_relative_eq;
use nephele_calendar::{Doy, TimeStep};
use nephele_physics::constants::{FINE_STEPS_PER_DAY, SEC_PER_DAY};
use nephele_radiation::{SolarGeometry, SolarOffset, disaggregate_shortwave};

/// Half-sine daylight between 06:00 and 18:00, normalised to sum to one.
fn daylight_geometry() -> SolarGeometry {
    let rise = FINE_STEPS_PER_DAY / 4;
    let set = 3 * FINE_STEPS_PER_DAY / 4;
    let shape: Vec<f64> = (0..FINE_STEPS_PER_DAY)
        .map(|s| {
            if s >= rise && s < set {
                (std::f64::consts::PI * (s - rise) as f64 / (set - rise) as f64).sin()
            } else {
                0.0
            }
        })
        .collect();
    let total: f64 = shape.iter().sum();
    SolarGeometry::from_fn(366, |_, s| shape[s] / total).unwrap()
}

#[test]
fn daily_total_preserved_for_every_step() {
    let geometry = daylight_geometry();
    let sw = [180.0, 240.0, 90.0];
    let dayl = [40_000.0, 45_000.0, 38_000.0];
    let doys: Vec<Doy> = [100, 101, 102].map(|d| Doy::new(d).unwrap()).to_vec();
    for minutes in [15, 30, 60, 180, 360] {
        let step = TimeStep::new(minutes).unwrap();
        let out =
            disaggregate_shortwave(&sw, &dayl, &doys, &geometry, step, SolarOffset::default())
                .unwrap();
        let spd = step.steps_per_day();
        assert_eq!(out.len(), 3 * spd);
        for (d, day) in out.chunks(spd).enumerate() {
            let total: f64 = day.iter().sum();
            assert_relative_eq!(total, sw[d] * dayl[d] / SEC_PER_DAY, epsilon = 1e-9);
        }
    }
}

#[test]
fn night_steps_are_dark() {
    let step = TimeStep::new(60).unwrap();
    let out = disaggregate_shortwave(
        &[200.0],
        &[43_200.0],
        &[Doy::new(172).unwrap()],
        &daylight_geometry(),
        step,
        SolarOffset::default(),
    )
    .unwrap();
    assert!(out[..6].iter().all(|&v| v == 0.0));
    assert!(out[18..].iter().all(|&v| v == 0.0));
    assert!(out[6..18].iter().all(|&v| v > 0.0));
}

#[test]
fn negative_offset_shifts_earlier() {
    let step = TimeStep::new(60).unwrap();
    let out = disaggregate_shortwave(
        &[200.0],
        &[43_200.0],
        &[Doy::new(1).unwrap()],
        &daylight_geometry(),
        step,
        SolarOffset::new(-15.0, 0.0),
    )
    .unwrap();
    assert!(out[5] > 0.0);
    assert_eq!(out[17], 0.0);
}
