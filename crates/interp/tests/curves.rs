use approx::assert_relative_eq;
use nephele_interp::{InterpError, Linear, Pchip, forward_fill, hold_daily};

#[test]
fn pchip_passes_through_diurnal_knots() {
    // min at 06:00, max at 14:00 over three days, in absolute minutes
    let x = [
        -1080.0, -600.0, 360.0, 840.0, 1800.0, 2280.0, 3240.0, 3720.0, 4680.0, 5160.0,
    ];
    let y = [5.0, 15.0, 5.0, 15.0, 7.0, 18.0, 6.0, 16.0, 6.0, 16.0];
    let p = Pchip::new(&x, &y).unwrap();
    for (&xi, &yi) in x.iter().zip(&y) {
        assert_relative_eq!(p.evaluate(xi), yi, epsilon = 1e-12);
    }
    // Between a min and the following max the curve stays inside the pair.
    for i in 0..=48 {
        let t = 1800.0 + 10.0 * i as f64;
        let v = p.evaluate(t);
        assert!((7.0 - 1e-12..=18.0 + 1e-12).contains(&v), "t={t} v={v}");
    }
}

#[test]
fn linear_extrapolates_both_ends() {
    let l = Linear::new(&[0.0, 10.0], &[1.0, 2.0]).unwrap();
    assert_relative_eq!(l.evaluate(-10.0), 0.0, epsilon = 1e-12);
    assert_relative_eq!(l.evaluate(20.0), 3.0, epsilon = 1e-12);
}

#[test]
fn rejects_bad_knots() {
    assert_eq!(
        Pchip::new(&[0.0, 0.0], &[1.0, 2.0]).unwrap_err(),
        InterpError::NotIncreasing { index: 1 }
    );
    assert!(matches!(
        Linear::new(&[0.0, 1.0], &[1.0]),
        Err(InterpError::LengthMismatch { .. })
    ));
}

#[test]
fn hold_then_fill_closes_gap_days() {
    let mut v = hold_daily(&[3.0, f64::NAN, 4.0], 2);
    assert_eq!(forward_fill(&mut v), 2);
    assert_eq!(v, vec![3.0, 3.0, 3.0, 3.0, 4.0, 4.0]);
}
