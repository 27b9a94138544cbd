//! Saturation vapor pressure.

/// Saturation vapor pressure [Pa] at air temperature `temp` [°C].
///
/// Tetens-type expression over water, with the polynomial ice correction
/// `1 + 0.00972 T + 0.000042 T²` applied below freezing.
pub fn saturation_vapor_pressure(temp: f64) -> f64 {
    const A: f64 = 0.61078;
    const B: f64 = 17.269;
    const C: f64 = 237.3;

    let mut svp = A * ((B * temp) / (C + temp)).exp();
    if temp < 0.0 {
        svp *= 1.0 + 0.00972 * temp + 0.000042 * temp * temp;
    }
    svp * 1000.0
}

/// Applies [`saturation_vapor_pressure`] to every element of `temp`.
pub fn saturation_vapor_pressure_series(temp: &[f64]) -> Vec<f64> {
    temp.iter().map(|&t| saturation_vapor_pressure(t)).collect()
}
