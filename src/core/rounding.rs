/// Rounds half away from zero, which is what `f64::round` does. Emission,
/// savings and price figures use 2 decimals; credit quantities use 4.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
