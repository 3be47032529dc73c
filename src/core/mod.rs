pub mod errors;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use types::{non_negative, RiskLevel, Score1To5, Timeframe, UseCaseRecord, UNNAMED_USE_CASE};

/// Round half away from zero to `places` decimal places.
///
/// The result is always finite and never `-0.0`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        // Too large to carry a fractional part anyway
        return saturate(value);
    }
    saturate(scaled.round() / factor)
}

/// Clamp to the finite range, mapping NaN and `-0.0` to zero.
///
/// Sums of very large amounts would otherwise reach infinity, which JSON
/// cannot represent.
pub fn saturate(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}
