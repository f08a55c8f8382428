// 🔢 Decimal Precision - counting fractional digits
// Works on the canonical decimal string of an f64

// ============================================================================
// DECIMAL PLACES
// ============================================================================

/// Number of digits after the decimal point in the canonical string form of `value`.
///
/// The canonical form is Rust's `Display` for `f64`: the shortest digit string
/// that round-trips, written positionally (never in exponent notation). So
/// `1e-18` counts as 18 places and `0.1 + 0.2` counts as 17.
pub fn decimal_places(value: f64) -> usize {
    let text = value.to_string();
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}

/// Smallest positive value representable with `decimals` fractional digits (`10^-decimals`).
///
/// Exact for `decimals <= 22`, where `10^decimals` is itself an exact f64.
pub fn smallest_step(decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals).unwrap_or(i32::MAX);
    1.0 / 10f64.powi(exponent)
}

/// Whether `value` has no fractional part.
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

// ============================================================================
// TESTS
// ============================================================================
