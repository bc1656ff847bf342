/// Absolute tolerance used to classify rounded values as zero or integral.
pub const EPSILON: f64 = 1e-10;

/// Rounds `value` to `places` decimal digits, half away from zero.
///
/// NaN and infinities are returned unchanged, as is any value so large that
/// scaling it would overflow.
///
/// ## Example
/// ```
/// use toycalc::util::num::round_to_places;
///
/// assert_eq!(round_to_places(0.899_999_999_99, 9), 0.9);
/// assert_eq!(round_to_places(2.5, 0), 3.0);
/// assert_eq!(round_to_places(-2.5, 0), -3.0);
/// ```
#[must_use]
pub fn round_to_places(value: f64, places: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(i32::from(places));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Checks whether `value` lies within [`EPSILON`] of zero.
///
/// ## Example
/// ```
/// use toycalc::util::num::is_effectively_zero;
///
/// assert!(is_effectively_zero(1e-11));
/// assert!(!is_effectively_zero(1e-9));
/// ```
#[must_use]
pub fn is_effectively_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Checks whether `value` lies within [`EPSILON`] of an integer.
///
/// Always `false` for NaN and infinities.
///
/// ## Example
/// ```
/// use toycalc::util::num::is_effectively_integer;
///
/// assert!(is_effectively_integer(3.0));
/// assert!(is_effectively_integer(-2.000_000_000_01));
/// assert!(!is_effectively_integer(2.5));
/// assert!(!is_effectively_integer(f64::INFINITY));
/// ```
#[must_use]
pub fn is_effectively_integer(value: f64) -> bool {
    value.is_finite() && (value - value.round()).abs() < EPSILON
}
