use num_complex::Complex64;

use crate::{
    config::{DisplayConfig, FormatMode},
    util::num::{is_effectively_integer, is_effectively_zero, round_to_places},
};

/// Renders a complex value as a display string.
///
/// NaN in either component renders as `NaN`. Any remaining infinite
/// component renders the raw pair with explicit signs, e.g. `(+inf+0i)`.
///
/// Otherwise both components are rounded to `config.precision()` decimal
/// digits and classified against [`EPSILON`](crate::util::num::EPSILON). A
/// zero real part is omitted, a zero imaginary part is omitted, and `0` is
/// rendered when both are zero. An imaginary part of magnitude one is shown
/// as a bare `i`.
///
/// # Parameters
/// - `value`: The value to render.
/// - `config`: Format mode and precision.
///
/// # Returns
/// The display string, such as `7`, `2.5`, `3-i` or `-2i`.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use toycalc::{
///     config::{DisplayConfig, FormatMode},
///     interpreter::formatter::format,
/// };
///
/// let auto = DisplayConfig::default();
/// assert_eq!(format(Complex64::new(7.0, 0.0), &auto), "7");
/// assert_eq!(format(Complex64::new(3.0, -1.0), &auto), "3-i");
/// assert_eq!(format(Complex64::new(0.0, 2.5), &auto), "2.5i");
///
/// let fixed = DisplayConfig::new(FormatMode::Fixed, 2).unwrap();
/// assert_eq!(format(Complex64::new(1.0 / 3.0, 0.0), &fixed), "0.33");
///
/// let sci = DisplayConfig::new(FormatMode::Sci, 3).unwrap();
/// assert_eq!(format(Complex64::new(12346.0, 0.0), &sci), "1.235e+04");
/// ```
#[must_use]
pub fn format(value: Complex64, config: &DisplayConfig) -> String {
    if value.re.is_nan() || value.im.is_nan() {
        return "NaN".to_string();
    }
    if value.re.is_infinite() || value.im.is_infinite() {
        return format!("({:+}{:+}i)", value.re, value.im);
    }

    let re = round_to_places(value.re, config.precision());
    let im = round_to_places(value.im, config.precision());
    let re_is_zero = is_effectively_zero(re);
    let im_is_zero = is_effectively_zero(im);

    match (re_is_zero, im_is_zero) {
        (true, true) => "0".to_string(),
        (false, true) => render(re, config),
        (true, false) => {
            let sign = if im < 0.0 { "-" } else { "" };
            format!("{sign}{}", imaginary_magnitude(im.abs(), config))
        },
        (false, false) => {
            let sign = if im < 0.0 { '-' } else { '+' };
            format!("{}{sign}{}", render(re, config), imaginary_magnitude(im.abs(), config))
        },
    }
}

fn imaginary_magnitude(magnitude: f64, config: &DisplayConfig) -> String {
    if is_effectively_zero(magnitude - 1.0) {
        "i".to_string()
    } else {
        format!("{}i", render(magnitude, config))
    }
}

/// Renders one finite, already rounded component.
fn render(value: f64, config: &DisplayConfig) -> String {
    let precision = usize::from(config.precision());
    match config.mode() {
        FormatMode::Fixed => format!("{value:.precision$}"),
        FormatMode::Sci => scientific(&format!("{value:.precision$e}")),
        FormatMode::Auto if is_effectively_integer(value) => format!("{value:.0}"),
        FormatMode::Auto => general(value),
    }
}

/// Shortest round-trip digits, switching to scientific notation for
/// exponents below -4 or from 6 up.
fn general(value: f64) -> String {
    let shortest = format!("{value:e}");
    let exponent = shortest.split_once('e')
                           .and_then(|(_, exponent)| exponent.parse::<i32>().ok())
                           .unwrap_or(0);
    if (-4..6).contains(&exponent) {
        format!("{value}")
    } else {
        scientific(&shortest)
    }
}

/// Rewrites Rust's `1.5e3` exponent form as `1.5e+03`.
fn scientific(rust_form: &str) -> String {
    let Some((mantissa, exponent)) = rust_form.split_once('e') else {
        return rust_form.to_string();
    };
    let (sign, digits) = exponent.strip_prefix('-')
                                 .map_or(('+', exponent), |digits| ('-', digits));
    format!("{mantissa}e{sign}{digits:0>2}")
}
