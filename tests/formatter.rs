use toycalc::{
    Complex64,
    config::{DisplayConfig, FormatMode},
    interpreter::formatter::format,
};

fn auto(re: f64, im: f64) -> String {
    format(Complex64::new(re, im), &DisplayConfig::default())
}

fn with(mode: FormatMode, precision: u8, re: f64, im: f64) -> String {
    format(Complex64::new(re, im), &DisplayConfig::new(mode, precision).unwrap())
}

#[test]
fn zero_in_every_mode() {
    assert_eq!(auto(0.0, 0.0), "0");
    assert_eq!(auto(-0.0, -0.0), "0");
    assert_eq!(auto(1e-12, -1e-12), "0");
    assert_eq!(with(FormatMode::Fixed, 3, 0.0, 0.0), "0");
    assert_eq!(with(FormatMode::Sci, 3, 0.0, 0.0), "0");
}

#[test]
fn auto_integers_are_bare() {
    assert_eq!(auto(7.0, 0.0), "7");
    assert_eq!(auto(-512.0, 0.0), "-512");
    assert_eq!(auto(1e12, 0.0), "1000000000000");
    assert_eq!(auto(2.000_000_000_01, 0.0), "2");
}

#[test]
fn auto_fractions_use_the_general_form() {
    assert_eq!(auto(2.5, 0.0), "2.5");
    assert_eq!(auto(1.0 / 3.0, 0.0), "0.333333333");
    assert_eq!(auto(0.000_125, 0.0), "0.000125");
    assert_eq!(auto(1234567.5, 0.0), "1.2345675e+06");
}

#[test]
fn rounding_hides_float_noise() {
    assert_eq!(auto(0.1 + 0.2, 0.0), "0.3");
    assert_eq!(auto(-1.0, 1.224_646_799_147_353_2e-16), "-1");
    assert_eq!(auto(1.224_646_799_147_353_2e-16, 2.0), "2i");
}

#[test]
fn imaginary_parts() {
    assert_eq!(auto(0.0, 3.0), "3i");
    assert_eq!(auto(0.0, -2.5), "-2.5i");
    assert_eq!(auto(3.0, 2.0), "3+2i");
    assert_eq!(auto(3.0, -2.0), "3-2i");
    assert_eq!(auto(-1.5, 0.25), "-1.5+0.25i");
}

#[test]
fn unit_imaginary_parts_omit_the_numeral() {
    assert_eq!(auto(0.0, 1.0), "i");
    assert_eq!(auto(0.0, -1.0), "-i");
    assert_eq!(auto(3.0, 1.0), "3+i");
    assert_eq!(auto(3.0, -1.0), "3-i");
    assert_eq!(with(FormatMode::Fixed, 2, 0.0, 1.0), "i");
    assert_eq!(with(FormatMode::Sci, 2, 2.0, -1.0), "2.00e+00-i");
}

#[test]
fn fixed_mode() {
    assert_eq!(with(FormatMode::Fixed, 2, 7.0, 0.0), "7.00");
    assert_eq!(with(FormatMode::Fixed, 3, 1.0 / 3.0, 0.0), "0.333");
    assert_eq!(with(FormatMode::Fixed, 0, 2.5, 0.0), "3");
    assert_eq!(with(FormatMode::Fixed, 1, 1.25, -0.5), "1.3-0.5i");
    assert_eq!(with(FormatMode::Fixed, 2, 0.001, 0.0), "0");
}

#[test]
fn sci_mode() {
    assert_eq!(with(FormatMode::Sci, 2, 1500.0, 0.0), "1.50e+03");
    assert_eq!(with(FormatMode::Sci, 3, 0.25, 0.0), "2.500e-01");
    assert_eq!(with(FormatMode::Sci, 1, -42.0, 0.0), "-4.2e+01");
    assert_eq!(with(FormatMode::Sci, 2, 1.0, 200.0), "1.00e+00+2.00e+02i");
}

#[test]
fn nan_and_infinity() {
    assert_eq!(auto(f64::NAN, 0.0), "NaN");
    assert_eq!(auto(1.0, f64::NAN), "NaN");
    assert_eq!(auto(f64::INFINITY, f64::NAN), "NaN");
    assert_eq!(auto(f64::INFINITY, 0.0), "(+inf+0i)");
    assert_eq!(auto(-f64::INFINITY, -f64::INFINITY), "(-inf-infi)");
    assert_eq!(auto(2.0, f64::NEG_INFINITY), "(+2-infi)");
}

#[test]
fn precision_twenty_keeps_the_shortest_digits() {
    assert_eq!(with(FormatMode::Auto, 20, 0.1, 0.0), "0.1");
}
