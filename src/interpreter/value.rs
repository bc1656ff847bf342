/// Complex number support.
///
/// Extends `num_complex::Complex64` with the operations the evaluator needs
/// beyond what the crate provides: a principal-value power with exact
/// handling of a zero base, component-wise rounding, signed-zero
/// normalisation and the Gaussian-integer remainder.
pub mod complex;
