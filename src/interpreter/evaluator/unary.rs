use num_complex::Complex64;

use crate::interpreter::{evaluator::core::Evaluator, value::complex::ComplexExt};

impl Evaluator {
    /// Evaluates prefix negation.
    ///
    /// Zero components of the result are normalised to `+0.0`, so `-4` is
    /// `(-4, +0)` and `(-4)^0.5` lands on `2i` rather than `-2i`.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::evaluator::core::Evaluator;
    ///
    /// let negated = Evaluator::eval_negate(Complex64::new(4.0, 0.0));
    /// assert_eq!(negated, Complex64::new(-4.0, 0.0));
    /// assert!(negated.im.is_sign_positive());
    /// ```
    #[must_use]
    pub fn eval_negate(operand: Complex64) -> Complex64 {
        (-operand).without_negative_zero()
    }
}
