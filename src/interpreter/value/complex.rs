use num_complex::Complex64;

/// `0` as a complex number.
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Calculator-specific operations on complex numbers.
pub trait ComplexExt: Sized {
    /// Returns `true` if both components are zero (of either sign).
    fn is_exact_zero(&self) -> bool;

    /// Applies `op` to the real and imaginary parts independently.
    #[must_use]
    fn map_parts(self, op: impl Fn(f64) -> f64) -> Self;

    /// Replaces `-0.0` components with `+0.0`.
    ///
    /// A negated real such as `-4` then carries a `+0` imaginary part and
    /// follows the upper side of the negative real branch cut.
    #[must_use]
    fn without_negative_zero(self) -> Self;

    /// Raises `self` to a complex power, returning the principal value.
    #[must_use]
    fn principal_pow(self, exponent: Self) -> Self;

    /// Computes the Gaussian-integer remainder `self - round(self / divisor) *
    /// divisor`, rounding each part of the quotient to the nearest integer with
    /// ties to even.
    ///
    /// Returns `None` if the divisor is exactly zero.
    fn gaussian_rem(self, divisor: Self) -> Option<Self>;
}

impl ComplexExt for Complex64 {
    fn is_exact_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::value::complex::ComplexExt;
    ///
    /// let z = Complex64::new(2.7, -1.2).map_parts(f64::floor);
    /// assert_eq!(z, Complex64::new(2.0, -2.0));
    /// ```
    fn map_parts(self, op: impl Fn(f64) -> f64) -> Self {
        Self::new(op(self.re), op(self.im))
    }

    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::value::complex::ComplexExt;
    ///
    /// let z = -Complex64::new(4.0, 0.0);
    /// assert!(z.im.is_sign_negative());
    /// assert!(z.without_negative_zero().im.is_sign_positive());
    /// ```
    fn without_negative_zero(self) -> Self {
        self.map_parts(|part| if part == 0.0 { 0.0 } else { part })
    }

    /// A zero base gives `NaN` for a NaN exponent, `1` when the exponent's
    /// real part is zero, infinity when it is negative and `0` when it is
    /// positive. Any other base is evaluated in polar form, so integral
    /// powers of positive reals stay exact.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::value::complex::ComplexExt;
    ///
    /// let eight = Complex64::new(2.0, 0.0).principal_pow(Complex64::new(3.0, 0.0));
    /// assert_eq!(eight, Complex64::new(8.0, 0.0));
    ///
    /// let root = Complex64::new(-4.0, 0.0).principal_pow(Complex64::new(0.5, 0.0));
    /// assert!(root.re.abs() < 1e-12);
    /// assert!((root.im - 2.0).abs() < 1e-12);
    /// ```
    fn principal_pow(self, exponent: Self) -> Self {
        if self.is_exact_zero() {
            if exponent.is_nan() {
                return Self::new(f64::NAN, f64::NAN);
            }
            if exponent.re == 0.0 {
                return ONE;
            }
            if exponent.re < 0.0 {
                let im = if exponent.im == 0.0 { 0.0 } else { f64::INFINITY };
                return Self::new(f64::INFINITY, im);
            }
            return ZERO;
        }

        let modulus = self.norm();
        let arg = self.arg();

        let mut radius = modulus.powf(exponent.re);
        let mut theta = exponent.re * arg;
        if exponent.im != 0.0 {
            radius *= (-exponent.im * arg).exp();
            theta = exponent.im.mul_add(modulus.ln(), theta);
        }

        Self::from_polar(radius, theta)
    }

    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::value::complex::ComplexExt;
    ///
    /// let r = Complex64::new(-10.0, 0.0).gaussian_rem(Complex64::new(3.0, 0.0));
    /// assert_eq!(r, Some(Complex64::new(-1.0, 0.0)));
    ///
    /// assert_eq!(Complex64::new(5.0, 0.0).gaussian_rem(Complex64::new(0.0, 0.0)),
    ///            None);
    /// ```
    fn gaussian_rem(self, divisor: Self) -> Option<Self> {
        if divisor.is_exact_zero() {
            return None;
        }
        let quotient = (self / divisor).map_parts(f64::round_ties_even);
        Some(self - quotient * divisor)
    }
}
