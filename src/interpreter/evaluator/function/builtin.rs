use std::f64::consts::{E, LN_2, PI};

use num_complex::Complex64;

use crate::interpreter::{
    evaluator::function::core::{Constant, Function},
    value::complex::ComplexExt,
};

impl Constant {
    /// Returns the constant's value.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::evaluator::function::core::Constant;
    ///
    /// assert_eq!(Constant::I.value(), Complex64::new(0.0, 1.0));
    /// ```
    #[must_use]
    pub const fn value(self) -> Complex64 {
        match self {
            Self::I => Complex64::new(0.0, 1.0),
            Self::Pi => Complex64::new(PI, 0.0),
            Self::E => Complex64::new(E, 0.0),
        }
    }
}

impl Function {
    /// Applies the function to one complex argument.
    ///
    /// Multivalued functions return their principal value. `log2` is
    /// `log(z) / log(2)`. The rounding family works on the real and imaginary
    /// parts independently, and `round` sends ties to even.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::evaluator::function::core::Function;
    ///
    /// let z = Complex64::new(2.5, -3.5);
    /// assert_eq!(Function::Round.apply(z), Complex64::new(2.0, -4.0));
    /// assert_eq!(Function::Trunc.apply(z), Complex64::new(2.0, -3.0));
    /// assert_eq!(Function::Conj.apply(z), Complex64::new(2.5, 3.5));
    ///
    /// let three_four = Complex64::new(3.0, 4.0);
    /// assert_eq!(Function::Abs.apply(three_four), Complex64::new(5.0, 0.0));
    /// ```
    #[must_use]
    pub fn apply(self, z: Complex64) -> Complex64 {
        match self {
            Self::Log => z.ln(),
            Self::Log2 => z.ln() / LN_2,
            Self::Log10 => z.log10(),
            Self::Exp => z.exp(),
            Self::Sqrt => z.sqrt(),
            Self::Sin => z.sin(),
            Self::Cos => z.cos(),
            Self::Tan => z.tan(),
            Self::Asin => z.asin(),
            Self::Acos => z.acos(),
            Self::Atan => z.atan(),
            Self::Sinh => z.sinh(),
            Self::Cosh => z.cosh(),
            Self::Tanh => z.tanh(),
            Self::Asinh => z.asinh(),
            Self::Acosh => z.acosh(),
            Self::Atanh => z.atanh(),
            Self::Real => Complex64::new(z.re, 0.0),
            Self::Imag => Complex64::new(z.im, 0.0),
            Self::Abs => Complex64::new(z.norm(), 0.0),
            Self::Phase => Complex64::new(z.arg(), 0.0),
            Self::Conj => z.conj(),
            Self::DegToRad => z * (PI / 180.0),
            Self::RadToDeg => z * (180.0 / PI),
            Self::Floor => z.map_parts(f64::floor),
            Self::Ceil => z.map_parts(f64::ceil),
            Self::Round => z.map_parts(f64::round_ties_even),
            Self::Trunc => z.map_parts(f64::trunc),
        }
    }
}
