use num_complex::Complex64;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{Token, TokenKind},
        value::complex::ComplexExt,
    },
};

impl Evaluator {
    /// Evaluates a binary operation.
    ///
    /// `+`, `-`, `*` and `/` use native complex arithmetic, so dividing by
    /// zero yields infinite or NaN components instead of an error. `^`
    /// returns the principal value. `%` is the Gaussian-integer remainder
    /// `left - round(left / right) * right`.
    ///
    /// # Parameters
    /// - `operator`: The operator token, used for error positions.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `ModuloByZero` if `%` receives an exactly zero divisor.
    /// - `UnexpectedToken` if `operator` is not a binary operator.
    ///
    /// # Example
    /// ```
    /// use num_complex::Complex64;
    /// use toycalc::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     lexer::{Token, TokenKind},
    /// };
    ///
    /// let percent = Token::new(TokenKind::Percent, "%", 3);
    /// let result = Evaluator::eval_binary(&percent,
    ///                                     Complex64::new(10.0, 0.0),
    ///                                     Complex64::new(3.0, 0.0)).unwrap();
    /// assert_eq!(result, Complex64::new(1.0, 0.0));
    ///
    /// let zero = Complex64::new(0.0, 0.0);
    /// assert!(Evaluator::eval_binary(&percent, result, zero).is_err());
    /// ```
    pub fn eval_binary(operator: &Token,
                       left: Complex64,
                       right: Complex64)
                       -> EvalResult<Complex64> {
        match operator.kind {
            TokenKind::Plus => Ok(left + right),
            TokenKind::Minus => Ok(left - right),
            TokenKind::Star => Ok(left * right),
            TokenKind::Slash => Ok(left / right),
            TokenKind::Caret => Ok(left.principal_pow(right)),
            TokenKind::Percent => {
                left.gaussian_rem(right)
                    .ok_or(EvalError::ModuloByZero { position: operator.position })
            },
            _ => Err(EvalError::UnexpectedToken { token:    operator.text.clone(),
                                                  position: operator.position, }),
        }
    }
}
