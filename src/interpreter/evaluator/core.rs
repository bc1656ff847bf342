use num_complex::Complex64;
use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The postfix stack machine.
///
/// An `Evaluator` is created per evaluation, fed every token of a postfix
/// queue in order and then asked for its single result.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<Complex64>,
}

impl Evaluator {
    /// Creates an evaluator with an empty operand stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Executes one token of a postfix queue.
    ///
    /// # Errors
    /// - `InvalidNumber` if a number literal does not parse as a float.
    /// - `InsufficientOperands` if an operator or function finds too few
    ///   values.
    /// - `ModuloByZero` for `%` with a zero divisor.
    /// - `UnknownIdentifier` for an unregistered name.
    /// - `UnexpectedToken` for grouping tokens, commas and the like.
    pub fn step(&mut self, token: &Token) -> EvalResult<()> {
        match token.kind {
            TokenKind::Number => {
                let value =
                    token.text.parse::<f64>().map_err(|_| EvalError::InvalidNumber {
                                                   literal:  token.text.clone(),
                                                   position: token.position,
                                               })?;
                self.push(Complex64::new(value, 0.0));
                Ok(())
            },
            TokenKind::Ident => self.eval_identifier(token),
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret => {
                let right = self.pop(token)?;
                let left = self.pop(token)?;
                let result = Self::eval_binary(token, left, right)?;
                self.push(result);
                Ok(())
            },
            TokenKind::UnaryMinus => {
                let operand = self.pop(token)?;
                self.push(Self::eval_negate(operand));
                Ok(())
            },
            _ => Err(EvalError::UnexpectedToken { token:    token.text.clone(),
                                                  position: token.position, }),
        }
    }

    /// Consumes the evaluator and returns the single value left on the stack.
    ///
    /// # Errors
    /// - `NoResult` if the stack is empty.
    /// - `ValuesLeftOnStack` if more than one value remains.
    pub fn finish(mut self) -> EvalResult<Complex64> {
        match self.stack.len() {
            0 => Err(EvalError::NoResult),
            1 => self.stack.pop().ok_or(EvalError::NoResult),
            count => Err(EvalError::ValuesLeftOnStack { count }),
        }
    }

    /// Pushes a value onto the operand stack.
    pub fn push(&mut self, value: Complex64) {
        self.stack.push(value);
    }

    /// Pops the top operand on behalf of `token`.
    ///
    /// # Errors
    /// Returns `InsufficientOperands` naming `token` if the stack is empty.
    pub fn pop(&mut self, token: &Token) -> EvalResult<Complex64> {
        self.stack.pop().ok_or_else(|| EvalError::InsufficientOperands {
                                            token:    token.text.clone(),
                                            position: token.position,
                                        })
    }
}

/// Evaluates a postfix token queue to a single complex value.
///
/// # Errors
/// Propagates the first error raised by [`Evaluator::step`] or
/// [`Evaluator::finish`].
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use toycalc::interpreter::{
///     evaluator::core::evaluate_rpn,
///     lexer::{Token, TokenKind},
/// };
///
/// // 2 3 ^
/// let rpn = [Token::new(TokenKind::Number, "2", 0),
///            Token::new(TokenKind::Number, "3", 2),
///            Token::new(TokenKind::Caret, "^", 1)];
/// assert_eq!(evaluate_rpn(&rpn).unwrap(), Complex64::new(8.0, 0.0));
/// ```
pub fn evaluate_rpn(rpn: &[Token]) -> EvalResult<Complex64> {
    let mut evaluator = Evaluator::new();
    for token in rpn {
        evaluator.step(token)?;
    }
    let result = evaluator.finish()?;
    debug!(tokens = rpn.len(), %result, "evaluated postfix queue");
    Ok(result)
}
