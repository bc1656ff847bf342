use num_complex::Complex64;
use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::Token,
    },
};

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// The imaginary unit.
    I,
    /// The ratio of a circle's circumference to its diameter.
    Pi,
    /// Euler's number.
    E,
}

/// A named function of one complex argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Log,
    Log2,
    Log10,
    Exp,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Real,
    Imag,
    Abs,
    Phase,
    Conj,
    DegToRad,
    RadToDeg,
    Floor,
    Ceil,
    Round,
    Trunc,
}

/// What a registered name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// A nullary constant, pushed as a value.
    Constant(Constant),
    /// A unary function, applied to the value on top of the stack.
    Function(Function),
}

/// Defines the registry by generating a static lookup table.
///
/// Each entry maps a name to a [`Builtin`]. Lookups ignore ASCII case.
macro_rules! builtins {
    (
        $(
            $name:literal => $builtin:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, Builtin)] = &[
            $(
                ($name, $builtin),
            )*
        ];
    };
}

builtins! {
    "i"        => Builtin::Constant(Constant::I),
    "pi"       => Builtin::Constant(Constant::Pi),
    "e"        => Builtin::Constant(Constant::E),
    "log"      => Builtin::Function(Function::Log),
    "log2"     => Builtin::Function(Function::Log2),
    "log10"    => Builtin::Function(Function::Log10),
    "exp"      => Builtin::Function(Function::Exp),
    "sqrt"     => Builtin::Function(Function::Sqrt),
    "sin"      => Builtin::Function(Function::Sin),
    "cos"      => Builtin::Function(Function::Cos),
    "tan"      => Builtin::Function(Function::Tan),
    "asin"     => Builtin::Function(Function::Asin),
    "acos"     => Builtin::Function(Function::Acos),
    "atan"     => Builtin::Function(Function::Atan),
    "sinh"     => Builtin::Function(Function::Sinh),
    "cosh"     => Builtin::Function(Function::Cosh),
    "tanh"     => Builtin::Function(Function::Tanh),
    "asinh"    => Builtin::Function(Function::Asinh),
    "acosh"    => Builtin::Function(Function::Acosh),
    "atanh"    => Builtin::Function(Function::Atanh),
    "real"     => Builtin::Function(Function::Real),
    "imag"     => Builtin::Function(Function::Imag),
    "abs"      => Builtin::Function(Function::Abs),
    "phase"    => Builtin::Function(Function::Phase),
    "conj"     => Builtin::Function(Function::Conj),
    "degToRad" => Builtin::Function(Function::DegToRad),
    "radToDeg" => Builtin::Function(Function::RadToDeg),
    "floor"    => Builtin::Function(Function::Floor),
    "ceil"     => Builtin::Function(Function::Ceil),
    "round"    => Builtin::Function(Function::Round),
    "trunc"    => Builtin::Function(Function::Trunc),
}

impl Builtin {
    /// Resolves a name, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use toycalc::interpreter::evaluator::function::core::{Builtin, Constant, Function};
    ///
    /// assert_eq!(Builtin::lookup("PI"), Some(Builtin::Constant(Constant::Pi)));
    /// assert_eq!(Builtin::lookup("degtorad"), Some(Builtin::Function(Function::DegToRad)));
    /// assert_eq!(Builtin::lookup("foo"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        BUILTIN_TABLE.iter()
                     .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
                     .map(|(_, builtin)| *builtin)
    }
}

impl Evaluator {
    /// Executes an identifier from the postfix queue.
    ///
    /// Constants push their value. Functions pop one operand and push their
    /// result.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the name is not registered.
    /// - `InsufficientOperands` if a function finds the stack empty.
    pub fn eval_identifier(&mut self, token: &Token) -> EvalResult<()> {
        let builtin =
            Builtin::lookup(&token.text).ok_or_else(|| EvalError::UnknownIdentifier {
                                             name:     token.text.clone(),
                                             position: token.position,
                                         })?;

        let value = match builtin {
            Builtin::Constant(constant) => constant.value(),
            Builtin::Function(function) => {
                let argument: Complex64 = self.pop(token)?;
                let result = function.apply(argument);
                trace!(name = %token.text, %argument, %result, "applied function");
                result
            },
        };

        self.push(value);
        Ok(())
    }
}
