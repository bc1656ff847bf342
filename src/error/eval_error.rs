use thiserror::Error;

/// The pipeline stage that raised an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLayer {
    /// Raised by the lexer.
    Lexical,
    /// Raised by the parser.
    Syntactic,
    /// Raised by the postfix evaluator.
    Semantic,
}

/// Represents all errors that can occur while evaluating an expression.
///
/// Every error is terminal for the evaluation that raised it. Positions are
/// byte offsets into the original expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A character that starts no token.
    #[error("illegal character '{character}' found at position {position}")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },

    /// The input contained no tokens besides end of input.
    #[error("no expression provided to parse")]
    EmptyExpression,
    /// A number appeared where an operator was expected.
    #[error("unexpected number '{literal}' at position {position}; an operator may be missing")]
    UnexpectedNumber {
        /// The number literal.
        literal:  String,
        /// Where it was found.
        position: usize,
    },
    /// A binary operator appeared where an operand was expected.
    #[error("unexpected operator '{operator}' at position {position}; operand expected")]
    UnexpectedOperator {
        /// The operator symbol.
        operator: String,
        /// Where it was found.
        position: usize,
    },
    /// A comma appeared where an operand was expected.
    #[error("unexpected comma at position {position}; operand expected before comma")]
    UnexpectedComma {
        /// Where it was found.
        position: usize,
    },
    /// A comma appeared outside any grouping.
    #[error("mismatched comma or parentheses at position {position}")]
    MismatchedComma {
        /// Where it was found.
        position: usize,
    },
    /// An opening delimiter directly follows an operand.
    #[error("unexpected delimiter '{delimiter}' at position {position}; an operator may be missing")]
    UnexpectedDelimiter {
        /// The delimiter.
        delimiter: String,
        /// Where it was found.
        position:  usize,
    },
    /// A closing delimiter with nothing to close over, as in `()` or `log()`.
    #[error("missing operand before closing delimiter '{delimiter}' at position {position}")]
    MissingOperand {
        /// The closing delimiter.
        delimiter: String,
        /// Where it was found.
        position:  usize,
    },
    /// A closing delimiter without an opener of the same kind.
    #[error("mismatched parentheses/brackets/braces for '{delimiter}' at position {position}")]
    MismatchedDelimiter {
        /// The closing delimiter.
        delimiter: String,
        /// Where it was found.
        position:  usize,
    },
    /// An opening delimiter that is never closed.
    #[error("mismatched parentheses/brackets/braces: unclosed '{delimiter}' at position {position}")]
    UnclosedDelimiter {
        /// The opening delimiter.
        delimiter: String,
        /// Where it was found.
        position:  usize,
    },
    /// An identifier that names neither a constant nor a function.
    #[error("unknown identifier or function '{name}' at position {position}")]
    UnknownIdentifier {
        /// The identifier.
        name:     String,
        /// Where it was found.
        position: usize,
    },
    /// A function name that is not followed by an opening delimiter.
    #[error("missing argument for function '{name}' at position {position}; expected an opening delimiter")]
    MissingArgument {
        /// The function name.
        name:     String,
        /// Where it was found.
        position: usize,
    },
    /// A token the parser has no rule for.
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// Where it was found.
        position: usize,
    },

    /// A number literal that does not parse as a float.
    #[error("invalid number format '{literal}' at position {position}")]
    InvalidNumber {
        /// The number literal.
        literal:  String,
        /// Where it was found.
        position: usize,
    },
    /// An operator or function found too few values on the stack.
    #[error("insufficient operands for '{token}' at position {position}")]
    InsufficientOperands {
        /// The operator or function name.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// The right operand of `%` was exactly zero.
    #[error("divisor is zero for modulo operator at position {position}")]
    ModuloByZero {
        /// Position of the `%` operator.
        position: usize,
    },
    /// The postfix queue left nothing on the stack.
    #[error("invalid expression: no result on stack")]
    NoResult,
    /// The postfix queue left more than one value on the stack.
    #[error("invalid expression: {count} values left on stack, expected 1")]
    ValuesLeftOnStack {
        /// How many values remained.
        count: usize,
    },
}

impl EvalError {
    /// Returns the byte offset in the expression the error refers to, if any.
    ///
    /// # Example
    /// ```
    /// use toycalc::error::EvalError;
    ///
    /// assert_eq!(EvalError::ModuloByZero { position: 2 }.position(), Some(2));
    /// assert_eq!(EvalError::NoResult.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::IllegalCharacter { position, .. }
            | Self::UnexpectedNumber { position, .. }
            | Self::UnexpectedOperator { position, .. }
            | Self::UnexpectedComma { position }
            | Self::MismatchedComma { position }
            | Self::UnexpectedDelimiter { position, .. }
            | Self::MissingOperand { position, .. }
            | Self::MismatchedDelimiter { position, .. }
            | Self::UnclosedDelimiter { position, .. }
            | Self::UnknownIdentifier { position, .. }
            | Self::MissingArgument { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::InsufficientOperands { position, .. }
            | Self::ModuloByZero { position } => Some(*position),
            Self::EmptyExpression | Self::NoResult | Self::ValuesLeftOnStack { .. } => None,
        }
    }

    /// Returns the pipeline stage that raised the error.
    ///
    /// An unknown identifier is syntactic when the parser rejects it and
    /// semantic only if a hand-built postfix queue reaches the evaluator with
    /// it, so it is reported as syntactic here.
    #[must_use]
    pub const fn layer(&self) -> ErrorLayer {
        match self {
            Self::IllegalCharacter { .. } => ErrorLayer::Lexical,
            Self::InvalidNumber { .. }
            | Self::InsufficientOperands { .. }
            | Self::ModuloByZero { .. }
            | Self::NoResult
            | Self::ValuesLeftOnStack { .. } => ErrorLayer::Semantic,
            _ => ErrorLayer::Syntactic,
        }
    }
}
