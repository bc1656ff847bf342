/// Core evaluation logic and the operand stack.
///
/// Contains the postfix stack machine, its result type and the final stack
/// check.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles `+`, `-`, `*`, `/`, `^` and the Gaussian-integer `%`.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements prefix negation with signed-zero normalisation.
pub mod unary;

/// Function evaluation.
///
/// Holds the constant and function registry shared with the parser, and the
/// implementations behind it.
pub mod function;
