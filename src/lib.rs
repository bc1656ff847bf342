//! # toycalc
//!
//! toycalc is a complex-number expression calculator written in Rust.
//! It tokenizes, linearizes and evaluates arithmetic expressions such as
//! `2(3+4i)^2 % 5` or `exp(i*pi)`, and renders the result under a
//! configurable display precision and format mode.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

pub use num_complex::Complex64;
use tracing::debug;

use crate::{
    config::DisplayConfig,
    error::EvalError,
    interpreter::{evaluator::core::evaluate_rpn, formatter, lexer::lex, parser::core::parse_to_rpn},
};

/// Display settings shared by the formatter and its callers.
///
/// This module declares the format mode and precision a caller threads
/// through every formatting call. There is no process-wide configuration.
pub mod config;
/// Provides unified error types for evaluation and configuration.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating an expression, and those raised when a display setting is
/// rejected. Errors carry human-readable messages and, where applicable, the
/// byte position of the offending input.
///
/// # Responsibilities
/// - Defines one error taxonomy across the lexical, syntactic and semantic
///   layers.
/// - Attaches positions for user feedback.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, parsing, evaluation and formatting.
/// Data flows strictly from string to tokens to a postfix queue to a complex
/// value and back to a string.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and formatter.
/// - Exposes each stage for callers that need intermediate results.
pub mod interpreter;
/// Line-oriented command handling for interactive use.
///
/// Interprets `set format`, `set precision`, `exit` and `quit` and passes
/// everything else to the calculator, keeping the display settings it owns.
pub mod shell;
/// General numeric helpers.
pub mod util;

/// Evaluates an expression to its unformatted complex value.
///
/// Runs the lexer, the parser and the postfix evaluator in order, stopping at
/// the first error.
///
/// # Errors
/// Returns the first [`EvalError`] raised by any stage.
///
/// # Examples
/// ```
/// use toycalc::{Complex64, calculate};
///
/// assert_eq!(calculate("2^3^2").unwrap(), Complex64::new(512.0, 0.0));
/// assert_eq!(calculate("3i").unwrap(), Complex64::new(0.0, 3.0));
/// assert!(calculate("5 % 0").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<Complex64, EvalError> {
    let result = lex(expression).and_then(|tokens| parse_to_rpn(&tokens))
                                .and_then(|rpn| evaluate_rpn(&rpn));
    if let Err(error) = &result {
        debug!(expression, %error, layer = ?error.layer(), "evaluation failed");
    }
    result
}

/// Evaluates an expression and formats the result with `config`.
///
/// # Errors
/// Returns the first [`EvalError`] raised while evaluating. Formatting itself
/// cannot fail.
///
/// # Examples
/// ```
/// use toycalc::{
///     config::{DisplayConfig, FormatMode},
///     evaluate_with,
/// };
///
/// let config = DisplayConfig::new(FormatMode::Fixed, 3).unwrap();
/// assert_eq!(evaluate_with("1/4", &config).unwrap(), "0.250");
///
/// let config = DisplayConfig::new(FormatMode::Sci, 2).unwrap();
/// assert_eq!(evaluate_with("1500", &config).unwrap(), "1.50e+03");
/// ```
pub fn evaluate_with(expression: &str, config: &DisplayConfig) -> Result<String, EvalError> {
    let value = calculate(expression)?;
    Ok(formatter::format(value, config))
}

/// Evaluates an expression and formats the result with the default display
/// settings (`auto` mode, 9 digits).
///
/// # Errors
/// Returns the first [`EvalError`] raised while evaluating.
///
/// # Examples
/// ```
/// use toycalc::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), "7");
/// assert_eq!(evaluate("(-4)^0.5").unwrap(), "2i");
/// assert_eq!(evaluate("exp(i*pi)").unwrap(), "-1");
///
/// let error = evaluate("(1+2").unwrap_err();
/// assert!(error.to_string().contains("mismatched"));
/// ```
pub fn evaluate(expression: &str) -> Result<String, EvalError> {
    evaluate_with(expression, &DisplayConfig::default())
}
