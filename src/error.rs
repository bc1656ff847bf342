/// Evaluation errors.
///
/// Defines every failure that can end an evaluation: illegal characters found
/// while lexing, malformed syntax found while linearising the token stream,
/// and stack or arithmetic faults found while executing the postfix queue.
pub mod eval_error;
/// Display configuration errors.
///
/// Raised when a precision or format mode supplied by a caller is outside the
/// supported range.
pub mod config_error;

pub use config_error::ConfigError;
pub use eval_error::{ErrorLayer, EvalError};
