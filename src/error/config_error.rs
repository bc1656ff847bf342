use thiserror::Error;

use crate::config::MAX_PRECISION;

/// Errors raised while building or changing a display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The precision is outside `0..=MAX_PRECISION`.
    #[error("precision must be an integer between 0 and {max}, but found '{0}'", max = MAX_PRECISION)]
    PrecisionOutOfRange(String),
    /// The format mode is not one of `auto`, `fixed` or `sci`.
    #[error("unknown format mode '{0}'; use 'auto', 'fixed N' or 'sci N'")]
    UnknownMode(String),
    /// A `set` command was missing a required argument.
    #[error("usage: {0}")]
    Usage(&'static str),
}
