use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::error::ConfigError;

/// Largest supported display precision.
pub const MAX_PRECISION: u8 = 20;
/// Display precision used when none is configured.
pub const DEFAULT_PRECISION: u8 = 9;

/// How numbers are rendered by the formatter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatMode {
    /// Bare integers where possible, otherwise a concise general form.
    #[default]
    Auto,
    /// Fixed-point with `precision` digits after the decimal point.
    Fixed,
    /// Scientific notation with `precision` mantissa digits.
    Sci,
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed => write!(f, "fixed"),
            Self::Sci => write!(f, "sci"),
        }
    }
}

impl FromStr for FormatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "fixed" => Ok(Self::Fixed),
            "sci" => Ok(Self::Sci),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Display settings read by the formatter.
///
/// The value is owned by whoever drives evaluation (the shell, a test, a
/// server handler) and passed explicitly into every formatting call, so
/// differently configured evaluations never interfere with each other.
///
/// # Example
/// ```
/// use toycalc::config::{DisplayConfig, FormatMode};
///
/// let config = DisplayConfig::new(FormatMode::Fixed, 4).unwrap();
/// assert_eq!(config.precision(), 4);
///
/// assert!(DisplayConfig::new(FormatMode::Sci, 21).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    mode:      FormatMode,
    precision: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mode:      FormatMode::Auto,
               precision: DEFAULT_PRECISION, }
    }
}

impl DisplayConfig {
    /// Builds a configuration, rejecting precisions above [`MAX_PRECISION`].
    pub fn new(mode: FormatMode, precision: u8) -> Result<Self, ConfigError> {
        check_precision(precision)?;
        Ok(Self { mode, precision })
    }

    /// The current format mode.
    #[must_use]
    pub const fn mode(&self) -> FormatMode {
        self.mode
    }

    /// The current number of decimal digits.
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    /// Changes the format mode, keeping the precision.
    pub const fn set_mode(&mut self, mode: FormatMode) {
        self.mode = mode;
    }

    /// Changes the precision.
    pub fn set_precision(&mut self, precision: u8) -> Result<(), ConfigError> {
        check_precision(precision)?;
        self.precision = precision;
        Ok(())
    }
}

/// Parses a precision argument such as the `N` in `set precision N`.
///
/// # Example
/// ```
/// use toycalc::config::parse_precision;
///
/// assert_eq!(parse_precision("12").unwrap(), 12);
/// assert!(parse_precision("-1").is_err());
/// assert!(parse_precision("99").is_err());
/// ```
pub fn parse_precision(text: &str) -> Result<u8, ConfigError> {
    let precision = text.parse::<u8>()
                        .map_err(|_| ConfigError::PrecisionOutOfRange(text.to_string()))?;
    check_precision(precision)?;
    Ok(precision)
}

fn check_precision(precision: u8) -> Result<(), ConfigError> {
    if precision > MAX_PRECISION {
        return Err(ConfigError::PrecisionOutOfRange(precision.to_string()));
    }
    Ok(())
}
