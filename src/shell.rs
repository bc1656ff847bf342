use tracing::debug;

use crate::{
    config::{DisplayConfig, FormatMode, parse_precision},
    error::ConfigError,
    evaluate_with,
};

const SET_USAGE: &str = "set format <auto|fixed N|sci N> | set precision N";
const FORMAT_USAGE: &str = "set format <auto|fixed N|sci N>";
const PRECISION_USAGE: &str = "set precision N";

/// One line of shell input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `exit` or `quit`.
    Exit,
    /// `set format MODE [N]`.
    SetFormat {
        /// The new format mode.
        mode:      FormatMode,
        /// The new precision, when one was given.
        precision: Option<u8>,
    },
    /// `set precision N`.
    SetPrecision(u8),
    /// Anything else: an expression to evaluate.
    Evaluate(String),
    /// A blank line.
    Empty,
}

impl Command {
    /// Interprets one line of input.
    ///
    /// Keywords are matched case-insensitively. A line that does not start
    /// with `set`, `exit` or `quit` is taken as an expression.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for a malformed `set` command or an
    /// out-of-range precision.
    ///
    /// # Example
    /// ```
    /// use toycalc::{config::FormatMode, shell::Command};
    ///
    /// assert_eq!(Command::parse("QUIT").unwrap(), Command::Exit);
    /// assert_eq!(Command::parse("set format fixed 4").unwrap(),
    ///            Command::SetFormat { mode:      FormatMode::Fixed,
    ///                                 precision: Some(4), });
    /// assert_eq!(Command::parse(" 1 + 2 ").unwrap(), Command::Evaluate("1 + 2".to_string()));
    /// assert!(Command::parse("set precision 42").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, ConfigError> {
        let line = line.trim();
        let words: Vec<String> = line.split_whitespace().map(str::to_ascii_lowercase).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            [] => Ok(Self::Empty),
            ["exit" | "quit"] => Ok(Self::Exit),
            ["set", "format", mode, rest @ ..] => {
                let mode = mode.parse::<FormatMode>()?;
                let precision = match (mode, rest) {
                    (FormatMode::Auto, []) => None,
                    (FormatMode::Fixed | FormatMode::Sci, [precision]) => {
                        Some(parse_precision(precision)?)
                    },
                    _ => return Err(ConfigError::Usage(FORMAT_USAGE)),
                };
                Ok(Self::SetFormat { mode, precision })
            },
            ["set", "format"] => Err(ConfigError::Usage(FORMAT_USAGE)),
            ["set", "precision", precision] => Ok(Self::SetPrecision(parse_precision(precision)?)),
            ["set", "precision", ..] => Err(ConfigError::Usage(PRECISION_USAGE)),
            ["set", ..] => Err(ConfigError::Usage(SET_USAGE)),
            _ => Ok(Self::Evaluate(line.to_string())),
        }
    }

    /// Applies a `set` command to `config`. Other commands leave it
    /// untouched.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the new precision is out of range.
    pub fn apply(&self, config: &mut DisplayConfig) -> Result<(), ConfigError> {
        match self {
            Self::SetFormat { mode, precision } => {
                if let Some(precision) = precision {
                    config.set_precision(*precision)?;
                }
                config.set_mode(*mode);
            },
            Self::SetPrecision(precision) => config.set_precision(*precision)?,
            Self::Exit | Self::Evaluate(_) | Self::Empty => {},
        }
        Ok(())
    }
}

/// What the shell wants printed after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Stop reading input.
    Quit,
    /// Nothing to print.
    Silent,
    /// A result for stdout.
    Output(String),
    /// An error message for stderr.
    Failure(String),
}

/// Interactive session state: the display settings the user has chosen.
///
/// # Example
/// ```
/// use toycalc::shell::{Reply, Shell};
///
/// let mut shell = Shell::default();
/// assert_eq!(shell.execute("1/8"), Reply::Output("0.125".to_string()));
/// assert_eq!(shell.execute("set format fixed 2"),
///            Reply::Output("Output format set to: fixed, 2 digits precision".to_string()));
/// assert_eq!(shell.execute("1/8"), Reply::Output("0.13".to_string()));
/// assert_eq!(shell.execute("exit"), Reply::Quit);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Shell {
    config: DisplayConfig,
}

impl Shell {
    /// Starts a session with the given display settings.
    #[must_use]
    pub const fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// The session's current display settings.
    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Handles one line of input.
    pub fn execute(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(error) => return Reply::Failure(format!("Error: {error}")),
        };

        match command {
            Command::Exit => Reply::Quit,
            Command::Empty => Reply::Silent,
            Command::Evaluate(expression) => match evaluate_with(&expression, &self.config) {
                Ok(result) => Reply::Output(result),
                Err(error) => Reply::Failure(format!("Error: {error}")),
            },
            command => match command.apply(&mut self.config) {
                Ok(()) => {
                    debug!(mode = %self.config.mode(),
                           precision = self.config.precision(),
                           "display settings changed");
                    Reply::Output(self.confirmation(&command))
                },
                Err(error) => Reply::Failure(format!("Error: {error}")),
            },
        }
    }

    /// Describes the settings a successful `set` command left in place.
    fn confirmation(&self, command: &Command) -> String {
        let precision = self.config.precision();
        match (command, self.config.mode()) {
            (Command::SetPrecision(_), _) => {
                format!("Display precision set to: {precision} digits")
            },
            (_, FormatMode::Auto) => "Output format set to: auto".to_string(),
            (_, mode) => format!("Output format set to: {mode}, {precision} digits precision"),
        }
    }
}
