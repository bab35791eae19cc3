//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be parsed or holds invalid values
    ConfigError(String),
    /// JSON output was requested without a destination file
    MissingDestination,
    /// An option that does not apply to the chosen output format
    InvalidOption(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingDestination => write!(
                f,
                "No JSON output file: pass --output, set output.json_path in the config file, or run interactively"
            ),
            CliError::InvalidOption(msg) => write!(f, "Invalid option: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
