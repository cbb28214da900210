//! Errors reported by the command line front end.

use std::path::PathBuf;

/// Result type alias for command execution.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end a command run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Converter error.
    #[error(transparent)]
    Style(#[from] tincture_style::Error),

    /// The configuration file could not be read or parsed.
    #[error("Invalid configuration '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// Writing to standard output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
