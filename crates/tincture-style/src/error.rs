//! Error types for the token converters.

use std::path::PathBuf;

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting or bundling themes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color value did not match `hsl(<h> <s>% <l>%)`.
    #[error("Invalid HSL: {value}")]
    InvalidHsl { value: String },

    /// A required command-line input was not supplied.
    #[error("Usage: {usage}")]
    MissingInput { usage: String },

    /// File I/O error.
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A preset source file could not be read or written as TOML.
    #[error("Invalid preset source '{path}': {message}")]
    PresetSource { path: PathBuf, message: String },

    /// A requested theme id is not in the catalogue.
    #[error("Unknown theme '{id}'")]
    UnknownTheme { id: String },

    /// A stylesheet imports itself, directly or transitively.
    #[error("Import cycle while bundling '{path}'")]
    ImportCycle { path: PathBuf },

    /// The external token generator exited unsuccessfully.
    #[error("Generator `{command}` failed: {status}")]
    Generator { command: String, status: String },
}

impl Error {
    /// Create an HSL parse error.
    pub fn invalid_hsl(value: impl Into<String>) -> Self {
        Self::InvalidHsl {
            value: value.into(),
        }
    }

    /// Create a missing-input error carrying the usage line.
    pub fn missing_input(usage: impl Into<String>) -> Self {
        Self::MissingInput {
            usage: usage.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a preset source error.
    pub fn preset_source(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::PresetSource {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an unknown theme error.
    pub fn unknown_theme(id: impl Into<String>) -> Self {
        Self::UnknownTheme { id: id.into() }
    }

    /// Create an import cycle error.
    pub fn import_cycle(path: impl Into<PathBuf>) -> Self {
        Self::ImportCycle { path: path.into() }
    }

    /// Create a generator failure from a spawn error or exit status.
    pub fn generator(command: &[String], status: impl ToString) -> Self {
        Self::Generator {
            command: command.join(" "),
            status: status.to_string(),
        }
    }
}
