//! Error types for bem-suggest

use std::process::ExitCode;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BemError>;

/// Errors that can end an analysis or a CLI invocation
#[derive(Error, Debug)]
pub enum BemError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Parse failure: {message}")]
    ParseFailure { message: String },

    #[error("Offset {offset} is past the end of the source ({len} bytes)")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Invalid identifier: {identifier:?}")]
    InvalidIdentifier { identifier: String },

    #[error("No stylesheet module import found; pass --identifier to add one")]
    IdentifierRequired,

    #[error("Cancelled")]
    Cancelled,

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl BemError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Cancelled => ExitCode::SUCCESS,
            Self::ParseFailure { .. } => ExitCode::from(2),
            Self::UnsupportedLanguage { .. } => ExitCode::from(3),
            Self::FileNotFound { .. } => ExitCode::from(4),
            _ => ExitCode::FAILURE,
        }
    }

    /// Whether this error is a user cancellation that should end silently
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
