/*!
 * Error types for the ytwisdom application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to an external collaborator process
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The collaborator binary could not be started
    #[error("Failed to spawn '{command}': {message}")]
    SpawnFailed {
        /// The command that was attempted
        command: String,
        /// Underlying OS error message
        message: String,
    },

    /// The collaborator exited with a non-zero status
    #[error("'{command}' exited abnormally ({status}): {stderr}")]
    ExitFailure {
        /// The command that was run
        command: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The collaborator produced output this application could not parse
    #[error("Failed to parse output of '{command}': {message}")]
    ParseError {
        /// The command whose output was parsed
        command: String,
        /// Parse error detail
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// The provider returned no usable video title
    #[error("Provider returned no usable video title")]
    MissingTitle,

    /// No caption file was located for the requested language
    #[error("No caption file found for language '{0}'")]
    NoCaptionFound(String),

    /// Error from an external collaborator
    #[error("Collaborator error: {0}")]
    Provider(#[from] ProviderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
