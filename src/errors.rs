/*!
 * Error types for the srtsync application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Edit operations on a subtitle file never fail: invalid edits are silent no-ops.
 * Only I/O-bound work (parsing, translating, saving, loading) produces these errors.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur while parsing a subtitle file
#[derive(Error, Debug, PartialEq)]
pub enum SubtitleError {
    /// The input had no subtitle block at all
    #[error("No subtitle blocks found in input")]
    Empty,

    /// A block is missing its order or timemark line
    #[error("Malformed subtitle block {block}: {reason}")]
    MalformedBlock {
        /// Zero-based position of the block in the file
        block: usize,
        /// What is wrong with it
        reason: String,
    },
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider answered, but with no text
    #[error("Translation provider returned an empty response")]
    EmptyResponse,

    /// No original text loaded
    #[error("Nothing to translate: no original lines are loaded")]
    NothingToTranslate,

    /// The service could not be built from configuration
    #[error("Invalid translation configuration: {0}")]
    Configuration(String),
}

/// Errors raised while saving or loading a subtitle state directory
#[derive(Error, Debug)]
pub enum StateError {
    /// Reading or writing a state file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A state file could not be (de)serialized
    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The files were readable but describe an invalid subtitle file
    #[error("Corrupt state: {0}")]
    Corrupt(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from subtitle processing
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from state persistence
    #[error("State error: {0}")]
    State(#[from] StateError),

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
