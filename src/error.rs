//! Error types for quotegen

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a quote that fails the non-empty field rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("quote text must not be empty")]
    EmptyText,

    #[error("quote category must not be empty")]
    EmptyCategory,
}

/// Failure while importing a JSON quote document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid JSON format: expected an array of quotes")]
    InvalidFormat,

    #[error("Invalid JSON: {0}")]
    ParseFailure(String),

    #[error("Invalid quote at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Failure of a single remote endpoint during sync
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl FetchError {
    /// Endpoint the failure belongs to
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Request { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Main error type for quotegen
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Not a quotegen directory: {0}")]
    NotQuoteDirectory(PathBuf),

    #[error("Invalid quote: {0}")]
    Validation(#[from] ValidationError),

    #[error("Error importing quotes: {0}")]
    Import(#[from] ImportError),

    #[error("Stored value for '{key}' is corrupt: {message}")]
    StorageCorrupt { key: String, message: String },

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuoteError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuoteError::NotQuoteDirectory(_) => 2,
            QuoteError::Validation(_) => 3,
            QuoteError::Import(_) => 4,
            QuoteError::StorageCorrupt { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuoteError::NotQuoteDirectory(path) => {
                format!(
                    "Not a quotegen directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quotegen init' in this directory to create a quote book\n\
                    • Navigate to an existing quotegen directory\n\
                    • Set QUOTEGEN_ROOT environment variable to your quote book path",
                    path.display()
                )
            }
            QuoteError::Validation(_) => {
                format!(
                    "{}\n\n\
                    Please enter both quote text and category.\n\
                    Example: quotegen add \"Stay hungry, stay foolish.\" Inspiration",
                    self
                )
            }
            QuoteError::Import(ImportError::InvalidFormat) => {
                format!(
                    "{}\n\n\
                    The file must contain a JSON array, for example:\n\
                    [{{\"text\": \"Less is more.\", \"category\": \"Design\"}}]",
                    self
                )
            }
            QuoteError::StorageCorrupt { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Restore the file from a backup or an earlier export\n\
                    • Run 'quotegen reset' to discard stored quotes and reseed the defaults",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;
