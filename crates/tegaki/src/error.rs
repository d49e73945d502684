//! Error types for tegaki.
//!
//! This module defines all error types used throughout the tegaki crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tegaki operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// Failed to open or create the registry database.
    #[error("failed to open registry at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// Failed to run database migrations.
    #[error("database migration failed: {message}")]
    DatabaseMigration {
        /// Description of what went wrong.
        message: String,
    },

    /// A symbol outside the seeded alphabet was passed to a registry update.
    #[error("unknown symbol '{symbol}': not part of the seeded alphabet")]
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Output Errors ===
    /// PNG encoding of the capture surface failed.
    #[error("failed to encode PNG: {0}")]
    ImageEncode(#[from] png::EncodingError),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tegaki operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown-symbol error.
    #[must_use]
    pub fn unknown_symbol(symbol: char) -> Self {
        Self::UnknownSymbol { symbol }
    }

    /// Check if this error is an unknown-symbol error.
    #[must_use]
    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, Self::UnknownSymbol { .. })
    }
}
