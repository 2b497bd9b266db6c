//! Error types for Moro Games core operations.
//!
//! Page-load failures are not modelled here: they travel as a plain message
//! inside [`crate::LoadState::Failure`] (see [`crate::LoadFailure`]). This
//! module covers the shell itself: configuration, file system access and
//! serialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// File system errors raised while reading or writing shell files.
#[derive(Debug, Error)]
pub enum FileSystemError {
    /// A file could not be read.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },

    /// A file could not be written.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },

    /// A directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirFailed {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },
}

/// Errors that can occur in Moro Games core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration value is missing or out of range.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The configured start URL cannot be loaded by the web view.
    #[error("Invalid start URL '{url}': {reason}")]
    InvalidStartUrl {
        /// The rejected URL as written in the config.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// File system operation failed.
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse error category, used by the IPC layer so the frontend can branch
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Invalid or unreadable configuration.
    Configuration,
    /// File system or IO failure.
    FileSystem,
    /// JSON encoding or decoding failure.
    Serialization,
}

impl Error {
    /// Get the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) | Self::InvalidStartUrl { .. } => ErrorKind::Configuration,
            Self::FileSystem(_) | Self::Io(_) => ErrorKind::FileSystem,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}
