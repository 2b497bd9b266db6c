//! Error handling utilities for Tauri commands.

use moro_core::{Error, ErrorKind};
use tracing::error;

/// Structured error response for Tauri IPC.
///
/// Includes both the error message and the error kind for frontend handling.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
    /// Error category for programmatic handling.
    pub kind: ErrorKind,
}

impl From<&Error> for ErrorResponse {
    fn from(e: &Error) -> Self {
        Self {
            message: e.to_string(),
            kind: e.kind(),
        }
    }
}

/// Convert our error type to a string for Tauri.
///
/// The returned string is JSON-encoded `ErrorResponse` for structured error handling
/// in the frontend. Falls back to plain error message if serialization fails.
pub fn map_err(e: Error) -> String {
    error!("Command error [kind={:?}]: {}", e.kind(), e);

    let response = ErrorResponse::from(&e);
    serde_json::to_string(&response).unwrap_or_else(|_| e.to_string())
}
