//! Page-load state as observed by the entry screen.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The discrete status of the page loader at a point in time.
///
/// Owned by the loader; the UI only ever observes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A navigation is in flight.
    Progressing {
        /// Fraction loaded, nominally in `[0, 1]`.
        percent: f64,
    },
    /// The page finished loading.
    Finished,
    /// The load failed; the message is shown to the user verbatim.
    Failure {
        /// Human-readable failure description.
        message: String,
    },
    /// The device has no network connection.
    NoConnection,
}

impl LoadState {
    /// Shorthand for `Progressing { percent }`.
    #[must_use]
    pub const fn progressing(percent: f64) -> Self {
        Self::Progressing { percent }
    }

    /// Shorthand for `Failure { message }`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether the page is fully loaded.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Whether a navigation is in flight.
    #[must_use]
    pub const fn is_progressing(&self) -> bool {
        matches!(self, Self::Progressing { .. })
    }

    /// The progress fraction, if a navigation is in flight.
    #[must_use]
    pub const fn percent(&self) -> Option<f64> {
        match self {
            Self::Progressing { percent } => Some(*percent),
            _ => None,
        }
    }

    /// Stable variant name, used in log lines and the IPC tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Progressing { .. } => "progressing",
            Self::Finished => "finished",
            Self::Failure { .. } => "failure",
            Self::NoConnection => "no_connection",
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Progressing { percent } => write!(f, "progressing({:.0}%)", percent * 100.0),
            Self::Finished => write!(f, "finished"),
            Self::Failure { message } => write!(f, "failure({message})"),
            Self::NoConnection => write!(f, "no_connection"),
        }
    }
}

/// A page-load failure reported by the loader.
///
/// Network, content and timeout failures all collapse into one message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadFailure {
    /// Human-readable failure description.
    pub message: String,
}

impl LoadFailure {
    /// Create a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<LoadFailure> for LoadState {
    fn from(failure: LoadFailure) -> Self {
        Self::Failure {
            message: failure.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn test_percent_only_while_progressing() {
        assert_eq!(LoadState::progressing(0.25).percent(), Some(0.25));
        assert_eq!(LoadState::Idle.percent(), None);
        assert_eq!(LoadState::Finished.percent(), None);
        assert_eq!(LoadState::NoConnection.percent(), None);
    }

    #[test]
    fn test_failure_carries_message_verbatim() {
        let state: LoadState = LoadFailure::new("The network connection was lost.").into();
        assert_eq!(
            state,
            LoadState::Failure {
                message: "The network connection was lost.".to_string()
            }
        );
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = serde_json::to_value(LoadState::progressing(0.4)).expect("serialize");
        assert_eq!(json, serde_json::json!({"state": "progressing", "percent": 0.4}));

        let json = serde_json::to_value(LoadState::NoConnection).expect("serialize");
        assert_eq!(json, serde_json::json!({"state": "no_connection"}));

        let parsed: LoadState =
            serde_json::from_str(r#"{"state":"failure","message":"timeout"}"#).expect("deserialize");
        assert_eq!(parsed, LoadState::failure("timeout"));
    }

    #[test]
    fn test_display_for_logs() {
        assert_eq!(LoadState::progressing(0.5).to_string(), "progressing(50%)");
        assert_eq!(LoadState::failure("boom").to_string(), "failure(boom)");
        assert_eq!(LoadState::NoConnection.name(), "no_connection");
    }
}
