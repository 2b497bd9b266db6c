//! Overlay selection: which layer sits above the web content for a given
//! [`LoadState`], and how strongly the content underneath is dimmed.
//!
//! Both outputs are pure functions of the current state. Every match here is
//! exhaustive so that a new `LoadState` variant fails to compile instead of
//! silently falling through to "no overlay".

use serde::{Deserialize, Serialize};

use crate::load_state::LoadState;

/// Content opacity once the page has finished loading.
pub const CONTENT_OPACITY_FULL: f64 = 1.0;

/// Content opacity while loading, failed or offline.
pub const CONTENT_OPACITY_DIMMED: f64 = 0.5;

/// Text of the offline indicator.
pub const OFFLINE_TEXT: &str = "No connection";

/// Text of the error indicator for a loader message.
#[must_use]
pub fn error_text(message: &str) -> String {
    format!("Error: {message}")
}

/// The overlay composited above the web content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum OverlayKind {
    /// No overlay; the content is shown as is.
    None,
    /// Progress indicator at the given fraction.
    Progress(f64),
    /// Error indicator with the loader's message.
    Error(String),
    /// Static "no connection" indicator.
    Offline,
}

/// Payload-free discriminant of [`OverlayKind`].
///
/// The UI switches mounted components on this, so a progress change does not
/// remount (and restart the animations of) the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlaySlot {
    /// Nothing mounted.
    None,
    /// Progress indicator mounted.
    Progress,
    /// Error indicator mounted.
    Error,
    /// Offline indicator mounted.
    Offline,
}

impl OverlayKind {
    /// The slot this overlay occupies.
    #[must_use]
    pub const fn slot(&self) -> OverlaySlot {
        match self {
            Self::None => OverlaySlot::None,
            Self::Progress(_) => OverlaySlot::Progress,
            Self::Error(_) => OverlaySlot::Error,
            Self::Offline => OverlaySlot::Offline,
        }
    }

    /// Progress fraction of a progress overlay.
    #[must_use]
    pub const fn progress(&self) -> Option<f64> {
        match self {
            Self::Progress(percent) => Some(*percent),
            Self::None | Self::Error(_) | Self::Offline => None,
        }
    }

    /// Loader message of an error overlay.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            Self::None | Self::Progress(_) | Self::Offline => None,
        }
    }

    /// Whether anything is drawn above the content.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Pick the overlay for a load state.
#[must_use]
pub fn select_overlay(state: &LoadState) -> OverlayKind {
    match state {
        LoadState::Idle => OverlayKind::None,
        LoadState::Progressing { percent } => OverlayKind::Progress(*percent),
        LoadState::Finished => OverlayKind::None,
        LoadState::Failure { message } => OverlayKind::Error(message.clone()),
        LoadState::NoConnection => OverlayKind::Offline,
    }
}

/// Opacity of the web content view for a load state.
#[must_use]
pub const fn content_opacity(state: &LoadState) -> f64 {
    match state {
        LoadState::Finished => CONTENT_OPACITY_FULL,
        LoadState::Idle
        | LoadState::Progressing { .. }
        | LoadState::Failure { .. }
        | LoadState::NoConnection => CONTENT_OPACITY_DIMMED,
    }
}

/// Everything the entry screen needs to draw one state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrame {
    /// Overlay above the content.
    pub overlay: OverlayKind,
    /// Opacity of the content view.
    pub content_opacity: f64,
}

impl ScreenFrame {
    /// Build the frame for a load state.
    #[must_use]
    pub fn from_state(state: &LoadState) -> Self {
        Self {
            overlay: select_overlay(state),
            content_opacity: content_opacity(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accessors() {
        assert_eq!(OverlayKind::Progress(0.25).progress(), Some(0.25));
        assert_eq!(OverlayKind::Offline.progress(), None);
        assert_eq!(OverlayKind::Error("boom".to_string()).message(), Some("boom"));
        assert_eq!(OverlayKind::None.message(), None);
    }

    #[test]
    fn test_indicator_texts() {
        assert_eq!(error_text("x"), "Error: x");
        assert_eq!(error_text(""), "Error: ");
        assert_eq!(OFFLINE_TEXT, "No connection");
    }

    #[test]
    fn test_mapping_table() {
        assert_eq!(select_overlay(&LoadState::Idle), OverlayKind::None);
        assert_eq!(
            select_overlay(&LoadState::progressing(0.42)),
            OverlayKind::Progress(0.42)
        );
        assert_eq!(select_overlay(&LoadState::Finished), OverlayKind::None);
        assert_eq!(
            select_overlay(&LoadState::failure("x")),
            OverlayKind::Error("x".to_string())
        );
        assert_eq!(select_overlay(&LoadState::NoConnection), OverlayKind::Offline);
    }

    #[test]
    fn test_progress_passes_percent_through_for_unit_interval() {
        for step in 0..=100 {
            let percent = f64::from(step) / 100.0;
            assert_eq!(
                select_overlay(&LoadState::progressing(percent)),
                OverlayKind::Progress(percent)
            );
        }
    }

    #[test]
    fn test_opacity_full_only_when_finished() {
        assert_eq!(content_opacity(&LoadState::Finished), CONTENT_OPACITY_FULL);
        for state in [
            LoadState::Idle,
            LoadState::progressing(1.0),
            LoadState::failure("boom"),
            LoadState::NoConnection,
        ] {
            assert_eq!(content_opacity(&state), CONTENT_OPACITY_DIMMED, "{state}");
        }
    }

    #[test]
    fn test_slot_ignores_payload() {
        assert_eq!(OverlayKind::Progress(0.1).slot(), OverlayKind::Progress(0.9).slot());
        assert_eq!(
            OverlayKind::Error("a".to_string()).slot(),
            OverlayKind::Error("b".to_string()).slot()
        );
        assert_ne!(OverlayKind::Offline.slot(), OverlayKind::None.slot());
    }

    #[test]
    fn test_frame_bundles_overlay_and_opacity() {
        let frame = ScreenFrame::from_state(&LoadState::NoConnection);
        assert_eq!(frame.overlay, OverlayKind::Offline);
        assert_eq!(frame.content_opacity, CONTENT_OPACITY_DIMMED);
        assert!(frame.overlay.is_visible());

        let frame = ScreenFrame::from_state(&LoadState::Finished);
        assert!(!frame.overlay.is_visible());
        assert_eq!(frame.content_opacity, CONTENT_OPACITY_FULL);
    }
}
