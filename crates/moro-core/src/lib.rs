//! Moro Games Core Library
//!
//! This crate holds the platform-independent model of the Moro Games shell:
//! - Load states reported by the page loader and the tracker that produces them
//! - Overlay selection and content dimming for each load state
//! - Progress bar geometry and the decorative effect clock
//! - Shell configuration and connectivity status
//!
//! It has no runtime dependencies beyond serde, so the WASM front end and the
//! native host share it.

pub mod config;
pub mod connectivity;
pub mod effects;
pub mod error;
pub mod load_state;
pub mod overlay;
pub mod progress;
pub mod screen;
pub mod tracker;

pub use config::{ConfigManager, ConnectivityConfig, ShellConfig};
pub use connectivity::{CONNECTIVITY_CHANGED, ConnectivityStatus};
pub use effects::{EffectClock, EffectFrame};
pub use error::{Error, ErrorKind, Result};
pub use load_state::{LoadFailure, LoadState};
pub use overlay::{
    OFFLINE_TEXT, OverlayKind, OverlaySlot, ScreenFrame, content_opacity, error_text, select_overlay,
};
pub use progress::{ProgressBarLayout, loading_label, percentage};
pub use screen::EntryScreen;
pub use tracker::{LoadEvent, LoadTracker, TrackerConfig};
