//! Tauri commands for the Moro Games shell.
//!
//! These commands are invoked from the frontend via Tauri's IPC mechanism.
//!
//! This module is organized into submodules by feature area:
//! - `state`: Application state management
//! - `error`: Error handling utilities
//! - `config`: Shell configuration
//! - `load`: Page load state reporting
//! - `connectivity`: Reachability checks and the connectivity watcher

mod config;
mod connectivity;
mod error;
mod load;
mod state;

// Re-export AppState for main.rs
pub use state::AppState;

// Re-export all commands
pub use config::*;
pub use connectivity::*;
pub use load::*;
