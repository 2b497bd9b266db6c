//! Moro Games UI - Leptos-based entry screen.
//!
//! Hosts the game page in a web view box and draws the loading, error and
//! offline overlays above it.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_used and unwrap_used are restricted to documented cases
#![allow(clippy::expect_used)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod loader;
pub mod tauri_api;
pub mod theme;
pub mod ticker;

pub use app::App;
pub use loader::PageLoader;
