//! UI components for the Moro Games entry screen.

pub mod entry_screen;
pub mod progress_indicator;
pub mod status_indicators;

pub use entry_screen::{EntryScreenView, WebViewBox};
pub use progress_indicator::{ProgressBar, ProgressIndicator};
pub use status_indicators::{ErrorIndicator, OfflineIndicator};
