//! Error and offline indicators.
//!
//! Both only display; neither offers a retry.

use leptos::prelude::*;
use moro_core::{OFFLINE_TEXT, error_text};

/// Red "Error: <message>" line.
#[component]
pub fn ErrorIndicator(
    /// Loader message, shown verbatim.
    #[prop(into)]
    message: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="status-indicator status-error" role="alert" data-testid="error-indicator">
            {move || error_text(&message.get())}
        </div>
    }
}

/// Gray "No connection" line.
#[component]
pub fn OfflineIndicator() -> impl IntoView {
    view! {
        <div class="status-indicator status-offline" role="status" data-testid="offline-indicator">
            {OFFLINE_TEXT}
        </div>
    }
}
