//! Entry screen: the web view box with the overlay for the current load
//! state composited above it.

use leptos::prelude::*;
use moro_core::{EntryScreen, LoadState, OverlaySlot, ScreenFrame};

use super::{ErrorIndicator, OfflineIndicator, ProgressIndicator};
use crate::loader::PageLoader;

/// Iframe hosting the game page.
///
/// Remounted whenever `navigation` changes, which restarts the page load.
#[component]
pub fn WebViewBox(
    /// Page to show.
    url: String,
    /// Navigation counter from the loader.
    #[prop(into)]
    navigation: Signal<u64>,
    /// Content opacity.
    #[prop(into)]
    opacity: Signal<f64>,
    /// Called when the page finished loading.
    on_load: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="web-view-box" style:opacity=move || opacity.get().to_string()>
            {move || {
                let key = navigation.get();
                view! {
                    <iframe
                        class="web-view"
                        src=url.clone()
                        title="Moro Games"
                        data-navigation=key.to_string()
                        allow="autoplay; fullscreen; gamepad"
                        on:load=move |_| on_load.run(())
                    ></iframe>
                }
            }}
        </div>
    }
}

/// The entry screen.
///
/// Reads the loader's state and never writes it.
#[component]
pub fn EntryScreenView(
    /// Page to show; `None` leaves the box empty.
    url: Option<String>,
    /// Loader driving the web view.
    loader: PageLoader,
) -> impl IntoView {
    let state = loader.state();
    let screen = StoredValue::new(EntryScreen::with_initial(state.get_untracked()));

    let frame = Memo::new(move |_| {
        let current = state.get();
        screen
            .try_update_value(|screen| screen.observe(current.clone()))
            .unwrap_or_else(|| ScreenFrame::from_state(&current))
    });
    let slot = Memo::new(move |_| frame.with(|frame| frame.overlay.slot()));
    let opacity = Signal::derive(move || frame.with(|frame| frame.content_opacity));
    let progress = Signal::derive(move || frame.with(|frame| frame.overlay.progress().unwrap_or(0.0)));
    let message = Signal::derive(move || {
        frame.with(|frame| frame.overlay.message().unwrap_or_default().to_string())
    });

    Effect::new(move || {
        if matches!(state.get(), LoadState::Finished) {
            let reloads = screen.with_value(EntryScreen::reloads);
            if reloads > 0 {
                leptos::logging::log!("page finished after {} reload(s)", reloads);
            }
        }
    });

    view! {
        <div class="entry-screen" data-testid="entry-screen">
            {match url {
                Some(url) => view! {
                    <WebViewBox
                        url=url
                        navigation=loader.navigation()
                        opacity=opacity
                        on_load=Callback::new(move |()| loader.page_loaded())
                    />
                }
                    .into_any(),
                None => view! { <div class="web-view-box web-view-empty"></div> }.into_any(),
            }}
            {move || match slot.get() {
                OverlaySlot::None => ().into_any(),
                OverlaySlot::Progress => view! { <ProgressIndicator progress=progress /> }.into_any(),
                OverlaySlot::Error => view! { <ErrorIndicator message=message /> }.into_any(),
                OverlaySlot::Offline => view! { <OfflineIndicator /> }.into_any(),
            }}
        </div>
    }
}
