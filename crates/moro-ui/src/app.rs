//! Main application component.

use leptos::leptos_dom::helpers::window_event_listener_untyped;
use leptos::prelude::*;
use leptos::task::spawn_local;
use moro_core::config::validate_start_url;
use moro_core::{CONNECTIVITY_CHANGED, ConnectivityStatus, ShellConfig};

use crate::components::EntryScreenView;
use crate::loader::PageLoader;
use crate::tauri_api;
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <ShellContent />
    }
}

/// Waits for the shell config, then mounts the entry screen.
#[component]
fn ShellContent() -> impl IntoView {
    let (config, set_config) = signal::<Option<ShellConfig>>(None);

    Effect::new(move || {
        spawn_local(async move {
            let config = match tauri_api::get_shell_config().await {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!(
                        "Using default shell config: {}",
                        tauri_api::parse_error(&e).message
                    );
                    ShellConfig::default()
                }
            };
            leptos::logging::log!("Start URL: {}", config.start_url);
            set_config.set(Some(config));
        });
    });

    move || config.get().map(|config| view! { <LoadedShell config=config /> })
}

/// Entry screen wired to its loader, timers and connectivity sources.
#[component]
fn LoadedShell(config: ShellConfig) -> impl IntoView {
    let url = config.start_url.clone();
    let loader = PageLoader::new(config.tracker_config());

    let clock = loader.start_clock();
    on_cleanup(move || clock.stop());

    let offline = window_event_listener_untyped("offline", move |_| {
        loader.connectivity_changed(ConnectivityStatus::Offline);
    });
    let online = window_event_listener_untyped("online", move |_| confirm_online(loader));
    on_cleanup(move || {
        offline.remove();
        online.remove();
    });

    if tauri_api::is_tauri_available() {
        spawn_local(watch_host_connectivity(loader));
        on_cleanup(|| {
            spawn_local(async {
                if let Err(e) = tauri_api::stop_connectivity_watcher().await {
                    leptos::logging::warn!("Failed to stop connectivity watcher: {}", e);
                }
            });
        });
    }

    // No web view for an unusable URL: the error overlay stays on an empty box.
    let url = match validate_start_url(&url) {
        Ok(_) => {
            loader.navigate();
            if !browser_online() {
                loader.connectivity_changed(ConnectivityStatus::Offline);
            }
            Some(url)
        }
        Err(e) => {
            leptos::logging::error!("{}", e);
            loader.fail(e.to_string());
            None
        }
    };

    view! { <EntryScreenView url=url loader=loader /> }
}

/// `navigator.onLine`; assumes online when unavailable.
fn browser_online() -> bool {
    web_sys::window().is_none_or(|window| window.navigator().on_line())
}

/// The browser claims to be online again. Inside the shell, let the host
/// confirm the game server is reachable before reloading.
fn confirm_online(loader: PageLoader) {
    if !tauri_api::is_tauri_available() {
        loader.connectivity_changed(ConnectivityStatus::Online);
        return;
    }
    spawn_local(async move {
        match tauri_api::check_connectivity().await {
            Ok(status) => loader.connectivity_changed(status),
            Err(e) => {
                leptos::logging::warn!("Connectivity check failed: {}", e);
                loader.connectivity_changed(ConnectivityStatus::Online);
            }
        }
    });
}

/// Forward the host's `connectivity-changed` events to the loader.
async fn watch_host_connectivity(loader: PageLoader) {
    // Listen before starting: the watcher emits its first status immediately.
    if let Err(e) = tauri_api::listen_to_event(CONNECTIVITY_CHANGED, move |event| {
        match tauri_api::event_payload::<ConnectivityStatus>(&event) {
            Ok(status) => {
                leptos::logging::log!("Host connectivity: {}", status);
                loader.connectivity_changed(status);
            }
            Err(e) => leptos::logging::warn!("Bad connectivity event: {}", e),
        }
    })
    .await
    {
        leptos::logging::error!("Failed to listen for connectivity events: {}", e);
        return;
    }

    match tauri_api::start_connectivity_watcher().await {
        Ok(true) => leptos::logging::log!("Connectivity watcher started"),
        Ok(false) => leptos::logging::log!("Connectivity watcher already running"),
        Err(e) => leptos::logging::error!(
            "Failed to start connectivity watcher: {}",
            tauri_api::parse_error(&e).message
        ),
    }
}
