//! Tauri API bindings for WASM.
//!
//! This module provides functions to call the shell host's commands from the
//! frontend and to subscribe to its events.

use moro_core::{ConnectivityStatus, LoadState, ShellConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// The global Tauri invoke function (Tauri 2.x API).
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
    fn tauri_invoke(cmd: &str, args: JsValue) -> Result<js_sys::Promise, JsValue>;

    /// Listen to Tauri events (Tauri 2.x API).
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen, catch)]
    fn tauri_listen(
        event: &str,
        handler: &Closure<dyn Fn(JsValue)>,
    ) -> Result<js_sys::Promise, JsValue>;
}

/// Listen to a Tauri event.
///
/// Returns the unlisten function.
pub async fn listen_to_event<F>(event: &str, handler: F) -> Result<js_sys::Function, String>
where
    F: Fn(JsValue) + 'static,
{
    if !is_tauri_available() {
        return Err("Tauri API not available".to_string());
    }

    let closure = Closure::new(handler);
    let promise = tauri_listen(event, &closure).map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| "Failed to listen to event".to_string())
    })?;

    // Keep the closure alive
    closure.forget();

    let unlisten = JsFuture::from(promise).await.map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| "Failed to set up event listener".to_string())
    })?;

    Ok(unlisten.unchecked_into())
}

/// Extract and decode the `payload` field of a Tauri event.
pub fn event_payload<T: serde::de::DeserializeOwned>(event: &JsValue) -> Result<T, String> {
    let payload = js_sys::Reflect::get(event, &JsValue::from_str("payload"))
        .map_err(|e| format!("Event has no payload: {e:?}"))?;
    serde_wasm_bindgen::from_value(payload).map_err(|e| format!("Failed to decode payload: {e}"))
}

/// Check if the Tauri API is available.
///
/// `false` when the UI is served on its own (e.g. `trunk serve` in a browser)
/// and in native builds, where there is no JS host to ask.
pub fn is_tauri_available() -> bool {
    cfg!(target_arch = "wasm32")
        && web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__")).ok())
            .is_some_and(|tauri| !tauri.is_undefined())
}

/// Call a Tauri command with the given arguments.
async fn invoke<T: serde::de::DeserializeOwned>(
    cmd: &str,
    args: impl serde::Serialize,
) -> Result<T, String> {
    if !is_tauri_available() {
        return Err("Tauri API not available - are you running in a Tauri app?".to_string());
    }

    let args_value = serde_wasm_bindgen::to_value(&args).map_err(|e| {
        let msg = format!("Failed to serialize args: {e}");
        leptos::logging::error!("{}", msg);
        msg
    })?;

    let promise = tauri_invoke(cmd, args_value).map_err(|e| {
        let msg = e
            .as_string()
            .unwrap_or_else(|| "Failed to invoke Tauri command".to_string());
        leptos::logging::error!("invoke {} failed: {}", cmd, msg);
        msg
    })?;

    let result = JsFuture::from(promise).await.map_err(|e| {
        let msg = e
            .as_string()
            .unwrap_or_else(|| "Unknown error from Tauri command".to_string());
        leptos::logging::error!("invoke {} rejected: {}", cmd, msg);
        msg
    })?;

    serde_wasm_bindgen::from_value(result).map_err(|e| {
        let msg = format!("Failed to deserialize result: {e}");
        leptos::logging::error!("invoke {} returned bad data: {}", cmd, msg);
        msg
    })
}

/// Host error as JSON-encoded by the command layer.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HostError {
    /// Human-readable message.
    pub message: String,
    /// Error category.
    pub kind: String,
}

/// Decode a command error, falling back to the raw text.
#[must_use]
pub fn parse_error(raw: &str) -> HostError {
    serde_json::from_str(raw).unwrap_or_else(|_| HostError {
        message: raw.to_string(),
        kind: "unknown".to_string(),
    })
}

// =============================================================================
// Shell API
// =============================================================================

/// Fetch the shell configuration.
pub async fn get_shell_config() -> Result<ShellConfig, String> {
    #[derive(serde::Serialize)]
    struct Args {}

    invoke("get_shell_config", Args {}).await
}

/// Report a load state transition to the host.
pub async fn report_load_state(state: &LoadState) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct Args<'a> {
        state: &'a LoadState,
    }

    invoke("report_load_state", Args { state }).await
}

// =============================================================================
// Connectivity API
// =============================================================================

/// Run a single reachability probe on the host.
pub async fn check_connectivity() -> Result<ConnectivityStatus, String> {
    #[derive(serde::Serialize)]
    struct Args {}

    invoke("check_connectivity", Args {}).await
}

/// Start the host's connectivity watcher.
///
/// Returns `true` if the watcher was started, `false` if it was already running.
pub async fn start_connectivity_watcher() -> Result<bool, String> {
    #[derive(serde::Serialize)]
    struct Args {}

    invoke("start_connectivity_watcher", Args {}).await
}

/// Stop the host's connectivity watcher.
///
/// Returns `true` if the watcher was stopped, `false` if it wasn't running.
pub async fn stop_connectivity_watcher() -> Result<bool, String> {
    #[derive(serde::Serialize)]
    struct Args {}

    invoke("stop_connectivity_watcher", Args {}).await
}
