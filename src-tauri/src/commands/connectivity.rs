//! Connectivity commands: one-off probes and the background watcher.

use moro_core::{CONNECTIVITY_CHANGED, ConnectivityStatus};
use tauri::{AppHandle, Emitter, State};
use tracing::{debug, error, info};

use super::error::map_err;
use super::state::AppState;
use crate::connectivity::{ConnectivityWatcher, probe_once};

/// Probe the game server once.
#[tauri::command]
pub async fn check_connectivity(
    state: State<'_, AppState>,
) -> std::result::Result<ConnectivityStatus, String> {
    let probe = state.probe().await.map_err(map_err)?;
    let status = probe_once(probe).await;
    debug!("Connectivity check: {}", status);
    Ok(status)
}

/// Start polling the game server and emitting `connectivity-changed`.
///
/// Returns `false` if the watcher was already running.
#[tauri::command]
pub async fn start_connectivity_watcher(
    app: AppHandle,
    state: State<'_, AppState>,
) -> std::result::Result<bool, String> {
    info!("Starting connectivity watcher");

    let handle_arc = state.watcher_handle_arc();
    let mut handle = handle_arc.write().await;
    if handle.is_some() {
        debug!("Connectivity watcher already running");
        return Ok(false);
    }

    let poll_interval = state.config().await.connectivity.poll_interval();
    let probe = state.probe().await.map_err(map_err)?;
    let (mut event_rx, watcher_handle) =
        ConnectivityWatcher::with_interval(probe, poll_interval).start();
    *handle = Some(watcher_handle);

    // Forward status changes to the frontend
    tokio::spawn(async move {
        while let Some(status) = event_rx.recv().await {
            info!("Emitting {} event: {}", CONNECTIVITY_CHANGED, status);
            if let Err(e) = app.emit(CONNECTIVITY_CHANGED, status) {
                error!("Failed to emit {} event: {}", CONNECTIVITY_CHANGED, e);
            }
        }
        debug!("Connectivity event forwarding task ended");
    });

    info!("Connectivity watcher started, polling every {:?}", poll_interval);
    Ok(true)
}

/// Stop the connectivity watcher.
///
/// Returns `false` if it wasn't running.
#[tauri::command]
pub async fn stop_connectivity_watcher(
    state: State<'_, AppState>,
) -> std::result::Result<bool, String> {
    info!("Stopping connectivity watcher");

    let handle_arc = state.watcher_handle_arc();
    let mut handle = handle_arc.write().await;

    if let Some(watcher_handle) = handle.take() {
        watcher_handle.stop().await;
        info!("Connectivity watcher stopped");
        Ok(true)
    } else {
        debug!("Connectivity watcher was not running");
        Ok(false)
    }
}

/// Check if the connectivity watcher is currently running.
#[tauri::command]
pub async fn is_connectivity_watcher_running(
    state: State<'_, AppState>,
) -> std::result::Result<bool, String> {
    let handle_arc = state.watcher_handle_arc();
    let handle = handle_arc.read().await;
    Ok(handle.is_some())
}
