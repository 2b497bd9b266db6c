//! Page load state reporting.

use moro_core::LoadState;
use tauri::State;
use tracing::trace;

use super::state::AppState;

/// Record a load state transition reported by the frontend.
///
/// The IPC argument is named `state`, so the managed state goes by `app`.
#[tauri::command]
pub async fn report_load_state(
    app: State<'_, AppState>,
    state: LoadState,
) -> std::result::Result<(), String> {
    trace!("Load state reported: {}", state);
    app.observe_load_state(state).await;
    Ok(())
}

/// Get the last load state the frontend reported.
#[tauri::command]
pub async fn get_load_state(state: State<'_, AppState>) -> std::result::Result<LoadState, String> {
    Ok(state.load_state().await)
}
