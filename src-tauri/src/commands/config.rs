//! Configuration commands.

use moro_core::ShellConfig;
use tauri::State;
use tracing::{debug, info};

use super::error::map_err;
use super::state::AppState;

/// Get the current shell configuration.
#[tauri::command]
pub async fn get_shell_config(
    state: State<'_, AppState>,
) -> std::result::Result<ShellConfig, String> {
    debug!("Getting shell config");
    Ok(state.config().await)
}

/// Replace the shell configuration. Takes effect on the next launch.
#[tauri::command]
pub async fn update_shell_config(
    state: State<'_, AppState>,
    config: ShellConfig,
) -> std::result::Result<(), String> {
    info!("Updating shell config");
    debug!("New start URL: {}", config.start_url);

    let mut config_manager = state.config_manager.write().await;
    config_manager.update(config).map_err(map_err)?;

    info!("Shell config updated");
    Ok(())
}

/// Restore the default configuration.
#[tauri::command]
pub async fn reset_shell_config(
    state: State<'_, AppState>,
) -> std::result::Result<ShellConfig, String> {
    info!("Resetting shell config to defaults");
    let mut config_manager = state.config_manager.write().await;
    config_manager.reset().map_err(map_err)?;
    Ok(config_manager.config().clone())
}
