//! Moro Games - desktop shell around the Moro Games web client.
//!
//! This is the main entry point for the Tauri application.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod connectivity;
mod logging;

use commands::AppState;
use tauri::Manager;
use tracing::{error, info, warn};

fn main() {
    // Keep the guard alive for the whole run so file logs get flushed.
    let _log_guard = match logging::init_auto() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    info!("Starting Moro Games v{}", env!("CARGO_PKG_VERSION"));

    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to load shell config: {}", e);
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .manage(app_state)
        .setup(|app| {
            let state = app.state::<AppState>();
            let title = tauri::async_runtime::block_on(state.config()).window_title;
            if let Some(window) = app.get_webview_window("main") {
                if let Err(e) = window.set_title(&title) {
                    warn!("Failed to set window title: {}", e);
                }
            } else {
                warn!("Main window not found, keeping default title");
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_shell_config,
            commands::update_shell_config,
            commands::reset_shell_config,
            commands::report_load_state,
            commands::get_load_state,
            commands::check_connectivity,
            commands::start_connectivity_watcher,
            commands::stop_connectivity_watcher,
            commands::is_connectivity_watcher_running,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
