//! Application state managed by Tauri.

use std::sync::Arc;

use moro_core::{ConfigManager, EntryScreen, LoadState, Result, ScreenFrame, ShellConfig};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::connectivity::{ConnectivityWatcherHandle, ReachabilityProbe, TcpReachabilityProbe};

/// Application state managed by Tauri.
pub struct AppState {
    /// Configuration manager (async-safe).
    pub(crate) config_manager: Arc<RwLock<ConfigManager>>,
    /// Host-side view of the entry screen, fed by the front end.
    pub(crate) screen: Arc<RwLock<EntryScreen>>,
    /// Handle for the connectivity watcher (if running).
    pub(crate) watcher_handle: Arc<RwLock<Option<ConnectivityWatcherHandle>>>,
}

impl AppState {
    /// Create the application state from the config at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_config_manager(ConfigManager::new()?))
    }

    /// Create the application state around an existing config manager.
    #[must_use]
    pub fn with_config_manager(config_manager: ConfigManager) -> Self {
        info!("Config file: {}", config_manager.path().display());
        Self {
            config_manager: Arc::new(RwLock::new(config_manager)),
            screen: Arc::new(RwLock::new(EntryScreen::new())),
            watcher_handle: Arc::new(RwLock::new(None)),
        }
    }

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> ShellConfig {
        self.config_manager.read().await.config().clone()
    }

    /// Reachability probe for the configured server.
    pub async fn probe(&self) -> Result<Arc<dyn ReachabilityProbe>> {
        let config = self.config().await;
        let probe = TcpReachabilityProbe::from_config(&config)?;
        debug!("Probing {}", probe.address());
        Ok(Arc::new(probe))
    }

    /// Record a load state reported by the front end.
    pub async fn observe_load_state(&self, state: LoadState) -> ScreenFrame {
        let mut screen = self.screen.write().await;
        let previous = screen.state().clone();
        let frame = screen.observe(state);
        let current = screen.state();

        if previous.name() != current.name() {
            match current {
                LoadState::Failure { message } => info!("Page failed to load: {}", message),
                LoadState::NoConnection => info!("Page waiting for a connection"),
                LoadState::Finished => info!(
                    navigations = screen.navigations(),
                    reloads = screen.reloads(),
                    "Page finished loading"
                ),
                LoadState::Idle | LoadState::Progressing { .. } => {
                    debug!("Load state: {} -> {}", previous, current);
                }
            }
        }
        frame
    }

    /// Last load state reported by the front end.
    pub async fn load_state(&self) -> LoadState {
        self.screen.read().await.state().clone()
    }

    /// Get a clone of the watcher handle Arc for async operations.
    pub fn watcher_handle_arc(&self) -> Arc<RwLock<Option<ConnectivityWatcherHandle>>> {
        Arc::clone(&self.watcher_handle)
    }
}
