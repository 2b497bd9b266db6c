//! Page-load tracker: turns web-view callbacks into [`LoadState`] values.
//!
//! Web views rarely report real byte progress for a framed page, so while a
//! navigation is in flight the tracker trickles an estimated progress that
//! approaches (but never reaches) a ceiling until the page reports it has
//! finished. Progress never moves backwards within one navigation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::load_state::{LoadFailure, LoadState};
use crate::progress::clamp_progress;

/// Message used when a navigation exceeds the configured load timeout.
pub const TIMEOUT_MESSAGE: &str = "timeout";

/// Default trickle time constant.
pub const DEFAULT_TRICKLE_TIME_CONSTANT: Duration = Duration::from_secs(2);

/// Default trickle ceiling.
pub const DEFAULT_TRICKLE_CEILING: f64 = 0.9;

/// Default load timeout.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Callback from the web view or the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LoadEvent {
    /// A navigation to the start URL began.
    Started,
    /// The web view reported real progress.
    Progress(f64),
    /// Time passed while loading.
    #[serde(with = "duration_millis")]
    Tick(Duration),
    /// The page finished loading.
    Finished,
    /// The page failed to load.
    Failed(String),
    /// The device went offline.
    ConnectionLost,
    /// The device came back online.
    ConnectionRestored,
}

impl From<LoadFailure> for LoadEvent {
    fn from(failure: LoadFailure) -> Self {
        Self::Failed(failure.message)
    }
}

/// Tuning for [`LoadTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Fail a navigation that has not finished after this long. `None`
    /// waits forever.
    pub load_timeout: Option<Duration>,
    /// Time constant of the trickle estimate; after one constant the
    /// estimate is about 63% of the ceiling.
    pub trickle_time_constant: Duration,
    /// Upper bound of the trickle estimate, in `(0, 1]`.
    pub trickle_ceiling: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            load_timeout: Some(DEFAULT_LOAD_TIMEOUT),
            trickle_time_constant: DEFAULT_TRICKLE_TIME_CONSTANT,
            trickle_ceiling: DEFAULT_TRICKLE_CEILING,
        }
    }
}

impl TrackerConfig {
    /// Estimated progress after `elapsed` of loading.
    #[must_use]
    pub fn trickle_estimate(&self, elapsed: Duration) -> f64 {
        let tau = self.trickle_time_constant.as_secs_f64();
        if tau <= 0.0 {
            return self.trickle_ceiling;
        }
        self.trickle_ceiling * (1.0 - (-elapsed.as_secs_f64() / tau).exp())
    }
}

/// The loader's state machine.
#[derive(Debug, Clone)]
pub struct LoadTracker {
    config: TrackerConfig,
    state: LoadState,
    elapsed: Duration,
    navigations: u64,
}

impl Default for LoadTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl LoadTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: LoadState::Idle,
            elapsed: Duration::ZERO,
            navigations: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Tracker configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Time spent in the current navigation.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of navigations started so far.
    #[must_use]
    pub const fn navigations(&self) -> u64 {
        self.navigations
    }

    /// Feed one event. Returns the new state if it changed.
    pub fn apply(&mut self, event: LoadEvent) -> Option<&LoadState> {
        let next = self.next_state(event)?;
        if next == self.state {
            return None;
        }
        if !matches!(next, LoadState::Progressing { .. }) || !self.state.is_progressing() {
            debug!(from = %self.state, to = %next, "load state transition");
        }
        self.state = next;
        Some(&self.state)
    }

    fn next_state(&mut self, event: LoadEvent) -> Option<LoadState> {
        match event {
            LoadEvent::Started => {
                self.navigations += 1;
                self.elapsed = Duration::ZERO;
                info!(navigation = self.navigations, "navigation started");
                Some(LoadState::progressing(0.0))
            }
            LoadEvent::Progress(reported) => {
                let current = self.state.percent()?;
                Some(LoadState::progressing(current.max(clamp_progress(reported))))
            }
            LoadEvent::Tick(dt) => {
                let current = self.state.percent()?;
                self.elapsed += dt;
                if let Some(timeout) = self.config.load_timeout
                    && self.elapsed >= timeout
                {
                    info!(elapsed_ms = self.elapsed.as_millis(), "navigation timed out");
                    return Some(LoadFailure::new(TIMEOUT_MESSAGE).into());
                }
                let estimate = self.config.trickle_estimate(self.elapsed);
                Some(LoadState::progressing(current.max(estimate)))
            }
            LoadEvent::Finished if self.navigations == 0 => {
                debug!("ignoring finished event before any navigation");
                None
            }
            LoadEvent::Finished => match self.state {
                LoadState::Idle | LoadState::Progressing { .. } | LoadState::Failure { .. } => {
                    Some(LoadState::Finished)
                }
                LoadState::Finished => None,
                LoadState::NoConnection => {
                    debug!("ignoring finished event while offline");
                    None
                }
            },
            LoadEvent::Failed(message) => Some(LoadState::Failure { message }),
            LoadEvent::ConnectionLost => match self.state {
                LoadState::Finished => {
                    debug!("connection lost after the page finished; keeping content");
                    None
                }
                LoadState::Idle
                | LoadState::Progressing { .. }
                | LoadState::Failure { .. }
                | LoadState::NoConnection => Some(LoadState::NoConnection),
            },
            LoadEvent::ConnectionRestored => match self.state {
                LoadState::NoConnection => Some(LoadState::Idle),
                LoadState::Idle
                | LoadState::Progressing { .. }
                | LoadState::Finished
                | LoadState::Failure { .. } => None,
            },
        }
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
