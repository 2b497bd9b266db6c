//! Network reachability as seen by the shell host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tracker::LoadEvent;

/// Event emitted by the host whenever the reachability of the game server
/// changes.
pub const CONNECTIVITY_CHANGED: &str = "connectivity-changed";

/// Whether the game server can currently be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityStatus {
    /// The probe connected.
    Online,
    /// The probe failed or timed out.
    Offline,
}

impl ConnectivityStatus {
    /// Status for a probe outcome.
    #[must_use]
    pub const fn from_reachable(reachable: bool) -> Self {
        if reachable { Self::Online } else { Self::Offline }
    }

    /// `true` for [`ConnectivityStatus::Online`].
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Tracker event a change to this status produces.
    #[must_use]
    pub const fn load_event(self) -> LoadEvent {
        match self {
            Self::Online => LoadEvent::ConnectionRestored,
            Self::Offline => LoadEvent::ConnectionLost,
        }
    }
}

impl fmt::Display for ConnectivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
        }
    }
}
