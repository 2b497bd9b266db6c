//! Reachability of the game server.
//!
//! A [`ReachabilityProbe`] answers "can we reach the server right now"; the
//! [`ConnectivityWatcher`] polls one and reports changes over a channel.

use std::net::{TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use moro_core::{ConnectivityStatus, Result, ShellConfig};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

/// Trait for reachability checks.
/// This trait allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ReachabilityProbe: Send + Sync {
    /// Whether the server answered. Blocking.
    fn is_reachable(&self) -> bool;
}

/// Probe that opens a TCP connection to `host:port`.
#[derive(Debug, Clone)]
pub struct TcpReachabilityProbe {
    address: String,
    timeout: Duration,
}

impl TcpReachabilityProbe {
    /// Probe `address` (`host:port`) with a connect timeout.
    #[must_use]
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }

    /// Probe the configured address, or the start URL's host.
    ///
    /// # Errors
    ///
    /// Returns an error if no address is configured and the start URL is
    /// invalid.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Ok(Self::new(
            config.probe_address()?,
            config.connectivity.probe_timeout(),
        ))
    }

    /// Address being probed.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl ReachabilityProbe for TcpReachabilityProbe {
    fn is_reachable(&self) -> bool {
        let addrs = match self.address.to_socket_addrs() {
            Ok(addrs) => addrs,
            Err(e) => {
                debug!("Cannot resolve {}: {}", self.address, e);
                return false;
            }
        };
        addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, self.timeout).is_ok())
    }
}

/// Run one probe off the async runtime.
pub async fn probe_once(probe: Arc<dyn ReachabilityProbe>) -> ConnectivityStatus {
    let reachable = tokio::task::spawn_blocking(move || probe.is_reachable())
        .await
        .unwrap_or_else(|e| {
            warn!("Reachability probe panicked: {}", e);
            false
        });
    ConnectivityStatus::from_reachable(reachable)
}

/// Handle for controlling a running connectivity watcher.
#[derive(Debug, Clone)]
pub struct ConnectivityWatcherHandle {
    shutdown_tx: mpsc::Sender<()>,
}

impl ConnectivityWatcherHandle {
    /// Stop the watcher.
    pub async fn stop(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Polls a probe and reports connectivity changes.
pub struct ConnectivityWatcher {
    probe: Arc<dyn ReachabilityProbe>,
    poll_interval: Duration,
}

impl ConnectivityWatcher {
    /// Watcher polling every `poll_interval`.
    #[must_use]
    pub fn with_interval(probe: Arc<dyn ReachabilityProbe>, poll_interval: Duration) -> Self {
        Self {
            probe,
            poll_interval,
        }
    }

    /// Start watching.
    ///
    /// The receiver gets the status of the first probe right away, then a new
    /// status only when it differs from the last one sent.
    #[must_use]
    pub fn start(self) -> (mpsc::Receiver<ConnectivityStatus>, ConnectivityWatcherHandle) {
        let (event_tx, event_rx) = mpsc::channel::<ConnectivityStatus>(8);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let probe = self.probe;
        let poll_interval = self.poll_interval;

        tokio::spawn(async move {
            let mut last = probe_once(Arc::clone(&probe)).await;
            info!("Initial connectivity: {}", last);
            if event_tx.send(last).await.is_err() {
                return;
            }

            let mut interval_timer = interval_at(Instant::now() + poll_interval, poll_interval);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        debug!("Connectivity watcher shutting down");
                        break;
                    }
                    _ = interval_timer.tick() => {
                        let status = probe_once(Arc::clone(&probe)).await;
                        if status == last {
                            continue;
                        }
                        info!("Connectivity changed: {} -> {}", last, status);
                        last = status;
                        if event_tx.send(status).await.is_err() {
                            debug!("Connectivity receiver dropped");
                            break;
                        }
                    }
                }
            }
        });

        (event_rx, ConnectivityWatcherHandle { shutdown_tx })
    }
}
