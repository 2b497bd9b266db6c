//! Page loader: the single writer of the observed [`LoadState`].
//!
//! Wraps a [`LoadTracker`] in reactive state. The web view box, the trickle
//! timer and the connectivity listeners feed it events; the entry screen only
//! reads [`PageLoader::state`].

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use moro_core::{ConnectivityStatus, LoadEvent, LoadState, LoadTracker, TrackerConfig, percentage};

use crate::tauri_api;
use crate::ticker::{TickerHandle, spawn_ticker};

/// Interval of the trickle/timeout clock.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Whether a transition is worth sending to the host.
///
/// Variant changes always are; progress only when it crosses a 10% step.
#[must_use]
pub fn should_report(previous: &LoadState, next: &LoadState) -> bool {
    match (previous.percent(), next.percent()) {
        (Some(before), Some(after)) => percentage(before) / 10 != percentage(after) / 10,
        _ => previous != next,
    }
}

/// Reactive page loader.
#[derive(Clone, Copy)]
pub struct PageLoader {
    tracker: StoredValue<LoadTracker>,
    state: RwSignal<LoadState>,
    navigation: RwSignal<u64>,
    reported: StoredValue<LoadState>,
}

impl PageLoader {
    /// Loader in `Idle`; call [`PageLoader::navigate`] to start loading.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracker: StoredValue::new(LoadTracker::new(config)),
            state: RwSignal::new(LoadState::Idle),
            navigation: RwSignal::new(0),
            reported: StoredValue::new(LoadState::Idle),
        }
    }

    /// Observed load state.
    #[must_use]
    pub fn state(&self) -> Signal<LoadState> {
        self.state.into()
    }

    /// Navigation counter; the web view box remounts when it changes.
    #[must_use]
    pub fn navigation(&self) -> Signal<u64> {
        self.navigation.into()
    }

    /// Feed one event. Returns `true` if the state changed.
    pub fn dispatch(&self, event: LoadEvent) -> bool {
        let Some(next) = self
            .tracker
            .try_update_value(|tracker| tracker.apply(event).cloned())
            .flatten()
        else {
            return false;
        };

        let previous = self.state.get_untracked();
        if previous.name() != next.name() {
            leptos::logging::log!("load state: {} -> {}", previous, next);
        }
        self.state.set(next.clone());
        self.report(next);
        true
    }

    /// Start a navigation of the web view.
    pub fn navigate(&self) {
        self.dispatch(LoadEvent::Started);
        self.navigation.update(|n| *n += 1);
    }

    /// The web view finished loading its page.
    pub fn page_loaded(&self) {
        self.dispatch(LoadEvent::Finished);
    }

    /// The loader itself failed, e.g. on an unusable start URL.
    pub fn fail(&self, message: impl Into<String>) {
        self.dispatch(LoadEvent::Failed(message.into()));
    }

    /// Apply a connectivity change. Coming back online after an outage
    /// navigates once.
    pub fn connectivity_changed(&self, status: ConnectivityStatus) {
        if self.dispatch(status.load_event()) && status.is_online() {
            leptos::logging::log!("connection restored, reloading");
            self.navigate();
        }
    }

    /// Start the trickle/timeout clock. Stop it through the returned handle.
    pub fn start_clock(&self) -> TickerHandle {
        let loader = *self;
        spawn_ticker(TICK_INTERVAL, move |dt| {
            loader.dispatch(LoadEvent::Tick(dt));
        })
    }

    fn report(&self, next: LoadState) {
        if !tauri_api::is_tauri_available() {
            return;
        }
        let due = self
            .reported
            .try_update_value(|reported| {
                let due = should_report(reported, &next);
                if due {
                    *reported = next.clone();
                }
                due
            })
            .unwrap_or(false);
        if !due {
            return;
        }
        spawn_local(async move {
            if let Err(e) = tauri_api::report_load_state(&next).await {
                leptos::logging::warn!("Failed to report load state: {}", e);
            }
        });
    }
}
