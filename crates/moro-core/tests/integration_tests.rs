//! Integration tests for Moro Games core workflows.
//!
//! These tests drive whole load sequences through the public API:
//! - Load state sequences and the overlays/opacity they produce
//! - Tracker-driven navigations (trickle, timeout, offline, recovery)
//! - Configuration feeding the tracker

use std::time::Duration;

use moro_core::config::validate_start_url;
use moro_core::overlay::{CONTENT_OPACITY_DIMMED, CONTENT_OPACITY_FULL};
use moro_core::progress::particles_visible;
use moro_core::{
    ConfigManager, ConnectivityStatus, EntryScreen, LoadEvent, LoadFailure, LoadState,
    LoadTracker, OverlayKind, ProgressBarLayout, ScreenFrame, ShellConfig, TrackerConfig,
    error_text, loading_label, percentage, select_overlay,
};
use tempfile::TempDir;

// =============================================================================
// Test Fixtures and Utilities
// =============================================================================

/// Feed a sequence of states to a fresh screen and collect the frames.
fn frames_for(states: &[LoadState]) -> Vec<ScreenFrame> {
    let mut screen = EntryScreen::new();
    states.iter().map(|state| screen.observe(state.clone())).collect()
}

/// Tracker plus screen, wired the way the front end wires them.
struct LoadFixture {
    tracker: LoadTracker,
    screen: EntryScreen,
    frames: Vec<ScreenFrame>,
}

impl LoadFixture {
    fn new(config: TrackerConfig) -> Self {
        Self {
            tracker: LoadTracker::new(config),
            screen: EntryScreen::new(),
            frames: Vec::new(),
        }
    }

    fn send(&mut self, event: LoadEvent) {
        if let Some(state) = self.tracker.apply(event) {
            let frame = self.screen.observe(state.clone());
            self.frames.push(frame);
        }
    }

    fn last_frame(&self) -> ScreenFrame {
        self.screen.frame()
    }

    fn progress_values(&self) -> Vec<f64> {
        self.frames
            .iter()
            .filter_map(|frame| match frame.overlay {
                OverlayKind::Progress(percent) => Some(percent),
                OverlayKind::None | OverlayKind::Error(_) | OverlayKind::Offline => None,
            })
            .collect()
    }
}

// =============================================================================
// Overlay Selection Scenarios
// =============================================================================

#[test]
fn test_progress_overlay_matches_label_for_all_percents() {
    for step in 0..=1000 {
        let percent = f64::from(step) / 1000.0;
        assert_eq!(
            select_overlay(&LoadState::progressing(percent)),
            OverlayKind::Progress(percent)
        );
        assert_eq!(
            loading_label(percent),
            format!("Loading {}%", (percent * 100.0).floor())
        );
        assert_eq!(f64::from(percentage(percent)), (percent * 100.0).floor());
    }
}

#[test]
fn test_successful_load_sequence() {
    let frames = frames_for(&[
        LoadState::Idle,
        LoadState::progressing(0.0),
        LoadState::progressing(0.5),
        LoadState::progressing(1.0),
        LoadState::Finished,
    ]);

    let overlays: Vec<OverlayKind> = frames.iter().map(|f| f.overlay.clone()).collect();
    assert_eq!(
        overlays,
        vec![
            OverlayKind::None,
            OverlayKind::Progress(0.0),
            OverlayKind::Progress(0.5),
            OverlayKind::Progress(1.0),
            OverlayKind::None,
        ]
    );

    let labels: Vec<String> = overlays
        .iter()
        .filter_map(|overlay| match overlay {
            OverlayKind::Progress(percent) => Some(loading_label(*percent)),
            OverlayKind::None | OverlayKind::Error(_) | OverlayKind::Offline => None,
        })
        .collect();
    assert_eq!(labels, vec!["Loading 0%", "Loading 50%", "Loading 100%"]);

    let opacities: Vec<f64> = frames.iter().map(|f| f.content_opacity).collect();
    assert_eq!(opacities, vec![0.5, 0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn test_idle_to_offline() {
    let frames = frames_for(&[LoadState::Idle, LoadState::NoConnection]);
    assert_eq!(frames[1].overlay, OverlayKind::Offline);
    assert_eq!(frames[1].content_opacity, CONTENT_OPACITY_DIMMED);
}

#[test]
fn test_offline_ignores_previous_percent() {
    let frames = frames_for(&[LoadState::progressing(0.77), LoadState::NoConnection]);
    assert_eq!(frames[1].overlay, OverlayKind::Offline);
}

#[test]
fn test_progress_then_timeout_failure() {
    let frames = frames_for(&[LoadState::progressing(0.3), LoadState::failure("timeout")]);
    assert_eq!(frames[0].overlay, OverlayKind::Progress(0.3));
    assert_eq!(loading_label(0.3), "Loading 30%");
    assert_eq!(frames[1].overlay, OverlayKind::Error("timeout".to_string()));
    assert_eq!(error_text("timeout"), "Error: timeout");
    assert_eq!(frames[1].content_opacity, CONTENT_OPACITY_DIMMED);
}

#[test]
fn test_only_finished_shows_full_content() {
    for state in [
        LoadState::Idle,
        LoadState::progressing(1.0),
        LoadState::failure("x"),
        LoadState::NoConnection,
    ] {
        assert_eq!(ScreenFrame::from_state(&state).content_opacity, CONTENT_OPACITY_DIMMED);
    }
    assert_eq!(
        ScreenFrame::from_state(&LoadState::Finished).content_opacity,
        CONTENT_OPACITY_FULL
    );
}

#[test]
fn test_bar_geometry_scenario() {
    let empty = ProgressBarLayout::new(0.0, 520.0, 10.0);
    let full = ProgressBarLayout::new(1.0, 520.0, 10.0);
    assert_eq!(empty.fill_width(), 0.0);
    assert_eq!(full.fill_width(), 520.0);
    assert!(!particles_visible(0.1));
    assert!(particles_visible(0.100_000_1));
}

// =============================================================================
// Tracker-Driven Navigation Tests
// =============================================================================

#[test]
fn test_tracked_navigation_trickles_then_finishes() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    fixture.send(LoadEvent::Started);
    for _ in 0..20 {
        fixture.send(LoadEvent::Tick(Duration::from_millis(250)));
    }
    fixture.send(LoadEvent::Progress(0.95));
    fixture.send(LoadEvent::Finished);

    let progress = fixture.progress_values();
    assert_eq!(progress.first().copied(), Some(0.0));
    assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(progress.iter().all(|p| (0.0..=1.0).contains(p)));

    let last = fixture.last_frame();
    assert_eq!(last.overlay, OverlayKind::None);
    assert_eq!(last.content_opacity, CONTENT_OPACITY_FULL);
}

#[test]
fn test_tracked_navigation_times_out() {
    let config = TrackerConfig {
        load_timeout: Some(Duration::from_secs(5)),
        ..TrackerConfig::default()
    };
    let mut fixture = LoadFixture::new(config);
    fixture.send(LoadEvent::Started);
    fixture.send(LoadEvent::Progress(0.3));
    for _ in 0..10 {
        fixture.send(LoadEvent::Tick(Duration::from_secs(1)));
    }

    assert_eq!(
        fixture.last_frame().overlay,
        OverlayKind::Error("timeout".to_string())
    );
    assert_eq!(fixture.tracker.state(), &LoadState::failure("timeout"));
}

#[test]
fn test_loader_failure_is_carried_verbatim() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    fixture.send(LoadEvent::Started);
    fixture.send(LoadFailure::new("net::ERR_NAME_NOT_RESOLVED").into());
    assert_eq!(
        fixture.last_frame().overlay,
        OverlayKind::Error("net::ERR_NAME_NOT_RESOLVED".to_string())
    );
}

#[test]
fn test_offline_then_recovery_reloads_once() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    fixture.send(LoadEvent::Started);
    fixture.send(LoadEvent::Progress(0.4));
    fixture.send(ConnectivityStatus::Offline.load_event());
    assert_eq!(fixture.last_frame().overlay, OverlayKind::Offline);

    // Finished while offline is ignored.
    fixture.send(LoadEvent::Finished);
    assert_eq!(fixture.last_frame().overlay, OverlayKind::Offline);

    fixture.send(ConnectivityStatus::Online.load_event());
    assert_eq!(fixture.tracker.state(), &LoadState::Idle);
    fixture.send(LoadEvent::Started);
    fixture.send(LoadEvent::Finished);

    assert_eq!(fixture.last_frame().overlay, OverlayKind::None);
    assert_eq!(fixture.tracker.navigations(), 2);
    assert_eq!(fixture.screen.navigations(), 2);
}

#[test]
fn test_connection_lost_after_finish_keeps_page() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    fixture.send(LoadEvent::Started);
    fixture.send(LoadEvent::Finished);
    fixture.send(LoadEvent::ConnectionLost);
    assert_eq!(fixture.last_frame().content_opacity, CONTENT_OPACITY_FULL);
}

#[test]
fn test_second_navigation_redims_content() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    fixture.send(LoadEvent::Started);
    fixture.send(LoadEvent::Finished);
    fixture.send(LoadEvent::Started);

    let frame = fixture.last_frame();
    assert_eq!(frame.overlay, OverlayKind::Progress(0.0));
    assert_eq!(frame.content_opacity, CONTENT_OPACITY_DIMMED);
    assert_eq!(fixture.screen.reloads(), 1);
}

#[test]
fn test_invalid_start_url_failure_survives_page_load() {
    let mut fixture = LoadFixture::new(TrackerConfig::default());
    let err = validate_start_url("not a url").expect_err("relative URL");
    fixture.send(LoadEvent::Failed(err.to_string()));
    assert_eq!(
        fixture.last_frame().overlay,
        OverlayKind::Error(err.to_string())
    );

    // A stray load event from the web view must not clear the error.
    fixture.send(LoadEvent::Finished);
    let frame = fixture.last_frame();
    assert_eq!(frame.overlay, OverlayKind::Error(err.to_string()));
    assert_eq!(frame.content_opacity, CONTENT_OPACITY_DIMMED);
}

// =============================================================================
// Configuration Integration Tests
// =============================================================================

#[test]
fn test_config_drives_tracker_timeout() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"start_url":"https://play.example.org","load_timeout_secs":2}"#,
    )
    .expect("Should write config");

    let manager = ConfigManager::with_path(path).expect("Should load config");
    let mut tracker = LoadTracker::new(manager.config().tracker_config());
    tracker.apply(LoadEvent::Started);
    tracker.apply(LoadEvent::Tick(Duration::from_secs(1)));
    assert!(tracker.state().is_progressing());
    tracker.apply(LoadEvent::Tick(Duration::from_secs(1)));
    assert_eq!(tracker.state(), &LoadState::failure("timeout"));
}

#[test]
fn test_config_without_timeout_never_fails_on_ticks() {
    let config = ShellConfig {
        load_timeout_secs: None,
        ..ShellConfig::default()
    };
    let mut tracker = LoadTracker::new(config.tracker_config());
    tracker.apply(LoadEvent::Started);
    for _ in 0..120 {
        tracker.apply(LoadEvent::Tick(Duration::from_secs(1)));
    }
    let percent = tracker.state().percent().expect("still progressing");
    assert!(percent <= config.trickle_ceiling);
}
