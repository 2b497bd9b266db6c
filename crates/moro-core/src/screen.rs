//! Entry screen model: the observer side of the load state.
//!
//! The entry screen never drives loading. It records what the loader reports
//! and derives a [`ScreenFrame`] from the latest state only, so a page that
//! starts loading again after it finished (a second navigation) is dimmed and
//! shows the progress overlay again.

use tracing::debug;

use crate::load_state::LoadState;
use crate::overlay::ScreenFrame;

/// Observed load state plus a few counters for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct EntryScreen {
    state: LoadState,
    transitions: u64,
    navigations: u64,
    reloads: u64,
}

impl EntryScreen {
    /// A screen that has not observed anything yet (`Idle`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A screen mounted after the loader already reported `state`.
    #[must_use]
    pub fn with_initial(state: LoadState) -> Self {
        let mut screen = Self::new();
        screen.observe(state);
        screen
    }

    /// Record the loader's latest state and return what to draw.
    pub fn observe(&mut self, state: LoadState) -> ScreenFrame {
        if state != self.state {
            debug!(from = %self.state, to = %state, "entry screen transition");
            if state.is_progressing() && !self.state.is_progressing() {
                self.navigations += 1;
                if self.state.is_finished() {
                    self.reloads += 1;
                    debug!(reloads = self.reloads, "page reloading after it finished");
                }
            }
            self.transitions += 1;
            self.state = state;
        }
        self.frame()
    }

    /// What to draw for the current state.
    #[must_use]
    pub fn frame(&self) -> ScreenFrame {
        ScreenFrame::from_state(&self.state)
    }

    /// Latest observed state.
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Number of state changes observed.
    #[must_use]
    pub const fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Number of times the screen entered `Progressing`.
    #[must_use]
    pub const fn navigations(&self) -> u64 {
        self.navigations
    }

    /// Number of times loading started again directly after `Finished`.
    #[must_use]
    pub const fn reloads(&self) -> u64 {
        self.reloads
    }
}
