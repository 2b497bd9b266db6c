//! Fixed-period timer loops for the WASM front end.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Stops a loop started by [`spawn_ticker`].
#[derive(Debug, Clone)]
pub struct TickerHandle {
    alive: Arc<AtomicBool>,
}

impl TickerHandle {
    /// Stop the loop; it exits before its next tick.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Call `on_tick` roughly every `period` with the real time since the
/// previous call, until the returned handle is stopped.
pub fn spawn_ticker<F>(period: Duration, on_tick: F) -> TickerHandle
where
    F: Fn(Duration) + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    let handle = TickerHandle {
        alive: Arc::clone(&alive),
    };
    let period_ms = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);

    spawn_local(async move {
        let mut last = js_sys::Date::now();
        loop {
            TimeoutFuture::new(period_ms).await;
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let now = js_sys::Date::now();
            let elapsed_secs = ((now - last) / 1000.0).max(0.0);
            last = now;
            on_tick(Duration::from_secs_f64(elapsed_secs));
        }
    });

    handle
}
