//! Loading overlay: backdrop, pulsing logo, "Loading N%" label and the neon
//! progress bar with its shimmer and particles.
//!
//! The label and the fill read the progress signal directly. The decorative
//! motion comes from an [`EffectClock`] advanced on its own timer, so a slow
//! frame never holds back the percentage.

use std::time::Duration;

use leptos::prelude::*;
use moro_core::effects::EffectFrame;
use moro_core::progress::{
    BAR_HEIGHT_PX, LOGO_WIDTH_FRACTION, PARTICLE_COUNT, Particle, ParticleHue,
    TRACK_WIDTH_FRACTION,
};
use moro_core::{EffectClock, ProgressBarLayout, loading_label};

use crate::ticker::spawn_ticker;

/// Frame period of the decorative effects.
const EFFECT_FRAME: Duration = Duration::from_millis(16);

/// Logo shown in the backdrop and above the bar.
const LOGO_SRC: &str = "assets/logo.svg";

/// CSS length for a fraction of the viewport width.
fn vw(fraction: f64) -> String {
    format!("{:.2}vw", fraction * 100.0)
}

/// Shimmer transform for a translation given in percent of the track.
fn shimmer_translate(track_percent: f64) -> String {
    format!("translateX({:.3}vw)", track_percent * TRACK_WIDTH_FRACTION)
}

/// Inline style placing one particle. Track coordinates are percentages.
fn particle_style(particle: &Particle) -> String {
    format!(
        "left: {:.3}%; transform: translate(-50%, calc(-50% + {:.3}px));",
        particle.x, particle.y
    )
}

const fn particle_class(hue: ParticleHue) -> &'static str {
    match hue {
        ParticleHue::Cyan => "particle particle-cyan",
        ParticleHue::Magenta => "particle particle-magenta",
    }
}

/// Full-screen loading overlay.
#[component]
pub fn ProgressIndicator(
    /// Load progress in `[0, 1]`.
    #[prop(into)]
    progress: Signal<f64>,
) -> impl IntoView {
    let clock = StoredValue::new(EffectClock::new());
    let (effects, set_effects) = signal(EffectClock::new().frame());

    let ticker = spawn_ticker(EFFECT_FRAME, move |dt| {
        if let Some(frame) = clock.try_update_value(|clock| {
            clock.advance(dt);
            clock.frame()
        }) {
            set_effects.set(frame);
        }
    });
    on_cleanup(move || ticker.stop());

    let logo_transform = move || format!("scale({:.4})", effects.get().logo_scale);

    view! {
        <div class="loading-overlay" data-testid="loading-overlay">
            <div class="loading-backdrop" style:background-image=format!("url({LOGO_SRC})")></div>
            <div class="loading-scrim"></div>
            <div class="loading-content">
                <img
                    class="loading-logo"
                    src=LOGO_SRC
                    alt="Moro Games"
                    style:width=vw(LOGO_WIDTH_FRACTION)
                    style:transform=logo_transform
                />
                <div class="loading-panel">
                    <div class="loading-label" data-testid="loading-label">
                        {move || loading_label(progress.get())}
                    </div>
                    <ProgressBar progress=progress effects=effects />
                </div>
            </div>
        </div>
    }
}

/// Neon progress bar.
#[component]
pub fn ProgressBar(
    /// Load progress in `[0, 1]`.
    #[prop(into)]
    progress: Signal<f64>,
    /// Current decorative effect frame.
    #[prop(into)]
    effects: Signal<EffectFrame>,
) -> impl IntoView {
    // Laid out in percent of the track so CSS does the pixel math.
    let layout = Memo::new(move |_| ProgressBarLayout::new(progress.get(), 100.0, BAR_HEIGHT_PX));
    let placed = Memo::new(move |_| layout.get().particles(&effects.get().particle_swing));

    let fill_width = move || format!("{:.3}%", layout.get().fill_width());
    let shimmer_transform = move || {
        let offset = layout.get().shimmer_translation(effects.get().shimmer_offset);
        shimmer_translate(offset)
    };
    let particles_visibility = move || {
        if layout.get().particles_visible() {
            "visible"
        } else {
            "hidden"
        }
    };
    let particles = (0..PARTICLE_COUNT)
        .map(|index| {
            view! {
                <span
                    class=particle_class(ParticleHue::for_index(index))
                    style=move || placed.with(|placed| particle_style(&placed[index]))
                ></span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || moro_core::percentage(progress.get()).to_string()
            style:width=vw(TRACK_WIDTH_FRACTION)
            style:height=format!("{BAR_HEIGHT_PX}px")
        >
            <div class="progress-fill" style:width=fill_width>
                <div class="progress-shimmer" style:transform=shimmer_transform></div>
                <div class="progress-glow"></div>
            </div>
            <div class="progress-particles" style:visibility=particles_visibility>
                {particles}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_widths() {
        assert_eq!(vw(TRACK_WIDTH_FRACTION), "52.00vw");
        assert_eq!(vw(LOGO_WIDTH_FRACTION), "38.00vw");
    }

    #[test]
    fn test_particle_style_uses_track_percent() {
        let particle = Particle {
            index: 0,
            x: 12.5,
            y: -1.25,
            hue: ParticleHue::Cyan,
        };
        let style = particle_style(&particle);
        assert!(style.starts_with("left: 12.500%;"));
        assert!(style.contains("-1.250px"));
    }

    #[test]
    fn test_shimmer_spans_the_fill() {
        let layout = ProgressBarLayout::new(0.5, 100.0, BAR_HEIGHT_PX);
        assert_eq!(
            shimmer_translate(layout.shimmer_translation(-1.0)),
            "translateX(-26.000vw)"
        );
        assert_eq!(
            shimmer_translate(layout.shimmer_translation(0.0)),
            "translateX(0.000vw)"
        );
    }

    #[test]
    fn test_particle_classes_follow_hue() {
        assert_eq!(particle_class(ParticleHue::Cyan), "particle particle-cyan");
        assert_eq!(particle_class(ParticleHue::Magenta), "particle particle-magenta");
    }
}
