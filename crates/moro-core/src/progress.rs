//! Geometry and text of the loading progress bar.
//!
//! Everything here is derived from the progress value alone. The decorative
//! motion (shimmer, particle swing, logo pulse) lives in [`crate::effects`] and
//! only feeds offsets in; it never changes what the bar or label show.

/// Particles are drawn only above this progress value (exclusive).
pub const PARTICLE_THRESHOLD: f64 = 0.1;

/// Number of particles travelling along the filled part of the bar.
pub const PARTICLE_COUNT: usize = 8;

/// Height of the progress bar in pixels.
pub const BAR_HEIGHT_PX: f64 = 10.0;

/// Track width as a fraction of the screen width.
pub const TRACK_WIDTH_FRACTION: f64 = 0.52;

/// Pulsing logo width as a fraction of the screen width.
pub const LOGO_WIDTH_FRACTION: f64 = 0.38;

/// Vertical swing of a particle relative to the bar height.
const PARTICLE_SWING_FRACTION: f64 = 0.3;

/// Clamp a progress value into `[0, 1]`. NaN counts as no progress.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Whole percentage shown in the label: `floor(progress * 100)`.
#[must_use]
pub fn percentage(progress: f64) -> u8 {
    (clamp_progress(progress) * 100.0).floor() as u8
}

/// Label text above the bar, e.g. `"Loading 42%"`.
#[must_use]
pub fn loading_label(progress: f64) -> String {
    format!("Loading {}%", percentage(progress))
}

/// Whether the particle layer is shown for a progress value.
#[must_use]
pub fn particles_visible(progress: f64) -> bool {
    clamp_progress(progress) > PARTICLE_THRESHOLD
}

/// Which of the two accent colors a particle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleHue {
    /// Cyan accent (even particles).
    Cyan,
    /// Magenta accent (odd particles).
    Magenta,
}

impl ParticleHue {
    /// Hue of the particle at `index`.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Cyan } else { Self::Magenta }
    }
}

/// Position of one particle, in the same units as the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Index in `0..PARTICLE_COUNT`.
    pub index: usize,
    /// Horizontal centre measured from the start of the track.
    pub x: f64,
    /// Vertical offset from the bar's centre line.
    pub y: f64,
    /// Accent color.
    pub hue: ParticleHue,
}

/// Layout of the progress bar for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarLayout {
    progress: f64,
    track_width: f64,
    height: f64,
}

impl ProgressBarLayout {
    /// Lay out a bar of the given track width and height.
    ///
    /// `progress` is clamped, so out-of-range values never produce a negative
    /// or overflowing fill.
    #[must_use]
    pub fn new(progress: f64, track_width: f64, height: f64) -> Self {
        Self {
            progress: clamp_progress(progress),
            track_width: track_width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Clamped progress value.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Width of the track.
    #[must_use]
    pub const fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Width of the filled part.
    #[must_use]
    pub fn fill_width(&self) -> f64 {
        self.progress * self.track_width
    }

    /// Corner radius giving the bar its pill shape.
    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.height / 2.0
    }

    /// Whether particles are drawn.
    #[must_use]
    pub fn particles_visible(&self) -> bool {
        self.progress > PARTICLE_THRESHOLD
    }

    /// Horizontal translation of the shimmer highlight for a sweep offset in
    /// `[-1, 1)` (see [`crate::effects::ShimmerSweep`]).
    #[must_use]
    pub fn shimmer_translation(&self, sweep_offset: f64) -> f64 {
        sweep_offset * self.fill_width()
    }

    /// Maximum vertical offset of particle `index`.
    #[must_use]
    pub fn particle_amplitude(&self, index: usize) -> f64 {
        (0.8 * index as f64).sin() * self.height * PARTICLE_SWING_FRACTION
    }

    /// Place the particles given each one's normalized swing in `[-1, 1]`.
    ///
    /// Particles are spread over the middle 80% of the filled part.
    #[must_use]
    pub fn particles(&self, swing: &[f64; PARTICLE_COUNT]) -> [Particle; PARTICLE_COUNT] {
        let fill = self.fill_width();
        let last = (PARTICLE_COUNT - 1) as f64;
        std::array::from_fn(|index| Particle {
            index,
            x: fill * 0.8_f64.mul_add(index as f64 / last, 0.1),
            y: swing[index] * self.particle_amplitude(index),
            hue: ParticleHue::for_index(index),
        })
    }
}
