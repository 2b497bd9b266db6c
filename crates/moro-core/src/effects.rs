//! Decorative animation producers for the loading overlay.
//!
//! Each effect is a pure function of elapsed time, so the UI can drive them
//! from any timer and tests can sample them at exact instants. They know
//! nothing about load progress.

use std::time::Duration;

use crate::progress::PARTICLE_COUNT;

/// Ease-in-out curve on `[0, 1]` (smoothstep).
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * 2.0f64.mul_add(-t, 3.0)
}

/// Auto-reversing ramp: 0 → 1 over one leg, back to 0 over the next.
fn ping_pong(elapsed: f64, leg: f64) -> f64 {
    if leg <= 0.0 {
        return 0.0;
    }
    let cycle = elapsed.max(0.0) / leg;
    let frac = cycle.fract();
    if (cycle.floor() as u64) % 2 == 0 {
        frac
    } else {
        1.0 - frac
    }
}

/// Highlight sweeping across the filled part of the bar, left to right,
/// restarting without reversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerSweep {
    /// Seconds per sweep.
    pub period: f64,
}

impl Default for ShimmerSweep {
    fn default() -> Self {
        Self { period: 2.0 }
    }
}

impl ShimmerSweep {
    /// Sweep offset in fill widths, in `[-1, 1)`.
    #[must_use]
    pub fn offset_at(&self, elapsed: f64) -> f64 {
        if self.period <= 0.0 {
            return -1.0;
        }
        let phase = elapsed.max(0.0).rem_euclid(self.period) / self.period;
        2.0f64.mul_add(phase, -1.0)
    }
}

/// Vertical oscillation of the particles.
///
/// Particle `i` swings with a leg of `base_leg + i * leg_step` seconds after
/// a start delay of `i * delay_step` seconds; later particles are slower, so
/// the row never moves in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleOscillation {
    /// Leg duration of particle 0, in seconds.
    pub base_leg: f64,
    /// Extra leg duration per particle index.
    pub leg_step: f64,
    /// Start delay per particle index.
    pub delay_step: f64,
}

impl Default for ParticleOscillation {
    fn default() -> Self {
        Self {
            base_leg: 2.0,
            leg_step: 0.2,
            delay_step: 0.1,
        }
    }
}

impl ParticleOscillation {
    /// Normalized swing of particle `index` in `[-1, 1]`; starts at -1.
    #[must_use]
    pub fn swing_at(&self, index: usize, elapsed: f64) -> f64 {
        let index = index as f64;
        let local = self.delay_step.mul_add(-index, elapsed);
        if local <= 0.0 {
            return -1.0;
        }
        let leg = self.leg_step.mul_add(index, self.base_leg);
        2.0f64.mul_add(ease_in_out(ping_pong(local, leg)), -1.0)
    }

    /// Swing of every particle at once.
    #[must_use]
    pub fn swings_at(&self, elapsed: f64) -> [f64; PARTICLE_COUNT] {
        std::array::from_fn(|index| self.swing_at(index, elapsed))
    }
}

/// Breathing scale applied to the logo above the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPulse {
    /// Smallest scale.
    pub min_scale: f64,
    /// Largest scale.
    pub max_scale: f64,
    /// Seconds from smallest to largest.
    pub leg: f64,
}

impl Default for LogoPulse {
    fn default() -> Self {
        Self {
            min_scale: 0.82,
            max_scale: 1.02,
            leg: 1.1,
        }
    }
}

impl LogoPulse {
    /// Scale factor at `elapsed` seconds.
    #[must_use]
    pub fn scale_at(&self, elapsed: f64) -> f64 {
        let eased = ease_in_out(ping_pong(elapsed, self.leg));
        (self.max_scale - self.min_scale).mul_add(eased, self.min_scale)
    }
}

/// One sampled instant of every decorative effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectFrame {
    /// Shimmer sweep offset, see [`ShimmerSweep::offset_at`].
    pub shimmer_offset: f64,
    /// Per-particle swing, see [`ParticleOscillation::swing_at`].
    pub particle_swing: [f64; PARTICLE_COUNT],
    /// Logo scale, see [`LogoPulse::scale_at`].
    pub logo_scale: f64,
}

/// Animation clock shared by the decorative effects.
///
/// Advanced by the UI's frame loop; restartable when the overlay remounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectClock {
    elapsed: f64,
    shimmer: ShimmerSweep,
    particles: ParticleOscillation,
    pulse: LogoPulse,
}

impl EffectClock {
    /// Clock at zero with the default effect timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the clock was (re)started.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Move the clock forward.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f64();
    }

    /// Jump back to the first frame.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Sample every effect at the current time.
    #[must_use]
    pub fn frame(&self) -> EffectFrame {
        self.frame_at(self.elapsed)
    }

    /// Sample every effect at an arbitrary time.
    #[must_use]
    pub fn frame_at(&self, elapsed: f64) -> EffectFrame {
        EffectFrame {
            shimmer_offset: self.shimmer.offset_at(elapsed),
            particle_swing: self.particles.swings_at(elapsed),
            logo_scale: self.pulse.scale_at(elapsed),
        }
    }
}
