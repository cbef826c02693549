//! Easing curves.
//!
//! Each curve maps normalized time `t` in `0.0..=1.0` to normalized
//! progress; inputs outside the range are clamped. All curves satisfy
//! `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.

use std::f64::consts::FRAC_PI_2;

/// An easing curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Quadratic deceleration.
    QuadOut,
    /// Quintic deceleration. Fast start, long settle; the slideshow's
    /// panel moves use this.
    #[default]
    QuintOut,
    /// Sinusoidal ease-in-out.
    SineInOut,
}

impl Ease {
    /// Evaluate the curve at normalized time `t` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuintOut => 1.0 - (1.0 - t).powi(5),
            Self::SineInOut => 0.5 * (1.0 - (t * 2.0 * FRAC_PI_2).cos()),
        }
    }
}
