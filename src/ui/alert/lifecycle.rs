// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine and the dismiss transition.

use crate::config::{DEFAULT_DISMISS_DURATION_MS, DISMISS_END_SCALE};
use crate::ui::design_tokens::opacity;
use std::time::{Duration, Instant};

/// Where an alert is in its single-use lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Constructed, not yet shown.
    #[default]
    Unpresented,
    /// Attached to a surface and interactive.
    Presented,
    /// Playing the shrink-and-fade transition.
    Dismissing { started: Instant },
    /// Detached; the completion has run. Terminal.
    Dismissed,
}

/// Visual state of the card at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub scale: f32,
    pub opacity: f32,
}

impl Appearance {
    /// Fully visible at natural size.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        opacity: opacity::OPAQUE,
    };
}

impl Default for Appearance {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The shrink-and-fade played by `hide`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissAnimation {
    duration: Duration,
    end_scale: f32,
}

impl DismissAnimation {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            end_scale: DISMISS_END_SCALE,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Appearance after `elapsed`, with ease-in-out timing.
    #[must_use]
    pub fn appearance(&self, elapsed: Duration) -> Appearance {
        let t = ease_in_out(self.progress(elapsed));
        Appearance {
            scale: 1.0 + (self.end_scale - 1.0) * t,
            opacity: opacity::OPAQUE + (opacity::TRANSPARENT - opacity::OPAQUE) * t,
        }
    }
}

impl Default for DismissAnimation {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DISMISS_DURATION_MS))
    }
}

/// Cubic ease-in-out.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
