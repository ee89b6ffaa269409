// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::tween::Easing;

/// Tuning for a [`CameraController`](crate::CameraController).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Smallest scale reachable by wheel zoom or fitting.
    pub min_scale: f64,
    /// Largest scale reachable by wheel zoom.
    pub max_scale: f64,
    /// Multiplicative zoom step per wheel tick; values `<= 1` disable wheel zoom.
    pub wheel_step: f64,
    /// Free space kept on each side of the world when fitting, in screen pixels.
    pub fit_margin: f64,
    /// Upper bound on the scale chosen by a fit.
    pub max_fit_scale: f64,
    /// Duration of the transition used by
    /// [`CameraController::animate_fit`](crate::CameraController::animate_fit).
    pub expansion_duration_ms: f64,
    /// Easing for programmatic transitions.
    pub easing: Easing,
}

impl CameraConfig {
    /// Returns a copy with different scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with a different wheel step.
    #[must_use]
    pub fn with_wheel_step(mut self, wheel_step: f64) -> Self {
        self.wheel_step = wheel_step;
        self
    }

    /// Returns a copy with a different fit margin.
    #[must_use]
    pub fn with_fit_margin(mut self, fit_margin: f64) -> Self {
        self.fit_margin = fit_margin;
        self
    }

    /// Returns a copy with a different expansion transition.
    #[must_use]
    pub fn with_expansion(mut self, duration_ms: f64, easing: Easing) -> Self {
        self.expansion_duration_ms = duration_ms;
        self.easing = easing;
        self
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.15,
            max_scale: 2.0,
            wheel_step: 1.08,
            fit_margin: 48.0,
            max_fit_scale: 1.0,
            expansion_duration_ms: 600.0,
            easing: Easing::EaseInOutCubic,
        }
    }
}
