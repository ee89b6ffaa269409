// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based interpolation between two camera states.
//!
//! Time is supplied by the host as milliseconds on any monotonic clock
//! (for example a `requestAnimationFrame` timestamp); this module never reads
//! a clock itself.

use crate::state::CameraState;

/// Easing curve applied to normalized tween progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, fastest in the middle.
    #[default]
    EaseInOutCubic,
}

impl Easing {
    /// Maps progress `t` in `0..=1` onto eased progress in `0..=1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A single in-flight transition from one camera state to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTween {
    from: CameraState,
    to: CameraState,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl CameraTween {
    /// Creates a tween starting at `start_ms`.
    ///
    /// A non-positive or non-finite duration yields a tween that is already
    /// finished.
    #[must_use]
    pub fn new(
        from: CameraState,
        to: CameraState,
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        let duration_ms = if duration_ms.is_finite() { duration_ms.max(0.0) } else { 0.0 };
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// State the tween started from.
    #[must_use]
    pub fn from(&self) -> CameraState {
        self.from
    }

    /// State the tween ends at.
    #[must_use]
    pub fn target(&self) -> CameraState {
        self.to
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Linear progress in `0..=1` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// `true` once `now_ms` has reached the end of the tween.
    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Interpolated state at `now_ms`; exactly the target once finished.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> CameraState {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraTween, Easing};
    use crate::state::CameraState;

    #[test]
    fn easing_endpoints_and_midpoint() {
        for easing in [Easing::Linear, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        }
        assert!(Easing::EaseInOutCubic.apply(0.25) < 0.25);
        assert!(Easing::EaseInOutCubic.apply(0.75) > 0.75);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = Easing::EaseInOutCubic.apply(f64::from(i) / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn sample_lands_exactly_on_target() {
        let from = CameraState::new(1.0, 0.0, 0.0);
        let to = CameraState::new(0.3333, 17.25, -3.5);
        let tween = CameraTween::new(from, to, 100.0, 600.0, Easing::EaseInOutCubic);
        assert_eq!(tween.sample(100.0), from);
        assert!(!tween.is_finished(699.0));
        assert_eq!(tween.sample(700.0), to);
        assert_eq!(tween.sample(10_000.0), to);
        assert!(tween.is_finished(700.0));
    }

    #[test]
    fn zero_duration_is_already_finished() {
        let to = CameraState::new(2.0, 1.0, 1.0);
        let tween = CameraTween::new(CameraState::IDENTITY, to, 0.0, 0.0, Easing::Linear);
        assert!(tween.is_finished(0.0));
        assert_eq!(tween.sample(0.0), to);

        let nan = CameraTween::new(CameraState::IDENTITY, to, 0.0, f64::NAN, Easing::Linear);
        assert!(nan.is_finished(0.0));
    }

    #[test]
    fn time_before_start_holds_the_origin() {
        let to = CameraState::new(2.0, 10.0, 10.0);
        let tween = CameraTween::new(CameraState::IDENTITY, to, 50.0, 100.0, Easing::Linear);
        assert_eq!(tween.sample(0.0), CameraState::IDENTITY);
        assert_eq!(tween.sample(100.0), CameraState::new(1.5, 5.0, 5.0));
    }
}
