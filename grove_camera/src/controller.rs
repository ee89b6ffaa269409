// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::config::CameraConfig;
use crate::pan::BackgroundPan;
use crate::state::CameraState;
use crate::tween::CameraTween;
use crate::viewport::Viewport;

/// What the camera is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    /// No gesture or transition in progress.
    Idle,
    /// Following a background drag.
    Panning,
    /// Running a programmatic transition.
    Animating,
}

/// What a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty background; starts a pan.
    Background,
    /// A thought marker; left to the host.
    Marker,
}

/// Owns the garden's view transform and every way it changes.
///
/// The controller is the single source of truth for the [`CameraState`]:
/// wheel and drag input, fitting and transitions all write through it, and
/// each published change bumps [`revision`](Self::revision) so renderers can
/// tell when to redraw.
///
/// Only one transition runs at a time. Starting another replaces it, picking
/// up from whatever state the last [`tick`](Self::tick) published, so the
/// motion changes direction without jumping. Wheel input and background
/// pointer-downs cancel a running transition before they apply.
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    viewport: Viewport,
    pan: BackgroundPan,
    tween: Option<CameraTween>,
    revision: u64,
}

impl CameraController {
    /// Creates a controller for a screen of `view_size`.
    ///
    /// The camera starts at the identity transform; call [`fit`](Self::fit)
    /// once the world is known.
    #[must_use]
    pub fn new(config: CameraConfig, view_size: Size) -> Self {
        let mut viewport = Viewport::new(view_size);
        viewport.set_zoom_limits(config.min_scale, config.max_scale);
        Self {
            config,
            viewport,
            pan: BackgroundPan::default(),
            tween: None,
            revision: 0,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// The underlying viewport, for coordinate conversion and culling.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The published view transform.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.viewport.state()
    }

    /// Counter bumped every time the published state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        if self.tween.is_some() {
            CameraMode::Animating
        } else if self.pan.is_active() {
            CameraMode::Panning
        } else {
            CameraMode::Idle
        }
    }

    /// The running transition, if any.
    #[must_use]
    pub fn tween(&self) -> Option<&CameraTween> {
        self.tween.as_ref()
    }

    /// Records a new screen size. The transform is left as it is.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport.set_view_size(size);
    }

    /// The transform that would fit `world` on screen, if the screen has
    /// been measured.
    #[must_use]
    pub fn fit_target(&self, world: Rect) -> Option<CameraState> {
        self.viewport
            .fit_transform(world, self.config.fit_margin, self.config.max_fit_scale)
    }

    /// Fits `world` on screen immediately, cancelling any transition.
    ///
    /// Does nothing and returns `false` while the screen has zero area; call
    /// again once a real size has been measured.
    pub fn fit(&mut self, world: Rect) -> bool {
        let Some(target) = self.fit_target(world) else {
            tracing::debug!(
                width = self.viewport.view_size().width,
                height = self.viewport.view_size().height,
                "camera fit deferred until the viewport has an area"
            );
            return false;
        };
        self.tween = None;
        self.publish(target);
        true
    }

    /// Starts a transition to `target` at `now_ms`.
    ///
    /// Any running transition is replaced and any drag is ended. The target
    /// scale is clamped to the configured limits. A non-positive duration
    /// applies `target` at once.
    pub fn animate_to(&mut self, target: CameraState, duration_ms: f64, now_ms: f64) {
        if !target.is_valid() {
            return;
        }
        let (min_scale, max_scale) = self.viewport.zoom_limits();
        let target = CameraState {
            scale: target.scale.clamp(min_scale, max_scale),
            ..target
        };
        self.pan.end();
        if self.tween.take().is_some() {
            tracing::debug!("camera transition replaced");
        }
        let tween = CameraTween::new(
            self.state(),
            target,
            now_ms,
            duration_ms,
            self.config.easing,
        );
        if tween.is_finished(now_ms) {
            self.publish(target);
            return;
        }
        tracing::debug!(
            scale = target.scale,
            x = target.x,
            y = target.y,
            duration_ms = tween.duration_ms(),
            "camera transition started"
        );
        self.tween = Some(tween);
    }

    /// Animates to the fit of `world` over the configured expansion duration.
    ///
    /// Returns `false` if the fit is deferred because the screen has no area.
    pub fn animate_fit(&mut self, world: Rect, now_ms: f64) -> bool {
        match self.fit_target(world) {
            Some(target) => {
                self.animate_to(target, self.config.expansion_duration_ms, now_ms);
                true
            }
            None => false,
        }
    }

    /// Advances the running transition to `now_ms`.
    ///
    /// Returns the newly published state, or `None` when nothing is running.
    /// The final tick sets the target exactly and returns to idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<CameraState> {
        let tween = self.tween?;
        let state = tween.sample(now_ms);
        if tween.is_finished(now_ms) {
            self.tween = None;
            tracing::debug!("camera transition finished");
        }
        self.publish(state);
        Some(state)
    }

    /// Stops a running transition where the last tick left it.
    pub fn cancel_animation(&mut self) -> bool {
        self.tween.take().is_some()
    }

    /// Zooms one wheel tick around `pointer`, in screen pixels.
    ///
    /// Negative `delta_y` (scrolling up) zooms in. The result is clamped to
    /// the configured scale limits. Returns `true` if the state changed.
    pub fn on_wheel(&mut self, pointer: Point, delta_y: f64) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() || self.config.wheel_step <= 1.0 {
            return false;
        }
        self.cancel_animation();
        let factor = if delta_y < 0.0 {
            self.config.wheel_step
        } else {
            self.config.wheel_step.recip()
        };
        let changed = self.viewport.zoom_about_view_point(pointer, factor);
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Handles a pointer-down. Only the background starts a pan.
    ///
    /// Returns `true` if a pan started.
    pub fn on_pointer_down(&mut self, pos: Point, target: PointerTarget) -> bool {
        if target != PointerTarget::Background {
            return false;
        }
        self.cancel_animation();
        self.pan.begin(pos, self.state());
        true
    }

    /// Handles a pointer move; pans while a drag is active.
    ///
    /// The world point grabbed on pointer-down stays under the pointer.
    /// Returns `true` if the state changed.
    pub fn on_pointer_move(&mut self, pos: Point) -> bool {
        let scale = self.state().scale;
        let Some(offset) = self.pan.offset_at(pos, scale) else {
            return false;
        };
        let before = self.revision;
        self.publish(CameraState::new(scale, offset.x, offset.y));
        self.revision != before
    }

    /// Handles a pointer release, ending any pan.
    pub fn on_pointer_up(&mut self) {
        self.pan.end();
    }

    /// Handles the pointer leaving the surface, ending any pan.
    pub fn on_pointer_leave(&mut self) {
        self.pan.end();
    }

    fn publish(&mut self, state: CameraState) {
        if self.state() != state {
            self.viewport.set_state(state);
            self.revision += 1;
        }
    }
}
