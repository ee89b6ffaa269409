// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grab-and-drag panning over the garden background.

use kurbo::{Point, Vec2};

use crate::state::CameraState;

/// A background pan in progress.
///
/// The pan remembers the world point that was under the pointer when it
/// began and keeps that point under the pointer as it moves. A wheel zoom
/// in the middle of a pan therefore leaves the grabbed point where it is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct BackgroundPan {
    grab: Option<Point>,
}

impl BackgroundPan {
    /// Grabs the world point under `pointer`, replacing any earlier grab.
    pub(crate) fn begin(&mut self, pointer: Point, state: CameraState) {
        self.grab = Some(state.screen_to_world(pointer));
    }

    /// Screen offset that puts the grabbed point under `pointer` at `scale`.
    pub(crate) fn offset_at(&self, pointer: Point, scale: f64) -> Option<Vec2> {
        let grab = self.grab?;
        Some(pointer.to_vec2() - grab.to_vec2() * scale)
    }

    pub(crate) fn end(&mut self) {
        self.grab = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.grab.is_some()
    }
}
