// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// The view transform published to renderers.
///
/// A world point `p` appears on screen at `p * scale + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Horizontal screen offset in pixels.
    pub x: f64,
    /// Vertical screen offset in pixels.
    pub y: f64,
}

impl CameraState {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Creates a camera state.
    #[must_use]
    pub const fn new(scale: f64, x: f64, y: f64) -> Self {
        Self { scale, x, y }
    }

    /// Screen offset as a vector.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// World → screen transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.offset()) * Affine::scale(self.scale)
    }

    /// Converts a world point to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.scale + self.x, world.y * self.scale + self.y)
    }

    /// Converts a screen point to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.x) / self.scale,
            (screen.y - self.y) / self.scale,
        )
    }

    /// Linear interpolation of every component; `t` is not clamped.
    #[must_use]
    pub fn lerp(&self, other: Self, t: f64) -> Self {
        Self {
            scale: self.scale + (other.scale - self.scale) * t,
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// `true` if every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0 && self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
