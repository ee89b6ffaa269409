// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::state::CameraState;

/// Pan/zoom viewport over the garden's world plane.
///
/// `Viewport` tracks the measured screen size and a uniform pan+zoom
/// transform mapping world pixels onto the screen. It can be used to:
/// - Convert points and rectangles between world and screen coordinates.
/// - Pan, and zoom around a chosen anchor point.
/// - Compute the transform that fits a world rectangle into the screen.
///
/// The screen origin is the top-left of the drawing surface.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_size: Size,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport of `view_size` with zoom `1.0` and no pan.
    ///
    /// Zoom is clamped to `[1e-3, 1e3]` until
    /// [`set_zoom_limits`](Self::set_zoom_limits) says otherwise.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let mut vp = Self {
            view_size,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Measured screen size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the measured screen size. Zoom and pan are unchanged.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// `true` once the screen has been measured with a positive area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.view_size.width > 0.0 && self.view_size.height > 0.0
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Minimum and maximum zoom factors.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`, and the
    /// current zoom is clamped into it.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        let clamped = self.zoom.clamp(min_zoom, max_zoom);
        if clamped != self.zoom {
            self.zoom = clamped;
            self.rebuild_transforms();
        }
    }

    /// The current transform as a [`CameraState`].
    #[must_use]
    pub fn state(&self) -> CameraState {
        CameraState::new(self.zoom, self.pan.x, self.pan.y)
    }

    /// Replaces zoom and pan. Invalid states are ignored.
    ///
    /// The zoom limits are not applied, so a tween may pass through any
    /// positive scale it was given.
    pub fn set_state(&mut self, state: CameraState) {
        if !state.is_valid() {
            return;
        }
        self.zoom = state.scale;
        self.pan = state.offset();
        self.rebuild_transforms();
    }

    /// Pans by a delta in screen pixels.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
    }

    /// Zooms by `factor` around a screen-space anchor.
    ///
    /// The world point under `anchor_view` stays under it. Returns `false` if
    /// the zoom did not change, for example because a limit was reached.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return false;
        }

        let old_world = self.view_to_world_point(anchor_view);
        self.zoom = new_zoom;
        self.rebuild_transforms();
        let new_anchor_view = self.world_to_view_point(old_world);
        self.pan_by_view(anchor_view - new_anchor_view);
        true
    }

    /// The transform that fits `rect` into the screen, without applying it.
    ///
    /// `margin` pixels are kept free on each side. The scale never exceeds
    /// `max_fit_zoom` (nor the zoom limits) and never drops below the minimum
    /// zoom. The rectangle is centred. Returns `None` while the screen has no
    /// area or when `rect` is empty.
    #[must_use]
    pub fn fit_transform(
        &self,
        rect: Rect,
        margin: f64,
        max_fit_zoom: f64,
    ) -> Option<CameraState> {
        if !self.has_area() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        let margin = margin.max(0.0);
        let avail_w = inset(self.view_size.width, margin);
        let avail_h = inset(self.view_size.height, margin);

        let sx = avail_w / rect.width();
        let sy = avail_h / rect.height();
        let zoom = sx
            .min(sy)
            .min(max_fit_zoom)
            .min(self.max_zoom)
            .max(self.min_zoom);

        let view_center = self.view_size.to_vec2() * 0.5;
        let pan = view_center - rect.center().to_vec2() * zoom;
        let state = CameraState::new(zoom, pan.x, pan.y);
        state.is_valid().then_some(state)
    }

    /// Fits `rect` into the screen immediately; see
    /// [`fit_transform`](Self::fit_transform). Returns `false` if deferred.
    pub fn fit_rect(&mut self, rect: Rect, margin: f64, max_fit_zoom: f64) -> bool {
        match self.fit_transform(rect, margin, max_fit_zoom) {
            Some(state) => {
                self.set_state(state);
                true
            }
            None => false,
        }
    }

    /// The world rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_size.to_rect())
    }

    /// Converts a world point into screen pixels.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world rectangle into screen pixels.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned uniform zoom keeps corners ordered.
        Rect::from_points(
            self.world_to_view * rect.origin(),
            self.world_to_view * Point::new(rect.x1, rect.y1),
        )
    }

    /// Converts a screen rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_world * rect.origin(),
            self.view_to_world * Point::new(rect.x1, rect.y1),
        )
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }
}

fn inset(extent: f64, margin: f64) -> f64 {
    let inner = extent - 2.0 * margin;
    if inner > 0.0 { inner } else { extent }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::Viewport;
    use crate::state::CameraState;

    #[test]
    fn basic_world_view_roundtrip() {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        vp.set_state(CameraState::new(0.4, 12.0, -30.0));

        let world_pt = Point::new(10.0, -5.0);
        let view_pt = vp.world_to_view_point(world_pt);
        let world_back = vp.view_to_world_point(view_pt);
        assert!((world_back.x - world_pt.x).abs() < 1e-9);
        assert!((world_back.y - world_pt.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        vp.pan_by_view(Vec2::new(35.0, -12.0));

        let anchor_view = Point::new(612.0, 141.0);
        let before = vp.view_to_world_point(anchor_view);

        assert!(vp.zoom_about_view_point(anchor_view, 2.0));
        let after = vp.view_to_world_point(anchor_view);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_stops_at_limits() {
        let mut vp = Viewport::new(Size::new(100.0, 100.0));
        vp.set_zoom_limits(0.5, 2.0);
        assert!(vp.zoom_about_view_point(Point::ZERO, 10.0));
        assert_eq!(vp.zoom(), 2.0);
        assert!(!vp.zoom_about_view_point(Point::ZERO, 1.5));
        assert!(!vp.zoom_about_view_point(Point::ZERO, -1.0));
        assert!(!vp.zoom_about_view_point(Point::ZERO, f64::NAN));
    }

    #[test]
    fn fit_centres_and_respects_margin() {
        let vp = Viewport::new(Size::new(1000.0, 500.0));
        let world = Rect::new(0.0, 0.0, 2000.0, 800.0);
        let state = vp.fit_transform(world, 50.0, 1.0).unwrap();

        // Width-limited: (1000 - 100) / 2000 = 0.45.
        assert!((state.scale - 0.45).abs() < 1e-12);
        let centre = state.world_to_screen(world.center());
        assert!((centre.x - 500.0).abs() < 1e-9);
        assert!((centre.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn fit_never_zooms_past_native_size() {
        let mut vp = Viewport::new(Size::new(1000.0, 1000.0));
        vp.set_zoom_limits(0.15, 2.0);
        let state = vp
            .fit_transform(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 1.0)
            .unwrap();
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn fit_never_goes_below_min_zoom() {
        let mut vp = Viewport::new(Size::new(100.0, 100.0));
        vp.set_zoom_limits(0.15, 2.0);
        let state = vp
            .fit_transform(Rect::new(0.0, 0.0, 100_000.0, 100.0), 0.0, 1.0)
            .unwrap();
        assert_eq!(state.scale, 0.15);
    }

    #[test]
    fn fit_is_deferred_without_area() {
        let mut vp = Viewport::new(Size::ZERO);
        let before = vp.state();
        assert_eq!(
            vp.fit_transform(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 1.0),
            None
        );
        assert!(!vp.fit_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 1.0));
        assert_eq!(vp.state(), before);

        vp.set_view_size(Size::new(300.0, 0.0));
        assert!(!vp.fit_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 1.0));
    }

    #[test]
    fn visible_rect_tracks_transform() {
        let mut vp = Viewport::new(Size::new(200.0, 100.0));
        vp.set_state(CameraState::new(2.0, -100.0, 0.0));
        let visible = vp.visible_world_rect();
        assert!((visible.x0 - 50.0).abs() < 1e-9);
        assert!((visible.x1 - 150.0).abs() < 1e-9);
        assert!((visible.y1 - 50.0).abs() < 1e-9);

        let back = vp.world_to_view_rect(visible);
        assert!((back.width() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_limits_clamp_the_current_zoom() {
        let mut vp = Viewport::new(Size::new(400.0, 300.0));
        vp.set_zoom_limits(2.0, 0.5);
        assert_eq!(vp.zoom_limits(), (0.5, 2.0));
        assert_eq!(vp.zoom(), 1.0);
        vp.set_zoom_limits(1.5, 3.0);
        assert_eq!(vp.zoom(), 1.5);
    }

    #[test]
    fn invalid_states_are_ignored() {
        let mut vp = Viewport::new(Size::new(10.0, 10.0));
        vp.set_state(CameraState::new(0.0, 1.0, 1.0));
        assert_eq!(vp.state(), CameraState::IDENTITY);
    }
}
