// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Description of the artwork an island is drawn over.

use kurbo::{Point, Rect, Size};

/// The source asset behind every island and the crop of it that is shown.
///
/// Slot percentages are authored against the full source asset, while the
/// island rectangle in world space shows only `crop`. Mapping a slot to world
/// space therefore goes through source pixels first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandArt {
    source_size: Size,
    crop: Rect,
}

impl IslandArt {
    /// Creates an art description.
    ///
    /// # Panics
    ///
    /// Panics if `crop` has no area.
    #[must_use]
    pub fn new(source_size: Size, crop: Rect) -> Self {
        let crop = crop.abs();
        assert!(
            crop.width() > 0.0 && crop.height() > 0.0,
            "island art crop must have a positive area, got {crop:?}"
        );
        Self { source_size, crop }
    }

    /// Full size of the source asset, in source pixels.
    #[must_use]
    pub fn source_size(&self) -> Size {
        self.source_size
    }

    /// The visible sub-region of the source asset, in source pixels.
    #[must_use]
    pub fn crop(&self) -> Rect {
        self.crop
    }

    /// Converts a local percentage coordinate into source-art pixels.
    #[must_use]
    pub fn source_point(&self, pct: Point) -> Point {
        Point::new(
            pct.x / 100.0 * self.source_size.width,
            pct.y / 100.0 * self.source_size.height,
        )
    }

    /// Converts a local percentage coordinate into a fraction of the crop.
    ///
    /// `(0, 0)` is the crop's top-left and `(1, 1)` its bottom-right. Points
    /// outside the crop produce fractions outside `0..=1`.
    #[must_use]
    pub fn crop_fraction(&self, pct: Point) -> Point {
        let src = self.source_point(pct);
        Point::new(
            (src.x - self.crop.x0) / self.crop.width(),
            (src.y - self.crop.y0) / self.crop.height(),
        )
    }
}

impl Default for IslandArt {
    fn default() -> Self {
        Self::new(
            Size::new(2000.0, 1500.0),
            Rect::new(200.0, 150.0, 1800.0, 1350.0),
        )
    }
}
