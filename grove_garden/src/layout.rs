// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid placement of islands in world space.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size};

/// World-space bounding box of one island.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandRect {
    /// Island index.
    pub index: usize,
    /// Top-left corner in world pixels.
    pub origin: Point,
    /// Island size in world pixels; identical for every island.
    pub size: Size,
}

impl IslandRect {
    /// The island as a [`Rect`].
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Row-major grid that tiles islands in world space.
///
/// Islands fill `columns` cells per row, separated by `gap` pixels on both
/// axes; a new row starts when the column wraps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandGrid {
    island_size: Size,
    gap: f64,
    columns: usize,
}

impl IslandGrid {
    /// Creates a grid.
    ///
    /// `columns` is raised to at least 1 and `gap` to at least 0.
    #[must_use]
    pub fn new(island_size: Size, gap: f64, columns: usize) -> Self {
        Self {
            island_size,
            gap: gap.max(0.0),
            columns: columns.max(1),
        }
    }

    /// Size of every island in world pixels.
    #[must_use]
    pub fn island_size(&self) -> Size {
        self.island_size
    }

    /// Gap between neighbouring islands in world pixels.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of islands per row.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Top-left corner of island `index` in world pixels.
    #[must_use]
    pub fn island_origin(&self, index: usize) -> Point {
        let col = index % self.columns;
        let row = index / self.columns;
        Point::new(
            col as f64 * (self.island_size.width + self.gap),
            row as f64 * (self.island_size.height + self.gap),
        )
    }

    /// World-space rectangle of island `index`.
    #[must_use]
    pub fn island_rect(&self, index: usize) -> IslandRect {
        IslandRect {
            index,
            origin: self.island_origin(index),
            size: self.island_size,
        }
    }

    /// Rectangles for islands `0..island_count`.
    #[must_use]
    pub fn island_rects(&self, island_count: usize) -> Vec<IslandRect> {
        (0..island_count).map(|i| self.island_rect(i)).collect()
    }

    /// Bounding size of `island_count` islands, gaps included, no outer margin.
    #[must_use]
    pub fn world_bounds(&self, island_count: usize) -> Size {
        if island_count == 0 {
            return Size::ZERO;
        }
        let cols = island_count.min(self.columns);
        let rows = island_count.div_ceil(self.columns);
        Size::new(
            span(cols, self.island_size.width, self.gap),
            span(rows, self.island_size.height, self.gap),
        )
    }

    /// Bounding rectangle of `island_count` islands, anchored at the world origin.
    #[must_use]
    pub fn world_rect(&self, island_count: usize) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.world_bounds(island_count))
    }

    /// Index of the island containing `world`, if any of the first
    /// `island_count` islands does. Points in the gaps hit nothing.
    #[must_use]
    pub fn island_at(&self, world: Point, island_count: usize) -> Option<usize> {
        let col = cell(world.x, self.island_size.width, self.gap)?;
        let row = cell(world.y, self.island_size.height, self.gap)?;
        if col >= self.columns {
            return None;
        }
        let index = row.checked_mul(self.columns)?.checked_add(col)?;
        (index < island_count).then_some(index)
    }
}

impl Default for IslandGrid {
    fn default() -> Self {
        Self::new(Size::new(1200.0, 900.0), 160.0, 3)
    }
}

fn span(n: usize, extent: f64, gap: f64) -> f64 {
    n as f64 * extent + n.saturating_sub(1) as f64 * gap
}

fn cell(v: f64, extent: f64, gap: f64) -> Option<usize> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    let pitch = extent + gap;
    let n = (v / pitch).floor();
    if v - n * pitch >= extent {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "floor of a finite non-negative value"
    )]
    Some(n as usize)
}
