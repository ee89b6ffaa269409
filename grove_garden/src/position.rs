// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted percentage positions and the slot identities they encode.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::Point;

/// Width of one island in stored-position x units.
///
/// The integer part of `x / ISLAND_STRIDE` is the island index and the
/// remainder is the local x percentage.
pub const ISLAND_STRIDE: f64 = 100.0;

/// The only spatial datum persisted on a thought.
///
/// `y` is the local slot's y percentage; `x` is
/// `island * 100 + local_x`. Records written by older free-placement schemes
/// use the same shape but need not align with any slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoredPosition {
    /// Island index times 100 plus the local x percentage.
    pub x: f64,
    /// Local y percentage.
    pub y: f64,
}

impl StoredPosition {
    /// Creates a stored position from raw components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Encodes a local percentage coordinate on `island`.
    #[must_use]
    pub fn encode(island: usize, local: Point) -> Self {
        Self {
            x: island as f64 * ISLAND_STRIDE + local.x,
            y: local.y,
        }
    }

    /// The island index encoded in `x`.
    ///
    /// Returns `None` for non-finite or negative `x`, which no encoder
    /// produces.
    #[must_use]
    pub fn island_index(self) -> Option<usize> {
        if !self.x.is_finite() || self.x < 0.0 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "floor of a finite non-negative value; saturates on overflow"
        )]
        let island = (self.x / ISLAND_STRIDE).floor() as usize;
        Some(island)
    }

    /// The local percentage coordinate, with the island index stripped.
    #[must_use]
    pub fn local(self) -> Point {
        let x = self.x - (self.x / ISLAND_STRIDE).floor() * ISLAND_STRIDE;
        Point::new(x, self.y)
    }
}

impl From<StoredPosition> for Point {
    fn from(pos: StoredPosition) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// Identity of one placement opportunity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotRef {
    /// Island index.
    pub island: usize,
    /// Slot index within the island.
    pub local: usize,
    /// `island * slots_per_island + local`.
    pub global: usize,
}

impl SlotRef {
    /// Splits a global slot index.
    #[must_use]
    pub fn from_global(global: usize, slots_per_island: usize) -> Self {
        Self {
            island: global / slots_per_island,
            local: global % slots_per_island,
            global,
        }
    }

    /// Combines an island and local slot index.
    #[must_use]
    pub fn from_parts(island: usize, local: usize, slots_per_island: usize) -> Self {
        Self {
            island,
            local,
            global: island * slots_per_island + local,
        }
    }
}

/// How a stored position relates to the slot grid.
///
/// This is derived by reverse lookup, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The position matches a configured slot.
    SlotAligned(SlotRef),
    /// A legacy free-form position; rendered as-is, ignored by allocation.
    FreeForm,
}

impl Placement {
    /// The matched slot, if any.
    #[must_use]
    pub fn slot(self) -> Option<SlotRef> {
        match self {
            Self::SlotAligned(slot) => Some(slot),
            Self::FreeForm => None,
        }
    }
}
