// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed set of placement slots on a single island.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

/// Tolerance, in percentage points per axis, used when matching a stored
/// position back onto a slot.
pub const SLOT_MATCH_EPSILON: f64 = 1.0;

/// Minimum per-axis separation two slots need so that matching with
/// [`SLOT_MATCH_EPSILON`] can never resolve to the wrong slot.
pub const MIN_SLOT_SEPARATION: f64 = 2.0 * SLOT_MATCH_EPSILON;

/// The observed 12-slot island, in source-art percentages.
///
/// Order is identity: entries may be appended but never reordered, since a
/// slot's index is recovered from persisted coordinates.
pub const DEFAULT_SLOTS: [Point; 12] = [
    Point::new(22.0, 30.0),
    Point::new(38.0, 24.0),
    Point::new(55.0, 28.0),
    Point::new(72.0, 33.0),
    Point::new(18.0, 48.0),
    Point::new(34.0, 44.0),
    Point::new(50.0, 47.0),
    Point::new(66.0, 51.0),
    Point::new(80.0, 46.0),
    Point::new(28.0, 65.0),
    Point::new(46.0, 68.0),
    Point::new(64.0, 70.0),
];

/// Error returned by [`SlotRegistry::new`] for an unusable slot list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotRegistryError {
    /// The list contained no slots.
    Empty,
    /// A slot coordinate is non-finite or outside `[0, 100)`.
    OutOfRange {
        /// Index of the offending slot.
        index: usize,
        /// The rejected coordinate.
        slot: Point,
    },
    /// Two slots are closer than [`MIN_SLOT_SEPARATION`] in both axes.
    TooClose {
        /// Index of the earlier slot.
        first: usize,
        /// Index of the later slot.
        second: usize,
    },
}

impl fmt::Display for SlotRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "slot registry must contain at least one slot"),
            Self::OutOfRange { index, slot } => write!(
                f,
                "slot {index} at ({}, {}) lies outside the 0..100 percentage range",
                slot.x, slot.y
            ),
            Self::TooClose { first, second } => write!(
                f,
                "slots {first} and {second} are within {MIN_SLOT_SEPARATION} points of each other"
            ),
        }
    }
}

impl core::error::Error for SlotRegistryError {}

/// Ordered slot positions available on every island.
///
/// Each slot is a pair of percentages in the island's full source-art space.
/// A slot's index within the registry is its local slot index.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotRegistry {
    slots: Vec<Point>,
}

impl SlotRegistry {
    /// Builds a registry from a custom slot list.
    ///
    /// Every coordinate must be finite and within `[0, 100)`, and no two slots
    /// may lie within [`MIN_SLOT_SEPARATION`] of each other in both axes.
    pub fn new(slots: impl IntoIterator<Item = Point>) -> Result<Self, SlotRegistryError> {
        let slots: Vec<Point> = slots.into_iter().collect();
        if slots.is_empty() {
            return Err(SlotRegistryError::Empty);
        }
        for (index, slot) in slots.iter().enumerate() {
            if !in_percentage_range(slot.x) || !in_percentage_range(slot.y) {
                return Err(SlotRegistryError::OutOfRange { index, slot: *slot });
            }
        }
        for (first, a) in slots.iter().enumerate() {
            for (offset, b) in slots[first + 1..].iter().enumerate() {
                if (a.x - b.x).abs() < MIN_SLOT_SEPARATION
                    && (a.y - b.y).abs() < MIN_SLOT_SEPARATION
                {
                    return Err(SlotRegistryError::TooClose {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }
        Ok(Self { slots })
    }

    /// Number of slots on one island.
    #[must_use]
    pub fn slots_per_island(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot at `local`, if it exists.
    #[must_use]
    pub fn get(&self, local: usize) -> Option<Point> {
        self.slots.get(local).copied()
    }

    /// Returns the slot at `local`.
    ///
    /// # Panics
    ///
    /// Panics if `local >= self.slots_per_island()`.
    #[must_use]
    pub fn slot(&self, local: usize) -> Point {
        assert!(
            local < self.slots.len(),
            "local slot index {local} out of range for {} slots per island",
            self.slots.len()
        );
        self.slots[local]
    }

    /// All slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[Point] {
        &self.slots
    }

    /// Finds the slot matching a local percentage coordinate within
    /// [`SLOT_MATCH_EPSILON`] on both axes.
    #[must_use]
    pub fn find(&self, local: Point) -> Option<usize> {
        self.slots.iter().position(|slot| {
            (slot.x - local.x).abs() < SLOT_MATCH_EPSILON
                && (slot.y - local.y).abs() < SLOT_MATCH_EPSILON
        })
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS.to_vec(),
        }
    }
}

fn in_percentage_range(v: f64) -> bool {
    v.is_finite() && (0.0..100.0).contains(&v)
}
