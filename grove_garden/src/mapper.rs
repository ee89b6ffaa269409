// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between stored percentages, source-art pixels and world pixels.

use kurbo::Point;

use crate::art::IslandArt;
use crate::layout::IslandGrid;
use crate::position::{Placement, SlotRef, StoredPosition};
use crate::slots::SlotRegistry;

/// A slot resolved into every form a caller may need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotInfo {
    /// Island index.
    pub island: usize,
    /// Slot index within the island.
    pub local: usize,
    /// Global slot index.
    pub global: usize,
    /// Slot centre in world pixels.
    pub world: Point,
}

impl SlotInfo {
    /// The slot identity without the world position.
    #[must_use]
    pub fn slot_ref(&self) -> SlotRef {
        SlotRef {
            island: self.island,
            local: self.local,
            global: self.global,
        }
    }
}

/// Maps between the three coordinate spaces of a garden.
///
/// - Stored percentages: what is persisted on a thought.
/// - Source-art pixels: the full, uncropped island artwork.
/// - World pixels: islands tiled by an [`IslandGrid`].
///
/// The mapper is immutable configuration; every method is a pure function of
/// its inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinateMapper {
    registry: SlotRegistry,
    grid: IslandGrid,
    art: IslandArt,
}

impl CoordinateMapper {
    /// Creates a mapper from its three configuration inputs.
    #[must_use]
    pub fn new(registry: SlotRegistry, grid: IslandGrid, art: IslandArt) -> Self {
        Self {
            registry,
            grid,
            art,
        }
    }

    /// The slot registry.
    #[must_use]
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// The island grid.
    #[must_use]
    pub fn grid(&self) -> &IslandGrid {
        &self.grid
    }

    /// The island art description.
    #[must_use]
    pub fn art(&self) -> &IslandArt {
        &self.art
    }

    /// Number of slots on one island.
    #[must_use]
    pub fn slots_per_island(&self) -> usize {
        self.registry.slots_per_island()
    }

    /// Stored position of slot `local` on `island`.
    ///
    /// # Panics
    ///
    /// Panics if `local` is not a valid local slot index.
    #[must_use]
    pub fn slot_to_stored_position(&self, island: usize, local: usize) -> StoredPosition {
        StoredPosition::encode(island, self.registry.slot(local))
    }

    /// Like [`slot_to_stored_position`](Self::slot_to_stored_position), but
    /// returns `None` for an out-of-range `local`.
    #[must_use]
    pub fn try_slot_to_stored_position(
        &self,
        island: usize,
        local: usize,
    ) -> Option<StoredPosition> {
        self.registry
            .get(local)
            .map(|slot| StoredPosition::encode(island, slot))
    }

    /// Recovers the global slot index a stored position was encoded from.
    ///
    /// Returns `None` for positions that match no slot, such as records
    /// written by the older free-placement scheme.
    #[must_use]
    pub fn stored_position_to_global_index(&self, pos: StoredPosition) -> Option<usize> {
        self.classify(pos).slot().map(|slot| slot.global)
    }

    /// Classifies a stored position as slot-aligned or free-form.
    #[must_use]
    pub fn classify(&self, pos: StoredPosition) -> Placement {
        let Some(island) = pos.island_index() else {
            return Placement::FreeForm;
        };
        match self.registry.find(pos.local()) {
            Some(local) => {
                Placement::SlotAligned(SlotRef::from_parts(island, local, self.slots_per_island()))
            }
            None => Placement::FreeForm,
        }
    }

    /// World-pixel position of a stored position.
    ///
    /// Works for both slot-aligned and free-form positions. A position with a
    /// negative or non-finite `x` is placed relative to island 0.
    #[must_use]
    pub fn world_position_of(&self, pos: StoredPosition) -> Point {
        let island = pos.island_index().unwrap_or(0);
        self.local_to_world(island, pos.local())
    }

    /// World-pixel position of slot `local` on `island`.
    ///
    /// # Panics
    ///
    /// Panics if `local` is not a valid local slot index.
    #[must_use]
    pub fn slot_world_position(&self, island: usize, local: usize) -> Point {
        self.local_to_world(island, self.registry.slot(local))
    }

    /// Resolves a global slot index.
    #[must_use]
    pub fn slot_info(&self, global: usize) -> SlotInfo {
        let slot = SlotRef::from_global(global, self.slots_per_island());
        SlotInfo {
            island: slot.island,
            local: slot.local,
            global,
            world: self.slot_world_position(slot.island, slot.local),
        }
    }

    fn local_to_world(&self, island: usize, pct: Point) -> Point {
        let origin = self.grid.island_origin(island);
        let size = self.grid.island_size();
        let fraction = self.art.crop_fraction(pct);
        Point::new(
            origin.x + fraction.x * size.width,
            origin.y + fraction.y * size.height,
        )
    }
}
