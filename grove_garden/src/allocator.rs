// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gap-filling slot allocation over a snapshot of placed thoughts.

use hashbrown::HashSet;

use crate::mapper::{CoordinateMapper, SlotInfo};
use crate::position::{Placement, StoredPosition};
use crate::thought::Placed;

/// Upper bound on the island count a snapshot can imply.
///
/// A stored position whose island index is at or past this limit is treated
/// as corrupt and contributes island 0, like a negative or non-finite one.
pub const MAX_ISLANDS: usize = 4096;

/// Minimum number of islands needed to hold every thought in `thoughts`.
///
/// Every thought counts, slot-aligned or not. Positions whose `x` is negative
/// or non-finite, or whose island index reaches [`MAX_ISLANDS`], contribute
/// island 0. An empty snapshot needs one island.
#[must_use]
pub fn derive_island_count<T: Placed>(thoughts: &[T]) -> usize {
    let mut highest = 0;
    for thought in thoughts {
        match thought.position().island_index() {
            Some(island) if island < MAX_ISLANDS => highest = highest.max(island),
            Some(island) => {
                tracing::warn!(
                    id = thought.id(),
                    island,
                    "island index past the limit ignored by island count"
                );
            }
            None => {}
        }
    }
    highest + 1
}

/// Result of [`SlotAllocator::plant`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planting {
    /// The slot handed out.
    pub slot: SlotInfo,
    /// Position to persist on the new thought.
    pub stored: StoredPosition,
    /// Island count after the new thought is committed.
    pub island_count: usize,
    /// Whether planting had to add an island.
    pub grew: bool,
}

/// Assigns free slots given a snapshot of placed thoughts.
///
/// The allocator holds no occupancy state of its own: every call re-derives
/// occupancy from the snapshot it is given, so callers must commit each new
/// thought to their snapshot before asking for the next slot.
#[derive(Clone, Copy, Debug)]
pub struct SlotAllocator<'a> {
    mapper: &'a CoordinateMapper,
}

impl<'a> SlotAllocator<'a> {
    /// Creates an allocator over `mapper`'s slot configuration.
    #[must_use]
    pub fn new(mapper: &'a CoordinateMapper) -> Self {
        Self { mapper }
    }

    /// The mapper used for reverse lookups.
    #[must_use]
    pub fn mapper(&self) -> &'a CoordinateMapper {
        self.mapper
    }

    /// Global slot indices currently taken.
    ///
    /// Free-form positions match no slot and are left out, so they never
    /// block a slot from being reused.
    #[must_use]
    pub fn occupied_indices<T: Placed>(&self, thoughts: &[T]) -> HashSet<usize> {
        let mut occupied = HashSet::with_capacity(thoughts.len());
        for thought in thoughts {
            let pos = thought.position();
            match self.mapper.classify(pos) {
                Placement::SlotAligned(slot) => {
                    occupied.insert(slot.global);
                }
                Placement::FreeForm => {
                    tracing::debug!(
                        id = thought.id(),
                        x = pos.x,
                        y = pos.y,
                        "free-form position skipped by occupancy"
                    );
                }
            }
        }
        occupied
    }

    /// Lowest free global slot among the first `island_count` islands.
    ///
    /// Returns `None` when every slot in range is taken; the caller should
    /// add one island and ask again.
    #[must_use]
    pub fn next_available_slot<T: Placed>(
        &self,
        thoughts: &[T],
        island_count: usize,
    ) -> Option<SlotInfo> {
        let occupied = self.occupied_indices(thoughts);
        let capacity = island_count.saturating_mul(self.mapper.slots_per_island());
        let global = (0..capacity).find(|i| !occupied.contains(i))?;
        let info = self.mapper.slot_info(global);
        tracing::trace!(
            global = info.global,
            island = info.island,
            local = info.local,
            "slot allocated"
        );
        Some(info)
    }

    /// Picks the slot for a new thought, growing the island count if needed.
    ///
    /// Starts from [`derive_island_count`]; on exhaustion adds exactly one
    /// island and retries. A fresh island always has free slots, so a second
    /// exhaustion is an invariant violation: debug builds panic, release
    /// builds keep growing.
    #[must_use]
    pub fn plant<T: Placed>(&self, thoughts: &[T]) -> Planting {
        let start = derive_island_count(thoughts);
        let mut island_count = start;
        let slot = loop {
            if let Some(slot) = self.next_available_slot(thoughts, island_count) {
                break slot;
            }
            debug_assert!(
                island_count == start,
                "island {island_count} was added but offered no free slot"
            );
            tracing::debug!(from = island_count, to = island_count + 1, "garden grew");
            island_count += 1;
        };
        let stored = self.mapper.slot_to_stored_position(slot.island, slot.local);
        Planting {
            slot,
            stored,
            island_count,
            grew: island_count > start,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{MAX_ISLANDS, SlotAllocator, derive_island_count};
    use crate::mapper::CoordinateMapper;
    use crate::position::StoredPosition;
    use crate::thought::ThoughtRecord;

    fn at(mapper: &CoordinateMapper, id: &str, global: usize) -> ThoughtRecord {
        let info = mapper.slot_info(global);
        ThoughtRecord::new(id, mapper.slot_to_stored_position(info.island, info.local))
    }

    #[test]
    fn empty_garden_starts_at_slot_zero() {
        let mapper = CoordinateMapper::default();
        let alloc = SlotAllocator::new(&mapper);
        let none: &[ThoughtRecord] = &[];
        let slot = alloc.next_available_slot(none, 1).unwrap();
        assert_eq!(slot.global, 0);
        assert_eq!(derive_island_count(none), 1);
    }

    #[test]
    fn zero_islands_offer_nothing() {
        let mapper = CoordinateMapper::default();
        let alloc = SlotAllocator::new(&mapper);
        let none: &[ThoughtRecord] = &[];
        assert_eq!(alloc.next_available_slot(none, 0), None);
    }

    #[test]
    fn free_form_positions_do_not_occupy() {
        let mapper = CoordinateMapper::default();
        let alloc = SlotAllocator::new(&mapper);
        let thoughts = vec![
            ThoughtRecord::new("legacy", StoredPosition::new(3.0, 97.0)),
            at(&mapper, "a", 0),
        ];
        let occupied = alloc.occupied_indices(&thoughts);
        assert_eq!(occupied.len(), 1);
        assert!(occupied.contains(&0));
    }

    #[test]
    fn island_count_counts_free_form_records() {
        let thoughts = vec![
            ThoughtRecord::new("far", StoredPosition::new(412.5, 3.0)),
            ThoughtRecord::new("bad", StoredPosition::new(-20.0, 3.0)),
        ];
        assert_eq!(derive_island_count(&thoughts), 5);
    }

    #[test]
    fn corrupt_positions_cannot_inflate_the_island_count() {
        let thoughts = vec![
            ThoughtRecord::new("huge", StoredPosition::new(1e20, 30.0)),
            ThoughtRecord::new("edge", StoredPosition::new(409_600.0, 30.0)),
            ThoughtRecord::new("ok", StoredPosition::new(222.0, 30.0)),
        ];
        assert_eq!(derive_island_count(&thoughts), 3);

        let last = [ThoughtRecord::new("last", StoredPosition::new(409_522.0, 30.0))];
        assert_eq!(derive_island_count(&last), MAX_ISLANDS);
    }

    #[test]
    fn plant_reports_growth() {
        let mapper = CoordinateMapper::default();
        let alloc = SlotAllocator::new(&mapper);
        let full: Vec<_> = (0..12).map(|g| at(&mapper, "t", g)).collect();
        let planting = alloc.plant(&full);
        assert!(planting.grew);
        assert_eq!(planting.island_count, 2);
        assert_eq!(planting.slot.island, 1);
        assert_eq!(planting.slot.local, 0);
        assert_eq!(planting.stored, mapper.slot_to_stored_position(1, 0));
    }

    #[test]
    fn plant_works_through_references() {
        let mapper = CoordinateMapper::default();
        let alloc = SlotAllocator::new(&mapper);
        let owned = [at(&mapper, "a", 0), at(&mapper, "b", 1)];
        let borrowed: Vec<&ThoughtRecord> = owned.iter().collect();
        assert_eq!(alloc.plant(&borrowed).slot.global, 2);
    }
}
