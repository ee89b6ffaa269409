// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Garden: deterministic slot packing for paginated island layouts.
//!
//! A garden is a grid of identical "islands", each offering a fixed list of
//! slots authored as percentages over a piece of background art. Every planted
//! thought occupies one slot, and the only spatial datum persisted for it is a
//! [`StoredPosition`] from which its island and slot can be recovered.
//!
//! The crate provides:
//! - [`SlotRegistry`]: the ordered slots of one island.
//! - [`IslandArt`]: the source artwork and the crop of it that is displayed.
//! - [`IslandGrid`]: row-major tiling of islands in world pixels.
//! - [`CoordinateMapper`]: conversions between stored percentages, source-art
//!   pixels and world pixels, including reverse lookup of slot identity.
//! - [`SlotAllocator`]: lowest-free-slot allocation with gap filling and an
//!   explicit exhaustion signal, plus [`SlotAllocator::plant`] which grows
//!   the island count when needed.
//! - [`derive_island_count`]: the island count as a pure function of the
//!   thoughts currently placed.
//!
//! Nothing here caches occupancy. Callers hand in their current snapshot of
//! thoughts (anything implementing [`Placed`]) on every call.
//!
//! ## Minimal example
//!
//! ```rust
//! use grove_garden::{CoordinateMapper, SlotAllocator, ThoughtRecord, derive_island_count};
//!
//! let mapper = CoordinateMapper::default();
//! let alloc = SlotAllocator::new(&mapper);
//! let mut thoughts: Vec<ThoughtRecord> = Vec::new();
//!
//! for i in 0..13 {
//!     let planting = alloc.plant(&thoughts);
//!     thoughts.push(ThoughtRecord::new(format!("t{i}"), planting.stored));
//! }
//!
//! assert_eq!(derive_island_count(&thoughts), 2);
//!
//! // Any renderer can recover world pixels from the persisted form alone.
//! let world = mapper.world_position_of(thoughts[12].position);
//! assert!(world.x >= mapper.grid().island_origin(1).x);
//! ```
//!
//! ## Legacy positions
//!
//! Records written by an older free-placement scheme carry percentages that
//! match no slot. They classify as [`Placement::FreeForm`], render through
//! [`CoordinateMapper::world_position_of`] like any other record, and are
//! ignored when computing occupancy. They are never rewritten onto slots.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for float math without `std`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`StoredPosition`] and
//!   [`ThoughtRecord`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod allocator;
mod art;
mod layout;
mod mapper;
mod position;
mod slots;
mod thought;

pub use allocator::{MAX_ISLANDS, Planting, SlotAllocator, derive_island_count};
pub use art::IslandArt;
pub use layout::{IslandGrid, IslandRect};
pub use mapper::{CoordinateMapper, SlotInfo};
pub use position::{ISLAND_STRIDE, Placement, SlotRef, StoredPosition};
pub use slots::{
    DEFAULT_SLOTS, MIN_SLOT_SEPARATION, SLOT_MATCH_EPSILON, SlotRegistry, SlotRegistryError,
};
pub use thought::{Placed, ThoughtRecord};
