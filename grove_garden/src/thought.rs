// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of a thought that placement needs.

use alloc::string::String;

use crate::position::StoredPosition;

/// Anything that has been planted in the garden.
///
/// Allocation and island-count derivation only ever read these two fields;
/// the rest of a thought (text, imagery, growth stage) stays with the host.
pub trait Placed {
    /// Stable identifier of the thought.
    fn id(&self) -> &str;

    /// The persisted percentage position.
    fn position(&self) -> StoredPosition;
}

impl<T: Placed + ?Sized> Placed for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn position(&self) -> StoredPosition {
        (**self).position()
    }
}

/// The minimal persisted record needed to round-trip a thought's placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThoughtRecord {
    /// Stable identifier.
    pub id: String,
    /// Persisted position.
    pub position: StoredPosition,
}

impl ThoughtRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(id: impl Into<String>, position: StoredPosition) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl Placed for ThoughtRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> StoredPosition {
        self.position
    }
}
