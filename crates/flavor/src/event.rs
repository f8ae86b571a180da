// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lifecycle events published by [`FlavorStore`](crate::FlavorStore).

use flavor_core::{EntityEvent, EventKind};

use crate::model::FlavorId;

/// A change to one flavor.
///
/// Deleting a parent publishes `Deleted` for the parent first, then one
/// `ParentCleared` per former child in key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavorEvent {
    /// Flavor was created.
    Created(FlavorId),

    /// Flavor was updated through the repository.
    Updated(FlavorId),

    /// Flavor was deleted.
    Deleted(FlavorId),

    /// Flavor lost its parent because the parent was deleted.
    ParentCleared {
        /// The child whose reference was cleared.
        id:            FlavorId,
        /// The deleted parent.
        former_parent: FlavorId
    }
}

impl EntityEvent for FlavorEvent {
    type Id = FlavorId;

    fn kind(&self) -> EventKind {
        match self {
            Self::Created(_) => EventKind::Created,
            Self::Updated(_) => EventKind::Updated,
            Self::Deleted(_) => EventKind::Deleted,
            Self::ParentCleared { .. } => EventKind::ReferenceCleared
        }
    }

    fn entity_id(&self) -> &Self::Id {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => id,
            Self::ParentCleared { id, .. } => id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        let id = FlavorId::new(1);
        assert_eq!(FlavorEvent::Created(id).kind(), EventKind::Created);
        assert_eq!(FlavorEvent::Updated(id).kind(), EventKind::Updated);
        assert!(FlavorEvent::Deleted(id).kind().is_delete());

        let cleared = FlavorEvent::ParentCleared {
            id,
            former_parent: FlavorId::new(2)
        };
        assert!(cleared.kind().is_side_effect());
    }

    #[test]
    fn entity_id_is_the_affected_record() {
        let cleared = FlavorEvent::ParentCleared {
            id:            FlavorId::new(5),
            former_parent: FlavorId::new(2)
        };
        assert_eq!(*cleared.entity_id(), FlavorId::new(5));
        assert_eq!(*FlavorEvent::Deleted(FlavorId::new(2)).entity_id(), FlavorId::new(2));
    }
}
