// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for the flavors workspace.
//!
//! This crate holds the entity-agnostic vocabulary shared by repositories:
//! the base [`Repository`] trait, [`Pagination`] for list operations and the
//! lifecycle event types. It has no knowledge of any concrete entity.
//!
//! # Overview
//!
//! - [`Repository`] — Base trait for entity repositories
//! - [`Pagination`] — Common pagination parameters
//! - [`EventKind`] / [`EntityEvent`] — Lifecycle events published by stores
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use flavor_core::prelude::*;
//!
//! #[async_trait]
//! impl FlavorRepository for FlavorStore {
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;

/// Re-export async_trait for repository implementations.
pub use async_trait::async_trait;

/// Base repository trait.
///
/// Entity repositories extend this trait with their own CRUD and relation
/// methods. It fixes the error and key types every method shares.
///
/// # Associated Types
///
/// - `Error` — Error type for repository operations
/// - `Id` — Primary key type of the stored entity
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// pub trait FlavorRepository: Repository<Id = FlavorId> {
///     async fn find_by_id(&self, id: Self::Id) -> Result<Option<Flavor>, Self::Error>;
///     // ...
/// }
/// ```
pub trait Repository: Send + Sync {
    /// Error type for repository operations.
    ///
    /// Must implement `std::error::Error + Send + Sync` for async
    /// compatibility.
    type Error: std::error::Error + Send + Sync;

    /// Primary key type.
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync;
}

/// Pagination parameters for list operations.
///
/// # Example
///
/// ```rust
/// use flavor_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::new(10, 10); // Next 10 items
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: usize,

    /// Number of results to skip.
    pub offset: usize
}

impl Pagination {
    /// Create new pagination parameters.
    ///
    /// # Arguments
    ///
    /// * `limit` — Maximum results to return
    /// * `offset` — Number of results to skip
    pub const fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page.
    ///
    /// # Arguments
    ///
    /// * `page` — Page number (0-indexed)
    /// * `per_page` — Items per page
    ///
    /// # Example
    ///
    /// ```rust
    /// use flavor_core::Pagination;
    ///
    /// let page_0 = Pagination::page(0, 25); // offset=0, limit=25
    /// let page_2 = Pagination::page(2, 25); // offset=50, limit=25
    /// ```
    pub const fn page(page: usize, per_page: usize) -> Self {
        Self {
            limit:  per_page,
            offset: page.saturating_mul(per_page)
        }
    }

    /// Apply this window to an ordered iterator.
    ///
    /// ```rust
    /// use flavor_core::Pagination;
    ///
    /// let window: Vec<_> = Pagination::new(2, 1).apply(1..=5).collect();
    /// assert_eq!(window, vec![2, 3]);
    /// ```
    pub fn apply<I: Iterator>(self, iter: I) -> impl Iterator<Item = I::Item> {
        iter.skip(self.offset).take(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit:  100,
            offset: 0
        }
    }
}

/// Kind of lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Entity was created.
    Created,

    /// Entity was updated by a caller.
    Updated,

    /// Entity was deleted (permanently removed).
    Deleted,

    /// A reference held by the entity was cleared because the referenced
    /// entity was deleted.
    ReferenceCleared
}

impl EventKind {
    /// Check if this is a delete event.
    pub const fn is_delete(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// Check if the event is a side effect of another entity's deletion
    /// rather than a direct caller action.
    pub const fn is_side_effect(&self) -> bool {
        matches!(self, Self::ReferenceCleared)
    }
}

/// Base trait for entity lifecycle events.
///
/// # Example
///
/// ```rust,ignore
/// fn handle_event<E: EntityEvent>(event: &E) {
///     tracing::debug!(kind = ?event.kind(), id = ?event.entity_id(), "event");
/// }
/// ```
pub trait EntityEvent: Send + Sync + std::fmt::Debug {
    /// Type of entity ID.
    type Id;

    /// Get the kind of event.
    fn kind(&self) -> EventKind;

    /// Get the entity ID associated with this event.
    fn entity_id(&self) -> &Self::Id;
}
