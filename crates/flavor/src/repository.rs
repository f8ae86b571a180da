// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The flavor repository interface.
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`create`](FlavorRepository::create) | Validate and insert a new flavor |
//! | [`find_by_id`](FlavorRepository::find_by_id) | Lookup by key |
//! | [`update`](FlavorRepository::update) | Partial update, including re-parenting |
//! | [`delete`](FlavorRepository::delete) | Remove and clear children's parent |
//! | [`list`](FlavorRepository::list) | Page through flavors in key order |
//! | [`find_parent`](FlavorRepository::find_parent) | Follow the parent reference |
//! | [`find_children`](FlavorRepository::find_children) | Reverse of the parent reference |

use flavor_core::prelude::{Pagination, Repository, async_trait};

use crate::{
    dto::{CreateFlavorRequest, UpdateFlavorRequest},
    model::{Flavor, FlavorId}
};

/// Storage operations for [`Flavor`] records.
#[async_trait]
pub trait FlavorRepository: Repository<Id = FlavorId> {
    /// Insert a new flavor and return it with its assigned key.
    ///
    /// Fails if a text field is invalid or the parent does not exist.
    async fn create(&self, dto: CreateFlavorRequest) -> Result<Flavor, Self::Error>;

    /// Get a flavor by key.
    async fn find_by_id(&self, id: FlavorId) -> Result<Option<Flavor>, Self::Error>;

    /// Apply a partial update and return the new state.
    async fn update(&self, id: FlavorId, dto: UpdateFlavorRequest) -> Result<Flavor, Self::Error>;

    /// Delete a flavor.
    ///
    /// Flavors that had it as parent are kept with their parent cleared.
    /// Returns `false` if no flavor had this key.
    async fn delete(&self, id: FlavorId) -> Result<bool, Self::Error>;

    /// List flavors ordered by key.
    async fn list(&self, page: Pagination) -> Result<Vec<Flavor>, Self::Error>;

    /// Number of stored flavors.
    async fn count(&self) -> Result<usize, Self::Error>;

    /// Get the parent of a flavor. `None` if the flavor is unknown or a root.
    async fn find_parent(&self, id: FlavorId) -> Result<Option<Flavor>, Self::Error>;

    /// Get the flavors whose parent is `id`, ordered by key.
    async fn find_children(&self, id: FlavorId) -> Result<Vec<Flavor>, Self::Error>;

    /// Get all flavors without a parent, ordered by key.
    async fn find_roots(&self) -> Result<Vec<Flavor>, Self::Error>;

    /// Walk the parent chain, nearest ancestor first.
    ///
    /// The walk ends at a root or at the first flavor already visited, so it
    /// terminates even when the chain loops.
    async fn ancestors(&self, id: FlavorId) -> Result<Vec<Flavor>, Self::Error>;
}
