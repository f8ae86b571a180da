// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory flavor store.
//!
//! Records live in an arena keyed by [`FlavorId`]; a parent is stored as a
//! key, and a reverse index maps each parent to its children so deleting a
//! parent only touches the records that referenced it.
//!
//! All state sits behind one lock that is never held across an `.await`,
//! so every repository call is atomic, including the delete sweep. Events
//! are sent while the write lock is held, so subscribers see them in commit
//! order.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use flavor_core::prelude::{Pagination, Repository, async_trait};
use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    config::{CyclePolicy, StoreConfig},
    dto::{CreateFlavorRequest, UpdateFlavorRequest},
    error::FlavorError,
    event::FlavorEvent,
    model::{Flavor, FlavorId},
    repository::FlavorRepository
};

#[derive(Debug, Default)]
struct Arena {
    last_id:  u64,
    records:  BTreeMap<FlavorId, Flavor>,
    children: HashMap<FlavorId, BTreeSet<FlavorId>>
}

impl Arena {
    fn allocate(&mut self) -> FlavorId {
        self.last_id += 1;
        FlavorId::new(self.last_id)
    }

    fn link(&mut self, child: FlavorId, parent: FlavorId) {
        self.children.entry(parent).or_default().insert(child);
    }

    fn unlink(&mut self, child: FlavorId, parent: FlavorId) {
        if let Some(set) = self.children.get_mut(&parent) {
            set.remove(&child);
            if set.is_empty() {
                self.children.remove(&parent);
            }
        }
    }

    fn require(&self, id: FlavorId) -> Result<&Flavor, FlavorError> {
        self.records.get(&id).ok_or(FlavorError::NotFound(id))
    }

    fn require_parent(&self, parent: FlavorId) -> Result<(), FlavorError> {
        if self.records.contains_key(&parent) {
            Ok(())
        } else {
            Err(FlavorError::ParentNotFound(parent))
        }
    }

    /// Whether `id` is reachable from `parent` by following parent links.
    fn reaches(&self, parent: FlavorId, id: FlavorId) -> bool {
        let mut seen = HashSet::new();
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == id {
                return true;
            }
            if !seen.insert(current) {
                return false;
            }
            cursor = self.records.get(&current).and_then(Flavor::parent);
        }
        false
    }

    fn ancestors(&self, id: FlavorId) -> Vec<Flavor> {
        let mut seen = HashSet::from([id]);
        let mut chain = Vec::new();
        let mut cursor = self.records.get(&id).and_then(Flavor::parent);
        while let Some(current) = cursor {
            if !seen.insert(current) {
                break;
            }
            let Some(record) = self.records.get(&current) else {
                break;
            };
            chain.push(record.clone());
            cursor = record.parent;
        }
        chain
    }

    fn collect(&self, ids: impl IntoIterator<Item = FlavorId>) -> Vec<Flavor> {
        ids.into_iter()
            .filter_map(|id| self.records.get(&id).cloned())
            .collect()
    }
}

/// Thread-safe in-memory [`FlavorRepository`].
///
/// Share it behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use flavor::{CreateFlavorRequest, FlavorRepository, FlavorStore};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let store = FlavorStore::new();
/// let vanilla = store.create(CreateFlavorRequest::new("vanilla", "Vanilla")).await?;
/// let bourbon = store
///     .create(CreateFlavorRequest::new("bourbon", "Bourbon").with_parent(vanilla.id()))
///     .await?;
///
/// store.delete(vanilla.id()).await?;
/// let bourbon = store.find_by_id(bourbon.id()).await?.unwrap();
/// assert_eq!(bourbon.parent(), None);
/// # Ok::<(), flavor::FlavorError>(())
/// # }).unwrap();
/// ```
#[derive(Debug)]
pub struct FlavorStore {
    config: StoreConfig,
    arena:  RwLock<Arena>,
    events: broadcast::Sender<FlavorEvent>
}

impl Default for FlavorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlavorStore {
    /// Empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Empty store with the given settings.
    pub fn with_config(config: StoreConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            config,
            arena: RwLock::new(Arena::default()),
            events
        }
    }

    /// Active settings.
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Receive lifecycle events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FlavorEvent> {
        self.events.subscribe()
    }

    /// Must be called with the arena write lock held.
    fn publish(&self, events: impl IntoIterator<Item = FlavorEvent>) {
        for event in events {
            // No subscribers is fine.
            let _ = self.events.send(event);
        }
    }
}

impl Repository for FlavorStore {
    type Error = FlavorError;
    type Id = FlavorId;
}

#[async_trait]
impl FlavorRepository for FlavorStore {
    async fn create(&self, dto: CreateFlavorRequest) -> Result<Flavor, FlavorError> {
        dto.validate()?;

        let flavor = {
            let mut arena = self.arena.write();
            if let Some(parent) = dto.parent {
                arena.require_parent(parent)?;
            }
            let id = arena.allocate();
            let flavor = Flavor::new(id, dto.name, dto.label, dto.parent);
            if let Some(parent) = flavor.parent {
                arena.link(id, parent);
            }
            arena.records.insert(id, flavor.clone());
            self.publish([FlavorEvent::Created(id)]);
            flavor
        };

        debug!(id = %flavor.id, parent = ?flavor.parent, name = %flavor.name, "flavor created");
        Ok(flavor)
    }

    async fn find_by_id(&self, id: FlavorId) -> Result<Option<Flavor>, FlavorError> {
        Ok(self.arena.read().records.get(&id).cloned())
    }

    async fn update(&self, id: FlavorId, dto: UpdateFlavorRequest) -> Result<Flavor, FlavorError> {
        dto.validate()?;

        let flavor = {
            let mut arena = self.arena.write();
            let current_parent = arena.require(id)?.parent;

            if let Some(Some(parent)) = dto.parent {
                arena.require_parent(parent)?;
                if self.config.cycle_policy == CyclePolicy::Reject && arena.reaches(parent, id) {
                    warn!(%id, %parent, "rejected parent change that would create a cycle");
                    return Err(FlavorError::Cycle {
                        id,
                        parent
                    });
                }
            }

            if let Some(new_parent) = dto.parent
                && new_parent != current_parent
            {
                if let Some(old) = current_parent {
                    arena.unlink(id, old);
                }
                if let Some(new) = new_parent {
                    arena.link(id, new);
                }
            }

            let Some(record) = arena.records.get_mut(&id) else {
                return Err(FlavorError::NotFound(id));
            };
            if let Some(name) = dto.name {
                record.name = name;
            }
            if let Some(label) = dto.label {
                record.label = label;
            }
            if let Some(parent) = dto.parent {
                record.parent = parent;
            }
            let flavor = record.clone();
            self.publish([FlavorEvent::Updated(id)]);
            flavor
        };

        debug!(%id, parent = ?flavor.parent, "flavor updated");
        Ok(flavor)
    }

    async fn delete(&self, id: FlavorId) -> Result<bool, FlavorError> {
        let orphans = {
            let mut arena = self.arena.write();
            let Some(removed) = arena.records.remove(&id) else {
                return Ok(false);
            };
            if let Some(parent) = removed.parent {
                arena.unlink(id, parent);
            }
            let orphans = arena.children.remove(&id).unwrap_or_default();
            for child in &orphans {
                if let Some(record) = arena.records.get_mut(child) {
                    record.parent = None;
                }
            }
            let cleared = orphans.iter().map(|&child| FlavorEvent::ParentCleared {
                id:            child,
                former_parent: id
            });
            self.publish(std::iter::once(FlavorEvent::Deleted(id)).chain(cleared));
            orphans
        };

        if orphans.is_empty() {
            debug!(%id, "flavor deleted");
        } else {
            info!(%id, cleared = orphans.len(), "flavor deleted, children detached");
        }

        Ok(true)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Flavor>, FlavorError> {
        let arena = self.arena.read();
        Ok(page.apply(arena.records.values()).cloned().collect())
    }

    async fn count(&self) -> Result<usize, FlavorError> {
        Ok(self.arena.read().records.len())
    }

    async fn find_parent(&self, id: FlavorId) -> Result<Option<Flavor>, FlavorError> {
        let arena = self.arena.read();
        Ok(arena
            .records
            .get(&id)
            .and_then(Flavor::parent)
            .and_then(|parent| arena.records.get(&parent).cloned()))
    }

    async fn find_children(&self, id: FlavorId) -> Result<Vec<Flavor>, FlavorError> {
        let arena = self.arena.read();
        let Some(children) = arena.children.get(&id) else {
            return Ok(Vec::new());
        };
        Ok(arena.collect(children.iter().copied()))
    }

    async fn find_roots(&self) -> Result<Vec<Flavor>, FlavorError> {
        let arena = self.arena.read();
        Ok(arena
            .records
            .values()
            .filter(|flavor| flavor.is_root())
            .cloned()
            .collect())
    }

    async fn ancestors(&self, id: FlavorId) -> Result<Vec<Flavor>, FlavorError> {
        Ok(self.arena.read().ancestors(id))
    }
}
