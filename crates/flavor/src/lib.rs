// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Flavor records with an optional self-referential parent.
//!
//! A [`Flavor`] has a `name`, a `label` and an optional `parent` pointing at
//! another flavor in the same store. Deleting a flavor never deletes its
//! children: their `parent` is cleared instead.
//!
//! # Overview
//!
//! - [`Flavor`] / [`FlavorId`] — The record and its key
//! - [`CreateFlavorRequest`] / [`UpdateFlavorRequest`] — Validated input
//! - [`FlavorRepository`] — Async storage interface
//! - [`FlavorStore`] — In-memory arena implementing the repository
//! - [`StoreConfig`] — Cycle policy and event channel settings
//! - [`FlavorEvent`] — Lifecycle events from [`FlavorStore::subscribe`]
//!
//! # Example
//!
//! ```rust
//! use flavor::{CreateFlavorRequest, FlavorRepository, FlavorStore};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = FlavorStore::new();
//! let coffee = store.create(CreateFlavorRequest::new("coffee", "Coffee")).await?;
//! let mocha = store
//!     .create(CreateFlavorRequest::new("mocha", "Mocha").with_parent(coffee.id()))
//!     .await?;
//!
//! assert_eq!(mocha.to_string(), "mocha");
//! assert_eq!(store.find_children(coffee.id()).await?, vec![mocha]);
//! # Ok::<(), flavor::FlavorError>(())
//! # }).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dto;
pub mod error;
pub mod event;
pub mod model;
pub mod repository;
pub mod store;

pub use config::{CyclePolicy, StoreConfig};
pub use dto::{CreateFlavorRequest, UpdateFlavorRequest};
pub use error::FlavorError;
pub use event::FlavorEvent;
pub use flavor_core::{EntityEvent, EventKind, Pagination, Repository};
pub use model::{Flavor, FlavorId, MAX_TEXT_LEN};
pub use repository::FlavorRepository;
pub use store::FlavorStore;
