// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flavor_core::prelude::*;
//! ```

pub use crate::{EntityEvent, EventKind, Pagination, Repository, async_trait};
