// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for flavor repository operations.

use thiserror::Error;
use validator::ValidationErrors;

use crate::model::FlavorId;

/// Errors returned by [`FlavorRepository`](crate::FlavorRepository)
/// implementations.
#[derive(Debug, Error)]
pub enum FlavorError {
    /// A text field is empty or longer than allowed.
    #[error("invalid flavor: {0}")]
    Validation(#[from] ValidationErrors),

    /// No flavor with this key exists.
    #[error("flavor {0} not found")]
    NotFound(FlavorId),

    /// The requested parent does not exist.
    #[error("parent flavor {0} not found")]
    ParentNotFound(FlavorId),

    /// The parent change would close a loop in the parent chain.
    #[error("making {parent} the parent of flavor {id} would create a cycle")]
    Cycle {
        /// Flavor being updated.
        id:     FlavorId,
        /// Requested parent.
        parent: FlavorId
    }
}

impl FlavorError {
    /// Check if this error was caused by invalid input rather than store
    /// state.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error refers to a missing record.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ParentNotFound(_))
    }
}
