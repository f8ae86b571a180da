// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request types for creating and updating flavors.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`CreateFlavorRequest`] | `FlavorRepository::create` |
//! | [`UpdateFlavorRequest`] | `FlavorRepository::update` |
//!
//! Both derive [`Validate`]. Text fields must be non-empty and at most
//! [`MAX_TEXT_LEN`](crate::MAX_TEXT_LEN) characters.

use validator::Validate;

use crate::model::FlavorId;

/// Input for a new flavor.
///
/// # Example
///
/// ```rust
/// use flavor::{CreateFlavorRequest, FlavorId};
///
/// let root = CreateFlavorRequest::new("vanilla", "Vanilla");
/// let child = CreateFlavorRequest::new("bourbon", "Bourbon").with_parent(FlavorId::new(1));
/// assert_eq!(child.parent, Some(FlavorId::new(1)));
/// # let _ = root;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CreateFlavorRequest {
    /// Flavor name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Human-facing label.
    #[validate(length(min = 1, max = 255))]
    pub label: String,

    /// Optional parent key; must refer to an existing flavor.
    pub parent: Option<FlavorId>
}

impl CreateFlavorRequest {
    /// Root flavor request with the given name and label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            label:  label.into(),
            parent: None
        }
    }

    /// Attach a parent.
    #[must_use]
    pub fn with_parent(mut self, parent: FlavorId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Partial update of a flavor.
///
/// `None` leaves a field untouched. For `parent`, `Some(None)` clears the
/// reference and `Some(Some(id))` re-points it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct UpdateFlavorRequest {
    /// New name.
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    /// New label.
    #[validate(length(min = 1, max = 255))]
    pub label: Option<String>,

    /// New parent reference.
    pub parent: Option<Option<FlavorId>>
}

impl UpdateFlavorRequest {
    /// Empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Point the flavor at a new parent.
    #[must_use]
    pub fn with_parent(mut self, parent: FlavorId) -> Self {
        self.parent = Some(Some(parent));
        self
    }

    /// Clear the parent reference.
    #[must_use]
    pub fn without_parent(mut self) -> Self {
        self.parent = Some(None);
        self
    }

    /// Check if the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.label.is_none() && self.parent.is_none()
    }
}
