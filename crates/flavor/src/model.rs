// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The `Flavor` record and its key type.
//!
//! A flavor carries two bounded text fields and an optional reference to
//! another flavor in the same store. The reference is held as a
//! [`FlavorId`], never as an embedded record, so the parent chain lives in
//! the store's arena rather than in the value itself.

use std::fmt;

/// Maximum length of `name` and `label`, counted in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// Primary key of a [`Flavor`].
///
/// Assigned by the store from an increasing counter starting at 1. Keys are
/// never reused within one store, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlavorId(u64);

impl FlavorId {
    /// Wrap a raw key.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw key value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FlavorId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FlavorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored flavor.
///
/// Instances are produced by a repository; fields are read through
/// accessors so a value always reflects what the store validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    pub(crate) id:     FlavorId,
    pub(crate) name:   String,
    pub(crate) label:  String,
    pub(crate) parent: Option<FlavorId>
}

impl Flavor {
    pub(crate) const fn new(
        id: FlavorId,
        name: String,
        label: String,
        parent: Option<FlavorId>
    ) -> Self {
        Self {
            id,
            name,
            label,
            parent
        }
    }

    /// Primary key.
    pub const fn id(&self) -> FlavorId {
        self.id
    }

    /// Flavor name, also used as its display form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-facing label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Key of the parent flavor, if any.
    pub const fn parent(&self) -> Option<FlavorId> {
        self.parent
    }

    /// Check if this flavor has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vanilla() -> Flavor {
        Flavor::new(FlavorId::new(1), "vanilla".into(), "Vanilla".into(), None)
    }

    #[test]
    fn display_is_name() {
        let flavor = vanilla();
        assert_eq!(flavor.to_string(), "vanilla");
        assert_eq!(format!("{flavor}"), flavor.name());
    }

    #[test]
    fn display_ignores_label() {
        let flavor = Flavor::new(FlavorId::new(2), "bean".into(), "Bourbon Bean".into(), None);
        assert_eq!(flavor.to_string(), "bean");
    }

    #[test]
    fn root_without_parent() {
        let flavor = vanilla();
        assert!(flavor.is_root());
        assert_eq!(flavor.parent(), None);
    }

    #[test]
    fn parent_is_a_key() {
        let child = Flavor::new(
            FlavorId::new(7),
            "madagascar".into(),
            "Madagascar".into(),
            Some(FlavorId::new(1))
        );
        assert!(!child.is_root());
        assert_eq!(child.parent(), Some(FlavorId::new(1)));
    }

    #[test]
    fn flavor_id_roundtrip() {
        let id = FlavorId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert!(FlavorId::new(1) < FlavorId::new(2));
    }
}
