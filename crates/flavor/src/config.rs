// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Store configuration.
//!
//! # Environment
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `FLAVOR_CYCLE_POLICY` | `allow`, `reject` | `allow` |
//! | `FLAVOR_EVENT_CAPACITY` | positive integer | `64` |

use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the [`CyclePolicy`].
pub const CYCLE_POLICY_ENV: &str = "FLAVOR_CYCLE_POLICY";

/// Environment variable setting the event channel capacity.
pub const EVENT_CAPACITY_ENV: &str = "FLAVOR_EVENT_CAPACITY";

const DEFAULT_EVENT_CAPACITY: usize = 64;

/// How the store treats parent changes that close a loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Accept any existing parent. Chain walks stop at the first repeat.
    #[default]
    Allow,

    /// Fail with [`FlavorError::Cycle`](crate::FlavorError::Cycle).
    Reject
}

impl CyclePolicy {
    /// Configuration spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Reject => "reject"
        }
    }
}

/// Unrecognized [`CyclePolicy`] spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cycle policy `{0}`, expected `allow` or `reject`")]
pub struct ParseCyclePolicyError(String);

impl FromStr for CyclePolicy {
    type Err = ParseCyclePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(ParseCyclePolicyError(other.to_owned()))
        }
    }
}

/// Settings for a [`FlavorStore`](crate::FlavorStore).
///
/// # Example
///
/// ```rust
/// use flavor::{CyclePolicy, StoreConfig};
///
/// let config = StoreConfig::default()
///     .with_cycle_policy(CyclePolicy::Reject)
///     .with_event_capacity(16);
/// assert_eq!(config.event_capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Parent-cycle handling.
    pub cycle_policy: CyclePolicy,

    /// Buffer size of the lifecycle event channel. Slow subscribers lag
    /// once this many events are pending.
    pub event_capacity: usize
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cycle_policy:   CyclePolicy::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY
        }
    }
}

impl StoreConfig {
    /// Set the cycle policy.
    #[must_use]
    pub const fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Set the event channel capacity. Zero is raised to one.
    #[must_use]
    pub const fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Read settings from the process environment.
    ///
    /// Missing or malformed variables fall back to defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CYCLE_POLICY_ENV) {
            match raw.parse() {
                Ok(policy) => config.cycle_policy = policy,
                Err(err) => tracing::warn!(%err, "ignoring {CYCLE_POLICY_ENV}")
            }
        }

        if let Some(raw) = lookup(EVENT_CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => config = config.with_event_capacity(capacity),
                Err(err) => tracing::warn!(%err, value = %raw, "ignoring {EVENT_CAPACITY_ENV}")
            }
        }

        config
    }
}
