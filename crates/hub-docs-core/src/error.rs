// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for hub documentation configuration.
//!
//! Construction of a [`HubDocumentation`](crate::HubDocumentation) has a single
//! failure kind, [`HubDocError::InvalidConfiguration`], which always names the
//! offending parameter. [`HubDocError::DuplicateHub`] is only produced by the
//! [`HubRegistry`](crate::HubRegistry).

use thiserror::Error;

/// Errors raised while declaring or registering hub documentation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubDocError {
    /// A constructor argument violates the configuration contract.
    #[error("invalid configuration for `{parameter}`: {reason}")]
    InvalidConfiguration {
        /// Name of the rejected parameter (`path`, `auto_discover`, ...).
        parameter: &'static str,
        /// Human-readable description, including the rejected value if any.
        reason:    String
    },

    /// The hub type already has documentation registered.
    #[error("hub `{hub}` is already registered")]
    DuplicateHub {
        /// Name of the entry already registered, which is kept.
        hub: String
    }
}

impl HubDocError {
    /// Create an [`HubDocError::InvalidConfiguration`] for `parameter`.
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into()
        }
    }

    /// Create an [`HubDocError::DuplicateHub`] for `hub`.
    pub fn duplicate(hub: impl Into<String>) -> Self {
        Self::DuplicateHub { hub: hub.into() }
    }

    /// Name of the parameter that failed validation, if any.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { parameter, .. } => Some(*parameter),
            Self::DuplicateHub { .. } => None
        }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub const fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
