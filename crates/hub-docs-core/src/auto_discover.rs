// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Auto-discovery modes allowed on a hub declaration.
//!
//! Other annotation kinds in the documentation family accept broader modes
//! (for example one that also discovers hub-level parameters). A hub accepts
//! only the three listed here, so [`HubAutoDiscover`] is its own enum instead
//! of a runtime filter over a larger one.
//!
//! # Accepted Spellings
//!
//! | Variant | Accepted text (case-insensitive) |
//! |---------|----------------------------------|
//! | `None` | `none` |
//! | `Methods` | `methods` |
//! | `MethodsAndArgs` | `methods_and_args`, `methods-and-args`, `MethodsAndArgs` |

use std::{fmt, str::FromStr};

use crate::HubDocError;

/// Parameter name reported when an auto-discover value is rejected.
pub(crate) const PARAMETER: &str = "auto_discover";

/// How aggressively undecorated hub members are pulled into documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum HubAutoDiscover {
    /// Only explicitly decorated members are documented.
    #[default]
    None,

    /// Every public method is documented, arguments only when decorated.
    Methods,

    /// Every public method and all of its arguments are documented.
    MethodsAndArgs
}

impl HubAutoDiscover {
    /// All modes a hub may declare.
    pub const ALL: [Self; 3] = [Self::None, Self::Methods, Self::MethodsAndArgs];

    /// Check if undecorated methods are documented.
    #[must_use]
    pub const fn includes_methods(&self) -> bool {
        matches!(self, Self::Methods | Self::MethodsAndArgs)
    }

    /// Check if undecorated method arguments are documented.
    #[must_use]
    pub const fn includes_args(&self) -> bool {
        matches!(self, Self::MethodsAndArgs)
    }

    /// Variant name as rendered in messages and serialized output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Methods => "Methods",
            Self::MethodsAndArgs => "MethodsAndArgs"
        }
    }
}

impl fmt::Display for HubAutoDiscover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HubAutoDiscover {
    type Err = HubDocError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "none" => Ok(Self::None),
            "methods" => Ok(Self::Methods),
            "methodsandargs" => Ok(Self::MethodsAndArgs),
            _ => Err(HubDocError::invalid(
                PARAMETER,
                format!("value `{value}` not allowed for this attribute")
            ))
        }
    }
}

impl TryFrom<String> for HubAutoDiscover {
    type Error = HubDocError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
