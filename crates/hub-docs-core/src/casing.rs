// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Lower camel case policy for rendered member names.

use std::{borrow::Cow, fmt, str::FromStr};

use convert_case::{Case, Casing};

use crate::HubDocError;

/// Whether member names of a hub are rendered in lower camel case.
///
/// | Variant | Effect |
/// |---------|--------|
/// | `Default` | Use the documentation engine's global setting |
/// | `Enabled` | Always render `SendMessage` as `sendMessage` |
/// | `Disabled` | Always keep names as declared |
///
/// # Examples
///
/// ```rust
/// use hub_docs_core::LowerCamelCase;
///
/// assert_eq!(LowerCamelCase::Enabled.apply("SendMessage", false), "sendMessage");
/// assert_eq!(LowerCamelCase::Default.apply("SendMessage", false), "SendMessage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String")
)]
pub enum LowerCamelCase {
    /// Defer to the engine-wide setting.
    #[default]
    Default,

    /// Convert member names to lower camel case.
    Enabled,

    /// Keep member names exactly as declared.
    Disabled
}

impl LowerCamelCase {
    /// Decide whether conversion applies, given the engine-wide setting.
    #[must_use]
    pub const fn resolve(&self, engine_default: bool) -> bool {
        match self {
            Self::Default => engine_default,
            Self::Enabled => true,
            Self::Disabled => false
        }
    }

    /// Render `name` according to this policy.
    ///
    /// Borrows the input when no conversion happens.
    #[must_use]
    pub fn apply<'a>(&self, name: &'a str, engine_default: bool) -> Cow<'a, str> {
        if self.resolve(engine_default) {
            Cow::Owned(name.to_case(Case::Camel))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// Variant name as rendered in messages and serialized output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled"
        }
    }
}

impl fmt::Display for LowerCamelCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LowerCamelCase {
    type Err = HubDocError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(HubDocError::invalid(
                "lower_camel_case",
                format!("unknown value `{value}`")
            ))
        }
    }
}

impl TryFrom<String> for LowerCamelCase {
    type Error = HubDocError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
