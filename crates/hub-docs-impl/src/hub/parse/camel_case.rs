// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `lower_camel_case` attribute value.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// Casing policy parsed from `#[signalr_hub(lower_camel_case = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CamelCaseRule {
    /// Defer to the documentation engine.
    #[default]
    Default,

    /// Always convert member names.
    Enabled,

    /// Never convert member names.
    Disabled
}

impl CamelCaseRule {
    /// Path to the matching runtime variant under `krate`.
    pub fn to_runtime(self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::Default => quote! { #krate::LowerCamelCase::Default },
            Self::Enabled => quote! { #krate::LowerCamelCase::Enabled },
            Self::Disabled => quote! { #krate::LowerCamelCase::Disabled }
        }
    }
}

impl FromMeta for CamelCaseRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            _ => Err(darling::Error::unknown_value(value))
        }
    }

    fn from_bool(value: bool) -> darling::Result<Self> {
        Ok(if value { Self::Enabled } else { Self::Disabled })
    }

    /// Bare `lower_camel_case` enables conversion.
    fn from_word() -> darling::Result<Self> {
        Ok(Self::Enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_meta_values() {
        assert_eq!(
            CamelCaseRule::from_string("default").unwrap(),
            CamelCaseRule::Default
        );
        assert_eq!(
            CamelCaseRule::from_string("Enabled").unwrap(),
            CamelCaseRule::Enabled
        );
        assert_eq!(
            CamelCaseRule::from_string("DISABLED").unwrap(),
            CamelCaseRule::Disabled
        );
        assert!(CamelCaseRule::from_string("snake").is_err());
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(
            CamelCaseRule::from_string(" enabled").unwrap(),
            CamelCaseRule::Enabled
        );
        assert_eq!(
            CamelCaseRule::from_string("Disabled\t").unwrap(),
            CamelCaseRule::Disabled
        );
    }

    #[test]
    fn from_bool() {
        assert_eq!(
            CamelCaseRule::from_bool(true).unwrap(),
            CamelCaseRule::Enabled
        );
        assert_eq!(
            CamelCaseRule::from_bool(false).unwrap(),
            CamelCaseRule::Disabled
        );
    }
}
