// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `auto_discover` attribute value.
//!
//! Only the three modes a hub may declare are accepted. Broader modes valid
//! on other documentation attributes (such as `all` or `params`) are rejected
//! at compile time with the offending value in the message.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// Auto-discover mode parsed from `#[signalr_hub(auto_discover = "...")]`.
///
/// # Accepted Values
///
/// - `"none"` → [`AutoDiscoverMode::None`]
/// - `"methods"` → [`AutoDiscoverMode::Methods`]
/// - `"methods_and_args"`, `"MethodsAndArgs"` → [`AutoDiscoverMode::MethodsAndArgs`]
///
/// Values are case-insensitive; `_` and `-` separators are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoDiscoverMode {
    /// Only decorated members are documented.
    #[default]
    None,

    /// Every method is documented.
    Methods,

    /// Every method and argument is documented.
    MethodsAndArgs
}

impl AutoDiscoverMode {
    /// Path to the matching runtime variant under `krate`.
    pub fn to_runtime(self, krate: &TokenStream) -> TokenStream {
        match self {
            Self::None => quote! { #krate::HubAutoDiscover::None },
            Self::Methods => quote! { #krate::HubAutoDiscover::Methods },
            Self::MethodsAndArgs => quote! { #krate::HubAutoDiscover::MethodsAndArgs }
        }
    }
}

impl FromMeta for AutoDiscoverMode {
    fn from_string(value: &str) -> darling::Result<Self> {
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
            _ => Err(darling::Error::custom(format!(
                "value `{value}` not allowed for `auto_discover`; expected one of \
                 `none`, `methods`, `methods_and_args`"
            )))
        }
    }
}
