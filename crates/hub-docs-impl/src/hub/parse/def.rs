// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HubDef definition and construction.

use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, ext::IdentExt};

use super::{AutoDiscoverMode, CamelCaseRule, HubAttrs};
use crate::utils::docs::extract_doc_comments;

/// Complete, validated hub declaration.
///
/// Every value has passed the same checks the runtime constructor performs,
/// so generated code can build the documentation without a fallible call.
#[derive(Debug)]
pub struct HubDef {
    /// Type identifier.
    pub ident: Ident,

    /// Generics of the annotated type.
    pub generics: Generics,

    /// Name substituted for the `[Hub]` placeholder.
    pub hub_name: String,

    /// Non-empty route template; `None` uses the runtime default.
    pub path: Option<String>,

    /// Auto-discover mode.
    pub auto_discover: AutoDiscoverMode,

    /// Document names, duplicates collapsed, declaration order kept.
    pub document_names: Vec<String>,

    /// Casing policy.
    pub lower_camel_case: CamelCaseRule,

    /// Doc comments of the annotated type.
    pub description: Option<String>,

    /// Runtime crate path override.
    krate: Option<syn::Path>
}

impl HubDef {
    /// Parse and validate a hub declaration.
    ///
    /// # Errors
    ///
    /// - More than one `#[signalr_hub]` attribute
    /// - Applied to a union
    /// - Empty or whitespace-only `path`
    /// - `auto_discover` outside `none`, `methods`, `methods_and_args`
    /// - Unknown `lower_camel_case` value
    /// - Non-string document names
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();

        for duplicate in input
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("signalr_hub"))
            .skip(1)
        {
            errors.push(
                darling::Error::custom("at most one #[signalr_hub] attribute is allowed per type")
                    .with_span(duplicate.path())
            );
        }

        let attrs = errors.handle(HubAttrs::from_derive_input(input));

        let path = attrs
            .as_ref()
            .and_then(|attrs| attrs.path.as_ref())
            .map(|lit| {
                let value = lit.value();
                if value.trim().is_empty() {
                    errors.push(darling::Error::custom("`path` is null or empty").with_span(lit));
                }
                value
            });

        errors.finish()?;
        let Some(attrs) = attrs else {
            return Err(darling::Error::custom("invalid #[signalr_hub] attribute")
                .with_span(&input.ident));
        };

        let mut document_names = Vec::with_capacity(attrs.document_names.0.len());
        for name in attrs.document_names.0 {
            if !document_names.contains(&name) {
                document_names.push(name);
            }
        }

        Ok(Self {
            hub_name: attrs.ident.unraw().to_string(),
            ident: attrs.ident,
            generics: attrs.generics,
            path,
            auto_discover: attrs.auto_discover,
            document_names,
            lower_camel_case: attrs.lower_camel_case,
            description: extract_doc_comments(&input.attrs),
            krate: attrs.krate
        })
    }

    /// Path to the runtime crate in generated code.
    pub fn krate(&self) -> TokenStream {
        self.krate
            .as_ref()
            .map_or_else(|| quote! { ::hub_docs }, |path| quote! { #path })
    }
}
