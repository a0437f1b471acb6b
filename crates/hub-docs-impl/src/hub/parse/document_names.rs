// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `document_names` attribute value.
//!
//! Two spellings are accepted:
//!
//! ```rust,ignore
//! #[signalr_hub(document_names("v1", "v2"))]
//! #[signalr_hub(document_names = "v1")]
//! ```
//!
//! Duplicates are kept here and collapsed by the runtime value.

use darling::{FromMeta, ast::NestedMeta};

/// Document names listed on the hub; empty means every document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentNames(pub Vec<String>);

impl FromMeta for DocumentNames {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(Self(vec![value.to_owned()]))
    }

    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut names = Vec::with_capacity(items.len());

        for item in items {
            match item {
                NestedMeta::Lit(syn::Lit::Str(lit)) => names.push(lit.value()),
                NestedMeta::Lit(lit) => errors.push(
                    darling::Error::custom("document name must be a string literal")
                        .with_span(lit)
                ),
                NestedMeta::Meta(meta) => errors.push(
                    darling::Error::custom("document name must be a string literal")
                        .with_span(meta)
                )
            }
        }

        errors.finish_with(Self(names))
    }
}
