// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction utilities.
//!
//! Doc comments (`///` and `/** */`) reach the macro as `#[doc = "..."]`
//! attributes. The cleaned text becomes the hub's `DESCRIPTION`, which
//! documentation engines use as the tag description of the hub.
//!
//! # Example
//!
//! ```rust,ignore
//! /// Chat hub.
//! ///
//! /// Broadcasts messages to connected clients.
//! #[derive(SignalRHub)]
//! pub struct ChatHub;
//!
//! // Extracts to: "Chat hub.\n\nBroadcasts messages to connected clients."
//! ```

use syn::Attribute;

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming whitespace from each line.
///
/// Returns `None` if no non-empty doc comment is present.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
