// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hub-level attribute parsing with darling.
//!
//! This module defines the internal [`HubAttrs`] structure used for parsing
//! `#[signalr_hub(...)]`. The public API uses [`HubDef`](super::HubDef).
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `path` | No | `"/[Hub]"` | Route template, `[Hub]` becomes the type name |
//! | `auto_discover` | No | `"none"` | `none` \| `methods` \| `methods_and_args` |
//! | `document_names` | No | all documents | Documents the hub is shown in |
//! | `lower_camel_case` | No | `"default"` | `default` \| `enabled` \| `disabled` |
//! | `crate` | No | `hub_docs` | Path to the runtime crate in generated code |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

use super::{AutoDiscoverMode, CamelCaseRule, DocumentNames};

/// Hub-level attributes parsed from `#[signalr_hub(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[signalr_hub(
///     path = "/hubs/[Hub]",
///     auto_discover = "methods",
///     document_names("v1", "v2"),
///     lower_camel_case = "enabled"
/// )]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(signalr_hub), supports(struct_any, enum_any))]
pub struct HubAttrs {
    /// Type identifier (e.g., `ChatHub`).
    pub ident: Ident,

    /// Generics forwarded to the generated impl.
    pub generics: Generics,

    /// Route template literal, kept as a literal for error spans.
    pub path: Option<syn::LitStr>,

    /// Auto-discover mode.
    #[darling(default)]
    pub auto_discover: AutoDiscoverMode,

    /// Target documents.
    #[darling(default)]
    pub document_names: DocumentNames,

    /// Casing policy.
    #[darling(default)]
    pub lower_camel_case: CamelCaseRule,

    /// Override for the runtime crate path.
    ///
    /// ```rust,ignore
    /// #[signalr_hub(crate = "hub_docs_core")]
    /// ```
    #[darling(rename = "crate")]
    pub krate: Option<syn::Path>
}
