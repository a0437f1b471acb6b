// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(SignalRHub)]
//! #[signalr_hub(
//!     path = "/hubs/[Hub]",          // Optional: route template (default: "/[Hub]")
//!     auto_discover = "methods",     // Optional: "none" | "methods" | "methods_and_args"
//!     document_names("v1", "v2"),    // Optional: documents to appear in (default: all)
//!     lower_camel_case = "enabled",  // Optional: "default" | "enabled" | "disabled"
//!     crate = "hub_docs_core"        // Optional: runtime crate path (default: hub_docs)
//! )]
//! pub struct ChatHub;
//! ```
//!
//! # Validation
//!
//! | Input | Result |
//! |-------|--------|
//! | `path = ""` or whitespace | compile error naming `path` |
//! | `auto_discover = "all"` | compile error naming `auto_discover` and `all` |
//! | two `#[signalr_hub]` attributes | compile error |
//! | `union` | compile error |

mod hub;
mod utils;

use proc_macro::TokenStream;

/// Derive macro implementing `SignalRHub` for a hub type.
///
/// The attribute is optional; without it every setting takes its default.
/// The type's doc comments become the hub description.
///
/// # Example
///
/// ```rust,ignore
/// use hub_docs::SignalRHub;
///
/// /// Real-time chat.
/// #[derive(SignalRHub)]
/// #[signalr_hub(path = "/chat", auto_discover = "methods", document_names("v1"))]
/// pub struct ChatHub;
///
/// assert_eq!(ChatHub::HUB_NAME, "ChatHub");
/// assert_eq!(ChatHub::hub_documentation().path(), "/chat");
/// ```
#[proc_macro_derive(SignalRHub, attributes(signalr_hub))]
pub fn derive_signalr_hub(input: TokenStream) -> TokenStream {
    hub::derive(input)
}
