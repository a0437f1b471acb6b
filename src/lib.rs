// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # hub-docs
//!
//! One crate, all features. Re-exports:
//! - [`SignalRHub`](macro@SignalRHub) derive macro from `hub-docs-impl`
//! - All types from `hub-docs-core` ([`HubDocumentation`], [`HubRegistry`],
//!   [`HubAutoDiscover`], [`LowerCamelCase`])
//!
//! # Quick Start
//!
//! ```rust
//! use hub_docs::{HubAutoDiscover, HubRegistry, SignalRHub};
//!
//! /// Real-time chat.
//! #[derive(SignalRHub)]
//! #[signalr_hub(path = "/hubs/[Hub]", auto_discover = "methods", document_names("v1"))]
//! pub struct ChatHub;
//!
//! let mut registry = HubRegistry::new();
//! registry.register::<ChatHub>()?;
//!
//! let entry = registry.get::<ChatHub>().unwrap();
//! assert_eq!(entry.path(), "/hubs/ChatHub");
//! assert_eq!(entry.documentation().auto_discover(), HubAutoDiscover::Methods);
//! assert_eq!(entry.description(), Some("Real-time chat."));
//! # Ok::<(), hub_docs::HubDocError>(())
//! ```

pub use hub_docs_core::*;
pub use hub_docs_impl::SignalRHub;
