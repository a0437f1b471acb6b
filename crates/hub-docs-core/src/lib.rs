// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core types for hub-docs.
//!
//! This crate provides the runtime side of hub documentation: the validated
//! configuration value a documentation engine reads, the trait generated by
//! `#[derive(SignalRHub)]`, and the startup registry engines query.
//!
//! # Overview
//!
//! - [`HubDocumentation`] — Immutable, validated per-hub configuration
//! - [`HubAutoDiscover`] — Auto-discovery modes allowed on hubs
//! - [`LowerCamelCase`] — Member name casing policy
//! - [`SignalRHub`] — Trait implemented by documented hub types
//! - [`HubRegistry`] — `TypeId`-keyed registry populated at startup
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `hub-docs` directly, which re-exports this crate.
//!
//! ```rust
//! use hub_docs_core::prelude::*;
//!
//! struct ChatHub;
//!
//! let docs = HubDocumentation::builder()
//!     .path("/hubs/[Hub]")
//!     .auto_discover(HubAutoDiscover::Methods)
//!     .document_name("v1")
//!     .build()?;
//!
//! let mut registry = HubRegistry::new();
//! registry.register_with::<ChatHub>("ChatHub", docs)?;
//!
//! let in_v1: Vec<String> = registry.in_document("v1").map(HubEntry::path).collect();
//! assert_eq!(in_v1, ["/hubs/ChatHub"]);
//! # Ok::<(), HubDocError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod auto_discover;
mod casing;
mod constants;
mod documentation;
mod error;
mod hub;
pub mod prelude;
mod registry;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use auto_discover::HubAutoDiscover;
pub use casing::LowerCamelCase;
pub use constants::{DEFAULT_HUB_PATH, HUB_NAME_PLACEHOLDER};
pub use documentation::{HubDocumentation, HubDocumentationBuilder};
pub use error::HubDocError;
pub use hub::SignalRHub;
pub use registry::{HubEntry, HubRegistry};
