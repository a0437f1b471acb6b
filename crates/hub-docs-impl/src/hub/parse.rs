// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the SignalRHub derive macro.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── attrs.rs          - HubAttrs (darling parsing struct)
//! ├── def.rs            - HubDef (validated declaration)
//! ├── auto_discover.rs  - AutoDiscoverMode (none, methods, methods_and_args)
//! ├── camel_case.rs     - CamelCaseRule (default, enabled, disabled)
//! └── document_names.rs - DocumentNames (string list)
//! ```
//!
//! # Parsing Strategy
//!
//! `#[signalr_hub(...)]` is parsed with darling's `FromDeriveInput`. Checks
//! darling cannot express (empty path, repeated attribute) run afterwards in
//! [`HubDef::from_derive_input`], accumulating every error so a single
//! compilation reports all of them.

mod attrs;
mod auto_discover;
mod camel_case;
mod def;
mod document_names;

pub use attrs::HubAttrs;
pub use auto_discover::AutoDiscoverMode;
pub use camel_case::CamelCaseRule;
pub use def::HubDef;
pub use document_names::DocumentNames;
