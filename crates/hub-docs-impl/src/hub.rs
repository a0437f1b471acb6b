// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SignalRHub derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! hub.rs (orchestrator)
//! │
//! ├── parse/        → Attribute parsing and validation (HubDef)
//! │
//! └── trait_gen.rs  → impl SignalRHub for the annotated type
//! ```
//!
//! # Generated Code
//!
//! For a hub like:
//!
//! ```rust,ignore
//! /// Chat hub.
//! #[derive(SignalRHub)]
//! #[signalr_hub(path = "/hubs/[Hub]", auto_discover = "methods")]
//! pub struct ChatHub;
//! ```
//!
//! The macro generates:
//!
//! ```rust,ignore
//! impl ::hub_docs::SignalRHub for ChatHub {
//!     const HUB_NAME: &'static str = "ChatHub";
//!     const DESCRIPTION: Option<&'static str> = Some("Chat hub.");
//!
//!     fn hub_documentation() -> ::hub_docs::HubDocumentation {
//!         const PATH: ::hub_docs::__private::DeclaredPath =
//!             ::hub_docs::__private::DeclaredPath::new("/hubs/[Hub]");
//!         ::hub_docs::__private::declared_documentation(
//!             PATH,
//!             ::hub_docs::HubAutoDiscover::Methods,
//!             &[],
//!             ::hub_docs::LowerCamelCase::Default
//!         )
//!     }
//! }
//! ```

pub mod parse;
mod trait_gen;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::HubDef;

/// Main entry point for the SignalRHub derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match HubDef::from_derive_input(&input) {
        Ok(hub) => trait_gen::generate(&hub).into(),
        Err(err) => err.write_errors().into()
    }
}
