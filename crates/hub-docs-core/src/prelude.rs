// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hub_docs_core::prelude::*;
//! ```

pub use crate::{
    DEFAULT_HUB_PATH, HubAutoDiscover, HubDocError, HubDocumentation, HubEntry, HubRegistry,
    LowerCamelCase, SignalRHub
};
