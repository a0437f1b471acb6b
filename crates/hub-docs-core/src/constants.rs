// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide constants shared by the runtime types and generated code.

/// Placeholder replaced with the hub's type name when the path is resolved.
pub const HUB_NAME_PLACEHOLDER: &str = "[Hub]";

/// Path template used when a hub declares no `path`.
///
/// Resolves to `/ChatHub` for a hub named `ChatHub`.
pub const DEFAULT_HUB_PATH: &str = "/[Hub]";
