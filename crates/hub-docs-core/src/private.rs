// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Support items for code generated by `#[derive(SignalRHub)]`.
//!
//! Not public API. Generated code evaluates [`DeclaredPath::new`] in a
//! `const` item, so a blank path literal is a compile error and
//! [`declared_documentation`] never sees one.

use crate::{HubAutoDiscover, HubDocumentation, LowerCamelCase};

/// Path literal checked to be non-blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredPath(&'static str);

impl DeclaredPath {
    /// Check `path` during constant evaluation.
    ///
    /// # Panics
    ///
    /// When `path` is empty or whitespace only. In a `const` item this is a
    /// compile error.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        assert!(!is_blank(path), "`path` is null or empty");
        Self(path)
    }

    /// The checked literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Build the documentation of a derived hub.
#[must_use]
pub fn declared_documentation(
    path: DeclaredPath,
    auto_discover: HubAutoDiscover,
    document_names: &[&'static str],
    lower_camel_case: LowerCamelCase
) -> HubDocumentation {
    HubDocumentation::from_checked_path(
        path.as_str(),
        auto_discover,
        document_names.iter().copied(),
        lower_camel_case
    )
}

/// `const` counterpart of `path.trim().is_empty()`.
const fn is_blank(path: &str) -> bool {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i] as u32;
        let (code, width) = if lead < 0x80 {
            (lead, 1)
        } else if lead < 0xE0 {
            (((lead & 0x1F) << 6) | (bytes[i + 1] as u32 & 0x3F), 2)
        } else if lead < 0xF0 {
            (
                ((lead & 0x0F) << 12)
                    | ((bytes[i + 1] as u32 & 0x3F) << 6)
                    | (bytes[i + 2] as u32 & 0x3F),
                3
            )
        } else {
            (
                ((lead & 0x07) << 18)
                    | ((bytes[i + 1] as u32 & 0x3F) << 12)
                    | ((bytes[i + 2] as u32 & 0x3F) << 6)
                    | (bytes[i + 3] as u32 & 0x3F),
                4
            )
        };
        if !is_white_space(code) {
            return false;
        }
        i += width;
    }
    true
}

/// Unicode `White_Space`, the set `char::is_whitespace` matches.
const fn is_white_space(code: u32) -> bool {
    matches!(
        code,
        0x09..=0x0D
            | 0x20
            | 0x85
            | 0xA0
            | 0x1680
            | 0x2000..=0x200A
            | 0x2028
            | 0x2029
            | 0x202F
            | 0x205F
            | 0x3000
    )
}
