// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Verifies that `#[signalr_hub(crate = "...")]` is accepted. Uses the facade
//! name as a self-referential alias so no extra dependency is needed.

mod docs {
    pub use hub_docs::*;
}

#[derive(docs::SignalRHub)]
#[signalr_hub(crate = "docs", lower_camel_case = false)]
pub struct AliasHub;

fn main() {
    use docs::SignalRHub;

    assert_eq!(
        AliasHub::hub_documentation().lower_camel_case(),
        docs::LowerCamelCase::Disabled
    );
}
