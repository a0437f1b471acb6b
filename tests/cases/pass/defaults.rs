// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use hub_docs::{DEFAULT_HUB_PATH, HubAutoDiscover, LowerCamelCase, SignalRHub};

#[derive(SignalRHub)]
pub struct ChatHub;

fn main() {
    let docs = ChatHub::hub_documentation();
    assert_eq!(docs.path(), DEFAULT_HUB_PATH);
    assert_eq!(docs.auto_discover(), HubAutoDiscover::None);
    assert_eq!(docs.lower_camel_case(), LowerCamelCase::Default);
    assert!(docs.document_names().is_empty());
    assert_eq!(ChatHub::documented_path(), "/ChatHub");
}
