// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use hub_docs::{HubAutoDiscover, LowerCamelCase, SignalRHub};

/// Broadcasts chat messages.
#[derive(SignalRHub)]
#[signalr_hub(
    path = "/hubs/[Hub]",
    auto_discover = "methods_and_args",
    document_names("v1", "v1", "v2"),
    lower_camel_case = "enabled"
)]
pub struct ChatHub {
    pub rooms: Vec<String>,
}

fn main() {
    let docs = ChatHub::hub_documentation();
    assert_eq!(docs.auto_discover(), HubAutoDiscover::MethodsAndArgs);
    assert_eq!(docs.lower_camel_case(), LowerCamelCase::Enabled);
    assert_eq!(docs.document_names().len(), 2);
    assert_eq!(ChatHub::documented_path(), "/hubs/ChatHub");
    assert_eq!(ChatHub::DESCRIPTION, Some("Broadcasts chat messages."));
}
