// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::marker::PhantomData;

use hub_docs::SignalRHub;

#[derive(SignalRHub)]
#[signalr_hub(auto_discover = "methods")]
pub enum PresenceHub {
    Online,
    Offline,
}

#[derive(SignalRHub)]
#[signalr_hub(path = "/typed/[Hub]", document_names = "internal")]
pub struct TypedHub<T>
where
    T: Send,
{
    marker: PhantomData<T>,
}

fn main() {
    assert!(PresenceHub::hub_documentation().auto_discover().includes_methods());
    assert_eq!(TypedHub::<u8>::documented_path(), "/typed/TypedHub");
    assert!(TypedHub::<String>::hub_documentation().is_in_document("internal"));
    assert!(!TypedHub::<String>::hub_documentation().is_in_document("public"));
}
