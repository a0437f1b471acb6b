// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use hub_docs::SignalRHub;

#[derive(SignalRHub)]
#[signalr_hub(path = "/chat")]
#[signalr_hub(auto_discover = "methods")]
pub struct ChatHub;

fn main() {
    let _ = ChatHub;
}
