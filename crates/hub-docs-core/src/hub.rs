// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The trait a documented hub type implements.

use crate::HubDocumentation;

/// A hub type that carries documentation settings.
///
/// Usually implemented by `#[derive(SignalRHub)]`. Implement it by hand for
/// hubs described by a trait object or configured at runtime.
///
/// The implementation belongs to exactly one type: it is not inherited by
/// wrappers or by types implementing a hub trait, each of which must declare
/// its own.
///
/// # Example
///
/// ```rust
/// use hub_docs_core::{HubDocumentation, SignalRHub};
///
/// struct ChatHub;
///
/// impl SignalRHub for ChatHub {
///     const HUB_NAME: &'static str = "ChatHub";
///
///     fn hub_documentation() -> HubDocumentation {
///         HubDocumentation::default()
///     }
/// }
///
/// assert_eq!(ChatHub::documented_path(), "/ChatHub");
/// ```
pub trait SignalRHub {
    /// Simple type name substituted for the path placeholder.
    const HUB_NAME: &'static str;

    /// Summary taken from the type's doc comments.
    const DESCRIPTION: Option<&'static str> = None;

    /// The declared documentation settings.
    fn hub_documentation() -> HubDocumentation;

    /// Path template resolved against [`HUB_NAME`](Self::HUB_NAME).
    fn documented_path() -> String {
        Self::hub_documentation().resolve_path(Self::HUB_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HubAutoDiscover;

    struct Notifications;

    impl SignalRHub for Notifications {
        const HUB_NAME: &'static str = "Notifications";
        const DESCRIPTION: Option<&'static str> = Some("Push notifications.");

        fn hub_documentation() -> HubDocumentation {
            HubDocumentation::builder()
                .path("/api/[Hub]")
                .auto_discover(HubAutoDiscover::Methods)
                .build()
                .unwrap()
        }
    }

    #[test]
    fn documented_path_uses_hub_name() {
        assert_eq!(Notifications::documented_path(), "/api/Notifications");
    }

    #[test]
    fn description_override() {
        assert_eq!(Notifications::DESCRIPTION, Some("Push notifications."));
    }
}
