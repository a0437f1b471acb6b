// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hub documentation configuration.
//!
//! [`HubDocumentation`] is the validated, immutable value a documentation
//! engine reads for one hub type. It is produced by:
//!
//! - [`HubDocumentation::new`], the validating constructor;
//! - [`HubDocumentation::builder`], the same rules with named defaults;
//! - `#[derive(SignalRHub)]`, which validates at compile time;
//! - deserialization (with the `serde` feature), which routes through
//!   [`HubDocumentation::new`].
//!
//! # Validation Order
//!
//! ```text
//! path ──► trim().is_empty()? ──► InvalidConfiguration { parameter: "path" }
//!   │
//!   ▼
//! auto_discover ──► outside {None, Methods, MethodsAndArgs}?
//!   │                 └──► InvalidConfiguration { parameter: "auto_discover" }
//!   ▼
//! document_names ──► deduplicated set (None → empty = all documents)
//! ```

use std::collections::BTreeSet;

use crate::{
    DEFAULT_HUB_PATH, HUB_NAME_PLACEHOLDER, HubAutoDiscover, HubDocError, LowerCamelCase
};

/// Documentation settings declared for a single hub type.
///
/// # Example
///
/// ```rust
/// use hub_docs_core::{HubAutoDiscover, HubDocumentation, LowerCamelCase};
///
/// let docs = HubDocumentation::new(
///     "/chat",
///     HubAutoDiscover::Methods,
///     Some(["v1", "v1", "v2"]),
///     LowerCamelCase::Default
/// )
/// .unwrap();
///
/// assert_eq!(docs.path(), "/chat");
/// assert_eq!(docs.document_names().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHubDocumentation"))]
pub struct HubDocumentation {
    path:             String,
    auto_discover:    HubAutoDiscover,
    document_names:   BTreeSet<String>,
    lower_camel_case: LowerCamelCase
}

impl HubDocumentation {
    /// Validate and build a hub documentation value.
    ///
    /// `document_names` of `None` and an empty sequence both mean the hub is
    /// shown in every generated document.
    ///
    /// # Errors
    ///
    /// Returns [`HubDocError::InvalidConfiguration`] naming `path` when the
    /// path is empty or whitespace only.
    pub fn new<I, S>(
        path: impl Into<String>,
        auto_discover: HubAutoDiscover,
        document_names: Option<I>,
        lower_camel_case: LowerCamelCase
    ) -> Result<Self, HubDocError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let path = path.into();
        validate_path(&path)?;

        let document_names = document_names
            .map(|names| names.into_iter().map(Into::into).collect())
            .unwrap_or_default();

        Ok(Self {
            path,
            auto_discover,
            document_names,
            lower_camel_case
        })
    }

    /// Start a builder initialised with the default values.
    #[must_use]
    pub fn builder() -> HubDocumentationBuilder {
        HubDocumentationBuilder::default()
    }

    /// Assemble a value from a path that is known to be non-blank.
    pub(crate) fn from_checked_path<'a>(
        path: &str,
        auto_discover: HubAutoDiscover,
        document_names: impl IntoIterator<Item = &'a str>,
        lower_camel_case: LowerCamelCase
    ) -> Self {
        Self {
            path: path.to_owned(),
            auto_discover,
            document_names: document_names.into_iter().map(str::to_owned).collect(),
            lower_camel_case
        }
    }

    /// Path template, possibly containing [`HUB_NAME_PLACEHOLDER`].
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Auto-discovery mode for undecorated members.
    #[must_use]
    pub const fn auto_discover(&self) -> HubAutoDiscover {
        self.auto_discover
    }

    /// Documents the hub is shown in; empty means all documents.
    #[must_use]
    pub const fn document_names(&self) -> &BTreeSet<String> {
        &self.document_names
    }

    /// Lower camel case policy for member names.
    #[must_use]
    pub const fn lower_camel_case(&self) -> LowerCamelCase {
        self.lower_camel_case
    }

    /// Substitute every placeholder in the path with `hub_name`.
    ///
    /// ```rust
    /// use hub_docs_core::HubDocumentation;
    ///
    /// let docs = HubDocumentation::builder().path("/hubs/[Hub]").build().unwrap();
    /// assert_eq!(docs.resolve_path("ChatHub"), "/hubs/ChatHub");
    /// ```
    #[must_use]
    pub fn resolve_path(&self, hub_name: &str) -> String {
        self.path.replace(HUB_NAME_PLACEHOLDER, hub_name)
    }

    /// Check if the hub belongs to every generated document.
    #[must_use]
    pub fn applies_to_all_documents(&self) -> bool {
        self.document_names.is_empty()
    }

    /// Check if the hub is shown in the document called `document_name`.
    #[must_use]
    pub fn is_in_document(&self, document_name: &str) -> bool {
        self.applies_to_all_documents() || self.document_names.contains(document_name)
    }
}

impl Default for HubDocumentation {
    fn default() -> Self {
        Self {
            path:             DEFAULT_HUB_PATH.to_owned(),
            auto_discover:    HubAutoDiscover::default(),
            document_names:   BTreeSet::new(),
            lower_camel_case: LowerCamelCase::default()
        }
    }
}

fn validate_path(path: &str) -> Result<(), HubDocError> {
    if path.trim().is_empty() {
        return Err(HubDocError::invalid("path", "path is null or empty"));
    }
    Ok(())
}

/// Auto-discover input kept unresolved until [`HubDocumentationBuilder::build`].
#[derive(Debug, Clone)]
enum AutoDiscoverInput {
    Mode(HubAutoDiscover),
    Named(String)
}

/// Builder for [`HubDocumentation`].
///
/// Values are validated in [`build`](Self::build), in the same order as
/// [`HubDocumentation::new`].
///
/// ```rust
/// use hub_docs_core::{HubAutoDiscover, HubDocumentation};
///
/// let docs = HubDocumentation::builder()
///     .path("/notifications")
///     .auto_discover_named("methods_and_args")
///     .document_name("internal")
///     .build()
///     .unwrap();
///
/// assert_eq!(docs.auto_discover(), HubAutoDiscover::MethodsAndArgs);
/// ```
#[derive(Debug, Clone)]
pub struct HubDocumentationBuilder {
    path:             String,
    auto_discover:    AutoDiscoverInput,
    document_names:   Vec<String>,
    lower_camel_case: LowerCamelCase
}

impl Default for HubDocumentationBuilder {
    fn default() -> Self {
        Self {
            path:             DEFAULT_HUB_PATH.to_owned(),
            auto_discover:    AutoDiscoverInput::Mode(HubAutoDiscover::default()),
            document_names:   Vec::new(),
            lower_camel_case: LowerCamelCase::default()
        }
    }
}

impl HubDocumentationBuilder {
    /// Set the path template.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the auto-discover mode.
    #[must_use]
    pub fn auto_discover(mut self, mode: HubAutoDiscover) -> Self {
        self.auto_discover = AutoDiscoverInput::Mode(mode);
        self
    }

    /// Set the auto-discover mode by name, validated on [`build`](Self::build).
    #[must_use]
    pub fn auto_discover_named(mut self, mode: impl Into<String>) -> Self {
        self.auto_discover = AutoDiscoverInput::Named(mode.into());
        self
    }

    /// Add one document name.
    #[must_use]
    pub fn document_name(mut self, name: impl Into<String>) -> Self {
        self.document_names.push(name.into());
        self
    }

    /// Add several document names.
    #[must_use]
    pub fn document_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.document_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the lower camel case policy.
    #[must_use]
    pub fn lower_camel_case(mut self, rule: LowerCamelCase) -> Self {
        self.lower_camel_case = rule;
        self
    }

    /// Validate and build the documentation value.
    ///
    /// # Errors
    ///
    /// Returns [`HubDocError::InvalidConfiguration`] naming `path` for an
    /// empty path, or naming `auto_discover` (with the rejected value) for an
    /// unknown mode name.
    pub fn build(self) -> Result<HubDocumentation, HubDocError> {
        validate_path(&self.path)?;
        let auto_discover = match self.auto_discover {
            AutoDiscoverInput::Mode(mode) => mode,
            AutoDiscoverInput::Named(name) => name.parse()?
        };
        HubDocumentation::new(
            self.path,
            auto_discover,
            Some(self.document_names),
            self.lower_camel_case
        )
    }
}

/// Unvalidated shape accepted from configuration files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawHubDocumentation {
    path:             String,
    auto_discover:    HubAutoDiscover,
    document_names:   Option<Vec<String>>,
    lower_camel_case: LowerCamelCase
}

#[cfg(feature = "serde")]
impl Default for RawHubDocumentation {
    fn default() -> Self {
        Self {
            path:             DEFAULT_HUB_PATH.to_owned(),
            auto_discover:    HubAutoDiscover::default(),
            document_names:   None,
            lower_camel_case: LowerCamelCase::default()
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawHubDocumentation> for HubDocumentation {
    type Error = HubDocError;

    fn try_from(raw: RawHubDocumentation) -> Result<Self, Self::Error> {
        Self::new(
            raw.path,
            raw.auto_discover,
            raw.document_names,
            raw.lower_camel_case
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_NAMES: Option<[&str; 0]> = None;

    #[test]
    fn accessors_return_inputs() {
        for mode in HubAutoDiscover::ALL {
            let docs =
                HubDocumentation::new("/hub", mode, Some(["a"]), LowerCamelCase::Enabled).unwrap();
            assert_eq!(docs.path(), "/hub");
            assert_eq!(docs.auto_discover(), mode);
            assert_eq!(
                docs.document_names(),
                &BTreeSet::from(["a".to_string()])
            );
            assert_eq!(docs.lower_camel_case(), LowerCamelCase::Enabled);
        }
    }

    #[test]
    fn empty_path_rejected() {
        for path in ["", "   ", "\t\n"] {
            let err = HubDocumentation::new(
                path,
                HubAutoDiscover::None,
                NO_NAMES,
                LowerCamelCase::Default
            )
            .unwrap_err();
            assert_eq!(err.parameter(), Some("path"));
        }
    }

    #[test]
    fn document_names_deduplicated() {
        let docs = HubDocumentation::new(
            "/hub",
            HubAutoDiscover::None,
            Some(vec!["A", "B", "A"]),
            LowerCamelCase::Default
        )
        .unwrap();
        let expected: BTreeSet<String> = ["A", "B"].into_iter().map(String::from).collect();
        assert_eq!(docs.document_names(), &expected);
    }

    #[test]
    fn missing_document_names_means_all() {
        let docs = HubDocumentation::new(
            "/hub",
            HubAutoDiscover::None,
            NO_NAMES,
            LowerCamelCase::Default
        )
        .unwrap();
        assert!(docs.document_names().is_empty());
        assert!(docs.applies_to_all_documents());
        assert!(docs.is_in_document("v1"));
        assert!(docs.is_in_document("anything"));
    }

    #[test]
    fn document_filter() {
        let docs = HubDocumentation::builder()
            .document_names(["v1", "v2"])
            .build()
            .unwrap();
        assert!(docs.is_in_document("v1"));
        assert!(docs.is_in_document("v2"));
        assert!(!docs.is_in_document("v3"));
        assert!(!docs.applies_to_all_documents());
    }

    #[test]
    fn defaults() {
        let built = HubDocumentation::builder().build().unwrap();
        assert_eq!(built.path(), DEFAULT_HUB_PATH);
        assert_eq!(built.auto_discover(), HubAutoDiscover::None);
        assert_eq!(built.lower_camel_case(), LowerCamelCase::Default);
        assert!(built.document_names().is_empty());
        assert_eq!(built, HubDocumentation::default());
    }

    #[test]
    fn equal_inputs_give_equal_independent_values() {
        let build = || {
            HubDocumentation::new(
                "/chat",
                HubAutoDiscover::Methods,
                Some(["v1"]),
                LowerCamelCase::Default
            )
            .unwrap()
        };
        let first = build();
        let second = build();
        assert_eq!(first, second);
        assert!(!std::ptr::eq(first.path(), second.path()));
    }

    #[test]
    fn chat_scenario() {
        let docs = HubDocumentation::new(
            "/chat",
            HubAutoDiscover::Methods,
            Some(["v1", "v1", "v2"]),
            LowerCamelCase::Default
        )
        .unwrap();
        let names: Vec<&str> = docs.document_names().iter().map(String::as_str).collect();
        assert_eq!(names, ["v1", "v2"]);
        assert_eq!(docs.path(), "/chat");
        assert_eq!(docs.auto_discover(), HubAutoDiscover::Methods);
    }

    #[test]
    fn resolve_path_substitutes_every_placeholder() {
        let docs = HubDocumentation::builder()
            .path("/[Hub]/v1/[Hub]")
            .build()
            .unwrap();
        assert_eq!(docs.resolve_path("Chat"), "/Chat/v1/Chat");

        let fixed = HubDocumentation::builder().path("/chat").build().unwrap();
        assert_eq!(fixed.resolve_path("Chat"), "/chat");
    }

    #[test]
    fn builder_rejects_unknown_mode_name() {
        let err = HubDocumentation::builder()
            .auto_discover_named("All")
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("auto_discover"));
        assert!(err.to_string().contains("All"));
    }

    #[test]
    fn builder_checks_path_before_mode() {
        let err = HubDocumentation::builder()
            .path("")
            .auto_discover_named("All")
            .build()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("path"));
    }

    #[cfg(feature = "serde")]
    mod serde_support {
        use super::*;

        #[test]
        fn deserialize_defaults() {
            let docs: HubDocumentation = serde_json::from_str("{}").unwrap();
            assert_eq!(docs, HubDocumentation::default());
        }

        #[test]
        fn deserialize_full() {
            let docs: HubDocumentation = serde_json::from_str(
                r#"{
                    "path": "/chat",
                    "auto_discover": "MethodsAndArgs",
                    "document_names": ["v1", "v1"],
                    "lower_camel_case": "Enabled"
                }"#
            )
            .unwrap();
            assert_eq!(docs.path(), "/chat");
            assert_eq!(docs.auto_discover(), HubAutoDiscover::MethodsAndArgs);
            assert_eq!(docs.document_names().len(), 1);
            assert_eq!(docs.lower_camel_case(), LowerCamelCase::Enabled);
        }

        #[test]
        fn deserialize_rejects_empty_path() {
            let err = serde_json::from_str::<HubDocumentation>(r#"{"path": ""}"#).unwrap_err();
            assert!(err.to_string().contains("path"));
        }

        #[test]
        fn deserialize_rejects_unknown_mode() {
            let err = serde_json::from_str::<HubDocumentation>(r#"{"auto_discover": "All"}"#)
                .unwrap_err();
            assert!(err.to_string().contains("`All`"));
        }

        #[test]
        fn serialize_round_trip() {
            let docs = HubDocumentation::builder()
                .path("/chat")
                .auto_discover(HubAutoDiscover::Methods)
                .document_names(["v2", "v1"])
                .build()
                .unwrap();
            let json = serde_json::to_value(&docs).unwrap();
            assert_eq!(json["auto_discover"], "Methods");
            assert_eq!(json["document_names"], serde_json::json!(["v1", "v2"]));
            let back: HubDocumentation = serde_json::from_value(json).unwrap();
            assert_eq!(back, docs);
        }
    }
}
