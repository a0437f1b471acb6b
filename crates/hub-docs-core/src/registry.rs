// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Startup registry of documented hubs.
//!
//! Documentation engines look hubs up here instead of scanning types. The
//! registry is filled once during startup through `&mut self`, then shared
//! read-only (for example behind an `Arc`).
//!
//! # Lookup Paths
//!
//! ```text
//! HubRegistry
//! ├── entries: Vec<HubEntry>        registration order, used by iter()
//! └── index:   TypeId → position    get::<T>(), contains::<T>()
//! ```

use std::{
    any::{TypeId, type_name},
    collections::HashMap
};

use tracing::{debug, warn};

use crate::{HubDocError, HubDocumentation, SignalRHub};

/// One registered hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubEntry {
    type_id:       TypeId,
    name:          String,
    description:   Option<String>,
    documentation: HubDocumentation
}

impl HubEntry {
    /// Type identity of the hub.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Hub name used for path resolution.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Summary from the hub's doc comments, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declared documentation settings.
    #[must_use]
    pub const fn documentation(&self) -> &HubDocumentation {
        &self.documentation
    }

    /// Path with the hub name placeholder resolved.
    #[must_use]
    pub fn path(&self) -> String {
        self.documentation.resolve_path(&self.name)
    }
}

/// Registry of hub documentation keyed by type identity.
///
/// # Example
///
/// ```rust
/// use hub_docs_core::{HubDocumentation, HubRegistry};
///
/// struct ChatHub;
///
/// let mut registry = HubRegistry::new();
/// registry
///     .register_with::<ChatHub>("ChatHub", HubDocumentation::default())
///     .unwrap();
///
/// let entry = registry.get::<ChatHub>().unwrap();
/// assert_eq!(entry.path(), "/ChatHub");
/// ```
#[derive(Debug, Default)]
pub struct HubRegistry {
    entries: Vec<HubEntry>,
    index:   HashMap<TypeId, usize>
}

impl HubRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hub that implements [`SignalRHub`].
    ///
    /// # Errors
    ///
    /// Returns [`HubDocError::DuplicateHub`] if `T` is already registered.
    pub fn register<T: SignalRHub + 'static>(&mut self) -> Result<&HubEntry, HubDocError> {
        self.insert(HubEntry {
            type_id:       TypeId::of::<T>(),
            name:          T::HUB_NAME.to_owned(),
            description:   T::DESCRIPTION.map(str::to_owned),
            documentation: T::hub_documentation()
        })
    }

    /// Register documentation for any type under an explicit name.
    ///
    /// # Errors
    ///
    /// Returns [`HubDocError::DuplicateHub`] if `T` is already registered.
    pub fn register_with<T: 'static>(
        &mut self,
        name: impl Into<String>,
        documentation: HubDocumentation
    ) -> Result<&HubEntry, HubDocError> {
        self.insert(HubEntry {
            type_id: TypeId::of::<T>(),
            name: name.into(),
            description: None,
            documentation
        })
    }

    /// Register documentation for `T` under its simple type name.
    ///
    /// # Errors
    ///
    /// Returns [`HubDocError::DuplicateHub`] if `T` is already registered.
    pub fn register_as_type<T: 'static>(
        &mut self,
        documentation: HubDocumentation
    ) -> Result<&HubEntry, HubDocError> {
        self.register_with::<T>(simple_type_name::<T>(), documentation)
    }

    fn insert(&mut self, entry: HubEntry) -> Result<&HubEntry, HubDocError> {
        if let Some(existing) = self.get_by_type_id(entry.type_id) {
            warn!(
                hub = %existing.name,
                rejected = %entry.name,
                "hub documentation already registered"
            );
            return Err(HubDocError::duplicate(existing.name.clone()));
        }

        debug!(
            hub = %entry.name,
            path = %entry.documentation.path(),
            auto_discover = %entry.documentation.auto_discover(),
            documents = entry.documentation.document_names().len(),
            "registered hub documentation"
        );

        let position = self.entries.len();
        self.index.insert(entry.type_id, position);
        self.entries.push(entry);
        Ok(&self.entries[position])
    }

    /// Look up the entry for `T`.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&HubEntry> {
        self.get_by_type_id(TypeId::of::<T>())
    }

    /// Look up an entry by type identity.
    #[must_use]
    pub fn get_by_type_id(&self, type_id: TypeId) -> Option<&HubEntry> {
        self.index
            .get(&type_id)
            .and_then(|position| self.entries.get(*position))
    }

    /// Look up the first entry registered under `name`.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&HubEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Check if `T` is registered.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.index.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered hubs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no hub is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &HubEntry> {
        self.entries.iter()
    }

    /// Entries shown in the document called `document_name`.
    pub fn in_document<'a>(
        &'a self,
        document_name: &'a str
    ) -> impl Iterator<Item = &'a HubEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.documentation.is_in_document(document_name))
    }
}

impl<'a> IntoIterator for &'a HubRegistry {
    type Item = &'a HubEntry;
    type IntoIter = std::slice::Iter<'a, HubEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Type name without module path or generic arguments.
fn simple_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
