//! The registry of all catalogs and its query operations.
//!
//! Queries never fail. A value no entry answers to is passed through trimmed,
//! so callers always have something to store or display.

use std::collections::HashMap;
use std::collections::HashSet;

use rsvp_core::normalize::{display_form, normalize_key};
use rsvp_core::types::Language;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry, CatalogName};
use crate::data;
use crate::error::{CatalogError, CatalogResult};

/// A choice for selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub code: String,
    pub label: String,
}

/// Immutable set of catalogs with a label fallback language.
#[derive(Debug, Clone)]
pub struct CatalogRegistry {
    catalogs: HashMap<CatalogName, Catalog>,
    fallback: Language,
}

impl CatalogRegistry {
    /// ## Summary
    /// Builds a registry from already-indexed catalogs.
    ///
    /// ## Errors
    /// Returns [`CatalogError::DuplicateCatalog`] if a catalog name repeats.
    pub fn from_catalogs(catalogs: impl IntoIterator<Item = Catalog>) -> CatalogResult<Self> {
        let mut by_name = HashMap::new();
        for catalog in catalogs {
            let name = catalog.name();
            if by_name.insert(name, catalog).is_some() {
                return Err(CatalogError::DuplicateCatalog(name));
            }
        }

        Ok(Self {
            catalogs: by_name,
            fallback: Language::default(),
        })
    }

    /// ## Summary
    /// Builds the registry from the built-in vocabularies.
    ///
    /// ## Errors
    /// Returns [`CatalogError::DuplicateKey`] if the built-in data breaks the
    /// one-key-one-entry rule.
    pub fn builtin() -> CatalogResult<Self> {
        let catalogs = data::definitions()
            .into_iter()
            .map(|(name, entries)| Catalog::build(name, entries))
            .collect::<CatalogResult<Vec<_>>>()?;

        let registry = Self::from_catalogs(catalogs)?;
        tracing::debug!(catalogs = registry.catalogs.len(), "Built-in catalogs loaded");
        Ok(registry)
    }

    /// Returns a copy that falls back to `language` for missing labels.
    #[must_use]
    pub fn with_fallback(mut self, language: Language) -> Self {
        self.fallback = language;
        self
    }

    #[must_use]
    pub const fn fallback_language(&self) -> Language {
        self.fallback
    }

    #[must_use]
    pub fn catalog(&self, name: CatalogName) -> Option<&Catalog> {
        self.catalogs.get(&name)
    }

    /// Entries of `name` in editorial order; empty if the catalog is absent.
    #[must_use]
    pub fn options(&self, name: CatalogName) -> &[CatalogEntry] {
        self.catalog(name).map_or(&[], Catalog::entries)
    }

    /// `(code, label)` pairs of `name` for a choice list in `language`.
    #[must_use]
    pub fn option_labels(&self, name: CatalogName, language: Language) -> Vec<CatalogOption> {
        self.options(name)
            .iter()
            .map(|entry| CatalogOption {
                code: entry.code.clone(),
                label: entry.label(language, self.fallback).to_owned(),
            })
            .collect()
    }

    #[must_use]
    pub fn lookup(&self, name: CatalogName, text: &str) -> Option<&CatalogEntry> {
        self.catalog(name).and_then(|catalog| catalog.lookup(text))
    }

    /// Canonical code for `value`, or `value` trimmed if nothing matches.
    #[must_use]
    pub fn resolve_code(&self, name: CatalogName, value: &str) -> String {
        self.lookup(name, value)
            .map_or_else(|| display_form(value), |entry| entry.code.clone())
    }

    /// Label of `value` in `language`, or `value` trimmed if nothing matches.
    #[must_use]
    pub fn resolve_label(&self, name: CatalogName, value: &str, language: Language) -> String {
        self.lookup(name, value).map_or_else(
            || display_form(value),
            |entry| entry.label(language, self.fallback).to_owned(),
        )
    }

    /// [`Self::resolve_code`] over a list, dropping blanks and repeats.
    #[must_use]
    pub fn resolve_codes<S: AsRef<str>>(&self, name: CatalogName, values: &[S]) -> Vec<String> {
        distinct_non_empty(values.iter().map(|v| self.resolve_code(name, v.as_ref())))
    }

    /// [`Self::resolve_label`] over a list, dropping blanks and repeats.
    #[must_use]
    pub fn resolve_labels<S: AsRef<str>>(
        &self,
        name: CatalogName,
        values: &[S],
        language: Language,
    ) -> Vec<String> {
        distinct_non_empty(
            values
                .iter()
                .map(|v| self.resolve_label(name, v.as_ref(), language)),
        )
    }
}

fn distinct_non_empty(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(normalize_key(v)))
        .collect()
}
