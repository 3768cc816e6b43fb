//! Catalog entries and the per-catalog lookup index.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use rsvp_core::normalize::normalize_key;
use rsvp_core::types::Language;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// The vocabularies guest preference fields draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogName {
    ExperienceType,
    Relationship,
    DietaryType,
    Allergy,
    Intolerance,
    PetAllergy,
    Drink,
    Color,
    MusicGenre,
    DayMoment,
    Punctuality,
    Topic,
}

impl CatalogName {
    pub const ALL: [Self; 12] = [
        Self::ExperienceType,
        Self::Relationship,
        Self::DietaryType,
        Self::Allergy,
        Self::Intolerance,
        Self::PetAllergy,
        Self::Drink,
        Self::Color,
        Self::MusicGenre,
        Self::DayMoment,
        Self::Punctuality,
        Self::Topic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExperienceType => "experience_type",
            Self::Relationship => "relationship",
            Self::DietaryType => "dietary_type",
            Self::Allergy => "allergy",
            Self::Intolerance => "intolerance",
            Self::PetAllergy => "pet_allergy",
            Self::Drink => "drink",
            Self::Color => "color",
            Self::MusicGenre => "music_genre",
            Self::DayMoment => "day_moment",
            Self::Punctuality => "punctuality",
            Self::Topic => "topic",
        }
    }
}

impl std::fmt::Display for CatalogName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogName {
    type Err = CatalogError;

    /// Accepts the snake_case name; `-` and spaces may stand in for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s).replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownCatalog(s.to_owned()))
    }
}

/// One canonical value of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Stable machine identifier, unique within its catalog.
    pub code: String,
    pub labels: BTreeMap<Language, String>,
    /// Extra spellings (legacy English terms, synonyms) that resolve here.
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            labels: BTreeMap::new(),
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, language: Language, label: impl Into<String>) -> Self {
        self.labels.insert(language, label.into());
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// ## Summary
    /// Returns the label to display in `language`.
    ///
    /// Tried in order: `language`, `fallback`, the first label present, the
    /// code itself.
    #[must_use]
    pub fn label(&self, language: Language, fallback: Language) -> &str {
        [language, fallback]
            .iter()
            .find_map(|lang| self.labels.get(lang))
            .or_else(|| self.labels.values().next())
            .map_or(self.code.as_str(), String::as_str)
    }

    /// Normalized keys this entry answers to (code, labels, aliases).
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.code)
            .chain(self.labels.values())
            .chain(self.aliases.iter())
            .map(|s| normalize_key(s))
            .filter(|key| !key.is_empty())
    }
}

/// A catalog's entries in editorial order plus its key index.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: CatalogName,
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// ## Summary
    /// Builds the catalog and its many-to-one key index.
    ///
    /// ## Errors
    /// Returns [`CatalogError::DuplicateKey`] when two different entries
    /// share a normalized code, label or alias.
    pub fn build(name: CatalogName, entries: Vec<CatalogEntry>) -> CatalogResult<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            for key in entry.keys() {
                match index.entry(key) {
                    Entry::Occupied(existing) if *existing.get() != position => {
                        return Err(CatalogError::DuplicateKey {
                            catalog: name,
                            second: entry.code.clone(),
                            first: entries[*existing.get()].code.clone(),
                            key: existing.key().clone(),
                        });
                    }
                    Entry::Occupied(_) => {}
                    Entry::Vacant(slot) => {
                        slot.insert(position);
                    }
                }
            }
        }

        tracing::trace!(catalog = %name, entries = entries.len(), keys = index.len(), "Catalog indexed");

        Ok(Self {
            name,
            entries,
            index,
        })
    }

    #[must_use]
    pub const fn name(&self) -> CatalogName {
        self.name
    }

    /// Entries in editorial order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Finds the entry `text` names, ignoring case, accents and spacing.
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&normalize_key(text))
            .and_then(|&position| self.entries.get(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, es: &str, en: &str) -> CatalogEntry {
        CatalogEntry::new(code)
            .with_label(Language::Es, es)
            .with_label(Language::En, en)
    }

    #[test]
    fn catalog_name_parsing() {
        assert_eq!("pet_allergy".parse::<CatalogName>().unwrap(), CatalogName::PetAllergy);
        assert_eq!("Music-Genre".parse::<CatalogName>().unwrap(), CatalogName::MusicGenre);
        assert_eq!("day moment".parse::<CatalogName>().unwrap(), CatalogName::DayMoment);
        assert!(matches!(
            "planets".parse::<CatalogName>(),
            Err(CatalogError::UnknownCatalog(_))
        ));
    }

    #[test]
    fn label_fallback_chain() {
        let entry = CatalogEntry::new("gold").with_label(Language::En, "Gold");
        assert_eq!(entry.label(Language::En, Language::Es), "Gold");
        assert_eq!(entry.label(Language::Fr, Language::En), "Gold");
        // Neither requested nor fallback present: first available label
        assert_eq!(entry.label(Language::Fr, Language::Es), "Gold");

        let bare = CatalogEntry::new("mystery");
        assert_eq!(bare.label(Language::Fr, Language::Es), "mystery");
    }

    #[test]
    fn label_prefers_fallback_over_first_available() {
        let entry = CatalogEntry::new("red")
            .with_label(Language::Es, "Rojo")
            .with_label(Language::En, "Red");
        assert_eq!(entry.label(Language::Fr, Language::En), "Red");
    }

    #[test]
    fn lookup_is_insensitive() {
        let catalog = Catalog::build(
            CatalogName::Drink,
            vec![entry("red_wine", "Vino tinto", "Red wine").with_alias("tinto")],
        )
        .unwrap();

        assert_eq!(catalog.lookup("  VINO   TINTO ").map(|e| e.code.as_str()), Some("red_wine"));
        assert_eq!(catalog.lookup("Tínto").map(|e| e.code.as_str()), Some("red_wine"));
        assert_eq!(catalog.lookup("RED_WINE").map(|e| e.code.as_str()), Some("red_wine"));
        assert!(catalog.lookup("beer").is_none());
    }

    #[test]
    fn colliding_keys_are_rejected() {
        let err = Catalog::build(
            CatalogName::Color,
            vec![
                entry("pink", "Rosa", "Pink"),
                entry("rose", "Rosé", "Rose").with_alias("rosa"),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::DuplicateKey {
                catalog: CatalogName::Color,
                key: "rosa".to_owned(),
                first: "pink".to_owned(),
                second: "rose".to_owned(),
            }
        );
    }

    #[test]
    fn entry_may_repeat_its_own_key() {
        let catalog = Catalog::build(
            CatalogName::Color,
            vec![CatalogEntry::new("pastel")
                .with_label(Language::Es, "Pastel")
                .with_label(Language::En, "Pastel")
                .with_alias("PASTEL")],
        );
        assert!(catalog.is_ok());
    }
}
