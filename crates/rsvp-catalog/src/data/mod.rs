//! Built-in vocabularies.
//!
//! Labels are listed Spanish, English, French. An empty label means the
//! entry has none in that language.

mod people;
mod restrictions;
mod taste;

use rsvp_core::types::Language;

use crate::catalog::{CatalogEntry, CatalogName};

pub(crate) struct EntryDef {
    code: &'static str,
    labels: [&'static str; 3],
    aliases: &'static [&'static str],
}

pub(crate) const fn def(
    code: &'static str,
    labels: [&'static str; 3],
    aliases: &'static [&'static str],
) -> EntryDef {
    EntryDef {
        code,
        labels,
        aliases,
    }
}

impl EntryDef {
    fn to_entry(&self) -> CatalogEntry {
        let languages = [Language::Es, Language::En, Language::Fr];
        let entry = languages
            .into_iter()
            .zip(self.labels)
            .filter(|(_, label)| !label.is_empty())
            .fold(CatalogEntry::new(self.code), |entry, (language, label)| {
                entry.with_label(language, label)
            });

        self.aliases
            .iter()
            .fold(entry, |entry, alias| entry.with_alias(*alias))
    }
}

fn table(defs: &[EntryDef]) -> Vec<CatalogEntry> {
    defs.iter().map(EntryDef::to_entry).collect()
}

/// Every built-in catalog with its entries in editorial order.
pub(crate) fn definitions() -> Vec<(CatalogName, Vec<CatalogEntry>)> {
    vec![
        (CatalogName::ExperienceType, table(people::EXPERIENCE_TYPE)),
        (CatalogName::Relationship, table(people::RELATIONSHIP)),
        (CatalogName::Punctuality, table(people::PUNCTUALITY)),
        (CatalogName::Topic, table(people::TOPIC)),
        (CatalogName::DietaryType, table(restrictions::DIETARY_TYPE)),
        (CatalogName::Allergy, table(restrictions::ALLERGY)),
        (CatalogName::Intolerance, table(restrictions::INTOLERANCE)),
        (CatalogName::PetAllergy, table(restrictions::PET_ALLERGY)),
        (CatalogName::Drink, table(taste::DRINK)),
        (CatalogName::Color, table(taste::COLOR)),
        (CatalogName::MusicGenre, table(taste::MUSIC_GENRE)),
        (CatalogName::DayMoment, table(taste::DAY_MOMENT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_has_data() {
        let defs = definitions();
        for name in CatalogName::ALL {
            let entries = defs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, entries)| entries);
            assert!(entries.is_some_and(|e| !e.is_empty()), "{name} has no entries");
        }
    }

    #[test]
    fn every_entry_is_labelled_in_every_language() {
        for (name, entries) in definitions() {
            for entry in entries {
                assert_eq!(entry.labels.len(), 3, "{name}/{} is missing a label", entry.code);
            }
        }
    }

    #[test]
    fn empty_label_is_skipped() {
        let entry = def("x", ["Equis", "", ""], &["ex"]).to_entry();
        assert_eq!(entry.labels.len(), 1);
        assert_eq!(entry.aliases, vec!["ex"]);
    }
}
