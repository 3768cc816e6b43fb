//! Frequency counting and the avoid list.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use rsvp_core::normalize::{display_form, normalize_key};

use super::RankedItem;

/// Mentions per normalized label. The first spelling seen is displayed.
#[derive(Debug, Default)]
pub(super) struct Tally {
    counts: HashMap<String, (String, usize)>,
}

impl Tally {
    pub(super) fn add(&mut self, label: &str) {
        let label = display_form(label);
        if label.is_empty() {
            return;
        }

        let (_, count) = self
            .counts
            .entry(normalize_key(&label))
            .or_insert_with(|| (label, 0));
        *count += 1;
    }

    pub(super) fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.add(label.as_ref());
        }
    }

    /// Most frequent first, ties in case-folded alphabetical order, at most
    /// `cap` items.
    pub(super) fn ranked(self, cap: usize) -> Vec<RankedItem> {
        let mut items: Vec<(String, String, usize)> = self
            .counts
            .into_iter()
            .map(|(key, (label, count))| (key, label, count))
            .collect();

        items.sort_by(|a, b| {
            (Reverse(a.2), &a.0, &a.1).cmp(&(Reverse(b.2), &b.0, &b.1))
        });
        items.truncate(cap);

        items
            .into_iter()
            .map(|(_, label, count)| RankedItem { label, count })
            .collect()
    }
}

/// Things not to serve, deduplicated on the normalized key.
#[derive(Debug, Default)]
pub(super) struct AvoidList {
    items: Vec<String>,
    keys: HashSet<String>,
}

impl AvoidList {
    pub(super) fn push(&mut self, item: &str) {
        let item = display_form(item);
        if item.is_empty() {
            return;
        }

        if self.keys.insert(normalize_key(&item)) {
            self.items.push(item);
        }
    }

    pub(super) fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.push(item.as_ref());
        }
    }

    /// Whether `text` mentions any avoided item.
    pub(super) fn blocks(&self, text: &str) -> bool {
        let text = normalize_key(text);
        self.keys.iter().any(|key| text.contains(key.as_str()))
    }

    pub(super) fn into_items(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_merge_spellings() {
        let mut tally = Tally::default();
        tally.extend(["Paella", "paella ", "PAELLA", "Tortilla", " "]);

        let ranked = tally.ranked(6);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], RankedItem { label: "Paella".to_owned(), count: 3 });
        assert_eq!(ranked[1].label, "Tortilla");
    }

    #[test]
    fn ties_break_alphabetically_ignoring_case() {
        let mut tally = Tally::default();
        tally.extend(["pizza", "Arroz", "ñoquis", "Bacalao"]);

        let labels: Vec<String> = tally.ranked(3).into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Arroz", "Bacalao", "ñoquis"]);
    }

    #[test]
    fn avoid_list_matches_substrings() {
        let mut avoid = AvoidList::default();
        avoid.extend(["queso", "Queso", "", "Nueces"]);

        assert_eq!(avoid.into_items(), vec!["queso", "Nueces"]);

        let mut avoid = AvoidList::default();
        avoid.push("queso");
        assert!(avoid.blocks("Tabla de QUESOS"));
        assert!(!avoid.blocks("Jamón"));
    }
}
