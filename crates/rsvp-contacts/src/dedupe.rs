//! De-duplication of imported contacts.
//!
//! Two records are the same person when they share a normalized email or the
//! same phone digits. Records with neither are matched on their normalized
//! full name. The first record wins; its empty fields are filled from later
//! duplicates.

use std::collections::HashMap;

use rsvp_core::normalize::normalize_key;

use crate::record::ContactRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum IdentityKey {
    Email(String),
    Phone(String),
    Name(String),
}

fn identity_keys(record: &ContactRecord) -> Vec<IdentityKey> {
    let mut keys = Vec::new();

    let email = normalize_key(&record.email);
    if !email.is_empty() {
        keys.push(IdentityKey::Email(email));
    }

    let digits: String = record.phone.chars().filter(char::is_ascii_digit).collect();
    if !digits.is_empty() {
        keys.push(IdentityKey::Phone(digits));
    }

    if keys.is_empty() {
        let name = normalize_key(&record.full_name());
        if !name.is_empty() {
            keys.push(IdentityKey::Name(name));
        }
    }

    keys
}

fn fill_missing(target: &mut String, source: &str) {
    if target.is_empty() && !source.is_empty() {
        source.clone_into(target);
    }
}

fn merge_into(kept: &mut ContactRecord, duplicate: &ContactRecord) {
    fill_missing(&mut kept.first_name, &duplicate.first_name);
    fill_missing(&mut kept.last_name, &duplicate.last_name);
    fill_missing(&mut kept.email, &duplicate.email);
    fill_missing(&mut kept.phone, &duplicate.phone);
    fill_missing(&mut kept.city, &duplicate.city);
    fill_missing(&mut kept.country, &duplicate.country);
    fill_missing(&mut kept.address, &duplicate.address);
    fill_missing(&mut kept.company, &duplicate.company);
    fill_missing(&mut kept.relationship, &duplicate.relationship);
}

/// Collapses duplicate contacts, keeping order of first appearance.
#[must_use]
pub fn dedupe_contacts(records: Vec<ContactRecord>) -> Vec<ContactRecord> {
    let mut kept: Vec<ContactRecord> = Vec::with_capacity(records.len());
    let mut index: HashMap<IdentityKey, usize> = HashMap::new();
    let total = records.len();

    for record in records {
        let keys = identity_keys(&record);
        let existing = keys.iter().find_map(|key| index.get(key).copied());

        let position = match existing {
            Some(position) => {
                merge_into(&mut kept[position], &record);
                position
            }
            None => {
                kept.push(record);
                kept.len() - 1
            }
        };

        // Keys learned from a merge point at the kept record too
        for key in identity_keys(&kept[position]) {
            index.entry(key).or_insert(position);
        }
    }

    tracing::debug!(before = total, after = kept.len(), "De-duplicated contacts");

    kept
}
