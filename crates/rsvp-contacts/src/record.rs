//! Contact records and the rules that assemble them from raw tokens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A contact extracted from an import source.
///
/// Empty strings mean "absent". `relationship` is never filled by the
/// parsers; the caller sets it during review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub company: String,
    pub relationship: String,
}

/// Canonical fields an import column or vCard property can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    /// Only used to fill `first_name`/`last_name` when those are empty.
    FullName,
    Email,
    Phone,
    City,
    Country,
    Address,
    Company,
}

impl ContactField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Country => "country",
            Self::Address => "address",
            Self::Company => "company",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a full name into `(first, last)`.
///
/// The first whitespace-delimited token is the first name; the rest, joined
/// by single spaces, is the last name.
#[must_use]
pub fn split_name(full: &str) -> (String, String) {
    let mut tokens = full.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_owned();
    let last = tokens.collect::<Vec<_>>().join(" ");
    (first, last)
}

/// Returns the trimmed token if it looks like an email (contains `@`).
#[must_use]
pub fn accept_email(token: &str) -> String {
    let token = token.trim();
    if token.contains('@') {
        token.to_owned()
    } else {
        String::new()
    }
}

/// Returns the trimmed token if it looks like a phone number: at least one
/// digit and no `@`.
#[must_use]
pub fn accept_phone(token: &str) -> String {
    let token = token.trim();
    if token.chars().any(|c| c.is_ascii_digit()) && !token.contains('@') {
        token.to_owned()
    } else {
        String::new()
    }
}

fn first_non_empty(candidates: [String; 2]) -> String {
    candidates
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or_default()
}

impl ContactRecord {
    /// ## Summary
    /// Builds a record from positional tokens `(name, email, phone, city, country)`.
    ///
    /// Missing trailing positions are empty. When the email and phone slots
    /// are swapped, or a two-column `name,phone` row is given, each value
    /// still lands in the field its shape matches.
    #[must_use]
    pub fn from_positional<S: AsRef<str>>(tokens: &[S]) -> Self {
        let token = |idx: usize| tokens.get(idx).map_or("", |t| t.as_ref().trim());

        let (first_name, last_name) = split_name(token(0));
        let email = first_non_empty([accept_email(token(1)), accept_email(token(2))]);
        let phone = first_non_empty([accept_phone(token(2)), accept_phone(token(1))]);

        Self {
            first_name,
            last_name,
            email,
            phone,
            city: token(3).to_owned(),
            country: token(4).to_owned(),
            ..Self::default()
        }
    }

    /// ## Summary
    /// Builds a record from header-mapped values.
    ///
    /// Recognized fields are copied (email and phone through the same shape
    /// checks as the positional path). `FullName` fills `first_name` and
    /// `last_name` only where those are still empty.
    #[must_use]
    pub fn from_fields(fields: &HashMap<ContactField, String>) -> Self {
        let get = |field: ContactField| fields.get(&field).map_or("", |v| v.trim());

        let mut record = Self {
            first_name: get(ContactField::FirstName).to_owned(),
            last_name: get(ContactField::LastName).to_owned(),
            email: accept_email(get(ContactField::Email)),
            phone: accept_phone(get(ContactField::Phone)),
            city: get(ContactField::City).to_owned(),
            country: get(ContactField::Country).to_owned(),
            address: get(ContactField::Address).to_owned(),
            company: get(ContactField::Company).to_owned(),
            relationship: String::new(),
        };

        record.fill_name(get(ContactField::FullName));
        record
    }

    /// Fills empty name parts from a full name.
    pub fn fill_name(&mut self, full: &str) {
        if !self.first_name.is_empty() && !self.last_name.is_empty() {
            return;
        }

        let (first, last) = split_name(full);
        if self.first_name.is_empty() {
            self.first_name = first;
        }
        if self.last_name.is_empty() {
            self.last_name = last;
        }
    }

    /// Returns whether the record carries a name, an email or a phone.
    #[must_use]
    pub fn is_identifiable(&self) -> bool {
        !(self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty())
    }

    /// Formats as a display name (first + last).
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
