//! Freeform text import: one contact per line.
//!
//! Each non-empty line is split on `|` when it contains one, otherwise on
//! `,`, and read positionally as `name, email, phone, city, country`.

use crate::format::ImportFormat;
use crate::record::ContactRecord;
use crate::report::ImportReport;

/// Parses freeform text into contacts.
#[must_use]
pub fn parse_text(text: &str) -> Vec<ContactRecord> {
    parse_text_with_report(text).into_contacts()
}

/// Parses freeform text, also counting lines that yielded nothing.
#[must_use]
pub fn parse_text_with_report(text: &str) -> ImportReport {
    let mut report = ImportReport::new(ImportFormat::Text);

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let separator = if line.contains('|') { '|' } else { ',' };
        let tokens: Vec<&str> = line.split(separator).collect();
        report.push(idx + 1, ContactRecord::from_positional(&tokens));
    }

    report
}
