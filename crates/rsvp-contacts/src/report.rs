use serde::Serialize;

use crate::format::ImportFormat;
use crate::record::ContactRecord;

/// Outcome of one import parse.
///
/// `contacts` only holds identifiable records; every line or card that
/// produced nothing usable is counted in `skipped` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub format: ImportFormat,
    pub contacts: Vec<ContactRecord>,
    pub skipped: usize,
    /// Delimiter used for CSV input.
    pub delimiter: Option<char>,
    /// Whether a CSV header row was recognized.
    pub header_detected: bool,
}

impl ImportReport {
    #[must_use]
    pub const fn new(format: ImportFormat) -> Self {
        Self {
            format,
            contacts: Vec::new(),
            skipped: 0,
            delimiter: None,
            header_detected: false,
        }
    }

    /// Keeps the record if it is identifiable, otherwise counts it as skipped.
    pub fn push(&mut self, line: usize, record: ContactRecord) {
        if record.is_identifiable() {
            tracing::trace!(line, name = %record.full_name(), "Contact extracted");
            self.contacts.push(record);
        } else {
            tracing::debug!(line, format = %self.format, "Skipping entry without name, email or phone");
            self.skipped += 1;
        }
    }

    #[must_use]
    pub fn into_contacts(self) -> Vec<ContactRecord> {
        self.contacts
    }
}
