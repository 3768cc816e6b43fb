//! CSV import with header detection.
//!
//! The first line decides the mode. If any of its cells is a known column
//! name (see [`crate::headers`]) it is a header row and later rows are read
//! by column. Otherwise the whole input, first line included, is read as
//! positional `name, email, phone, city, country` rows.

use std::collections::HashMap;

use crate::format::ImportFormat;
use crate::headers::header_field;
use crate::record::{ContactField, ContactRecord};
use crate::report::ImportReport;
use crate::split::{detect_delimiter, first_line, read_rows};

/// Parses CSV text into contacts.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<ContactRecord> {
    parse_csv_with_report(text).into_contacts()
}

/// Parses CSV text, also reporting the delimiter, header detection and
/// skipped rows.
#[must_use]
pub fn parse_csv_with_report(text: &str) -> ImportReport {
    let mut report = ImportReport::new(ImportFormat::Csv);

    let Some(first) = first_line(text) else {
        return report;
    };

    let delimiter = detect_delimiter(first);
    let rows = read_rows(text, delimiter);
    let Some((header, body)) = rows.split_first() else {
        return report;
    };

    let columns: Vec<Option<ContactField>> =
        header.cells.iter().map(|cell| header_field(cell)).collect();

    report.delimiter = Some(delimiter);
    report.header_detected = columns.iter().any(Option::is_some);

    tracing::debug!(
        %delimiter,
        header_detected = report.header_detected,
        rows = rows.len(),
        "Parsing CSV input"
    );

    if report.header_detected {
        for row in body {
            report.push(row.line, ContactRecord::from_fields(&map_row(&columns, &row.cells)));
        }
    } else {
        for row in &rows {
            report.push(row.line, ContactRecord::from_positional(&row.cells));
        }
    }

    report
}

/// Maps row cells to fields by column; the first non-empty cell wins when
/// several columns share a field.
fn map_row(columns: &[Option<ContactField>], cells: &[String]) -> HashMap<ContactField, String> {
    let mut fields: HashMap<ContactField, String> = HashMap::new();

    for (column, cell) in columns.iter().zip(cells) {
        let Some(field) = column else {
            continue;
        };
        let slot = fields.entry(*field).or_default();
        if slot.trim().is_empty() {
            slot.clone_from(cell);
        }
    }

    fields
}
