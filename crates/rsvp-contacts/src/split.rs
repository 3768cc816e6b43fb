//! Delimiter-aware splitting of delimited text.
//!
//! Records are read with the `csv` reader. A double quote opens a quoted
//! field only as the first character of a cell; anywhere else it is kept as
//! written. Cells are trimmed, so a quoted cell keeps its inner spacing but
//! not the padding at its edges.

use ::csv::{ReaderBuilder, Trim};

/// One record of delimited input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line the record starts on.
    pub line: usize,
    pub cells: Vec<String>,
}

/// First non-blank line of `text`, trimmed.
#[must_use]
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Picks the delimiter for a header line: `;` only when it strictly
/// outnumbers `,`.
#[must_use]
pub fn detect_delimiter(header: &str) -> char {
    let commas = header.matches(',').count();
    let semicolons = header.matches(';').count();
    if semicolons > commas { ';' } else { ',' }
}

/// ## Summary
/// Reads every record of `text` split on `delimiter`.
///
/// Rows may have any number of cells. Quoted cells may hold the delimiter
/// and line breaks, and `""` inside quotes is a literal quote. Blank lines
/// yield no row. A record that cannot be read is logged and dropped.
#[must_use]
pub fn read_rows(text: &str, delimiter: char) -> Vec<Row> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(u8::try_from(delimiter).unwrap_or(b','))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(error) => {
                tracing::debug!(%error, "Dropping unreadable CSV record");
                continue;
            }
        };

        // Whitespace-only line
        if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
            continue;
        }

        let line = record
            .position()
            .map_or(rows.len() + 1, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));
        rows.push(Row {
            line,
            cells: record.iter().map(str::to_owned).collect(),
        });
    }

    rows
}

/// Splits one line into cells. An empty line is a single empty cell.
#[must_use]
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    read_rows(line, delimiter)
        .into_iter()
        .next()
        .map_or_else(|| vec![String::new()], |row| row.cells)
}
