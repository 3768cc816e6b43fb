use std::str::FromStr;

use rsvp_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::headers::header_field;
use crate::report::ImportReport;
use crate::split::{detect_delimiter, first_line, split_line};
use crate::{csv, text, vcard};

/// Import source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Csv,
    Text,
    VCard,
}

impl ImportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "text",
            Self::VCard => "vcard",
        }
    }
}

impl std::fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "text" | "txt" | "freeform" => Ok(Self::Text),
            "vcard" | "vcf" => Ok(Self::VCard),
            other => Err(CoreError::InvalidInput(format!("unknown import format: {other}"))),
        }
    }
}

/// ## Summary
/// Guesses the format of `text`.
///
/// A `BEGIN:VCARD` anywhere means vCard; a first line with at least one known
/// column name means CSV; anything else is freeform text.
#[must_use]
pub fn detect_format(text: &str) -> ImportFormat {
    if text.to_ascii_uppercase().contains("BEGIN:VCARD") {
        return ImportFormat::VCard;
    }

    let Some(first) = first_line(text) else {
        return ImportFormat::Text;
    };

    let delimiter = detect_delimiter(first);
    if split_line(first, delimiter)
        .iter()
        .any(|cell| header_field(cell).is_some())
    {
        ImportFormat::Csv
    } else {
        ImportFormat::Text
    }
}

/// Parses `text` as `format`.
#[must_use]
pub fn parse(text: &str, format: ImportFormat) -> ImportReport {
    let report = match format {
        ImportFormat::Csv => csv::parse_csv_with_report(text),
        ImportFormat::Text => text::parse_text_with_report(text),
        ImportFormat::VCard => vcard::parse_vcards_with_report(text),
    };

    tracing::info!(
        %format,
        imported = report.contacts.len(),
        skipped = report.skipped,
        "Contact import parsed"
    );

    report
}

/// Parses `text` in the format [`detect_format`] picks.
#[must_use]
pub fn parse_auto(text: &str) -> ImportReport {
    parse(text, detect_format(text))
}
