//! Contact import for guest lists.
//!
//! Turns pasted or uploaded text into [`ContactRecord`]s. Three sources are
//! understood:
//!
//! - CSV exports with a header row (any of the usual column names in
//!   Spanish, English or French), or headerless `name,email,phone` rows
//! - freeform lines, one contact per line, split on `|` or `,`
//! - vCard files (`BEGIN:VCARD` … `END:VCARD`)
//!
//! Extraction is best effort. Parsers never fail: rows that yield no name,
//! email or phone are dropped and only counted in the [`ImportReport`].
//!
//! ```rust
//! use rsvp_contacts::{ImportFormat, parse};
//!
//! let report = parse("Jane Doe|jane@example.com|600111222", ImportFormat::Text);
//! assert_eq!(report.contacts[0].first_name, "Jane");
//! assert_eq!(report.contacts[0].phone, "600111222");
//! ```

pub mod csv;
pub mod dedupe;
pub mod format;
pub mod headers;
pub mod record;
pub mod report;
pub mod split;
pub mod text;
pub mod vcard;

pub use dedupe::dedupe_contacts;
pub use format::{ImportFormat, detect_format, parse, parse_auto};
pub use record::{ContactField, ContactRecord};
pub use report::ImportReport;
