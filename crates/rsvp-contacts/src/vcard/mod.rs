//! vCard import (RFC 6350, with the looser vCard 2.1/3.0 exports phones produce).
//!
//! ## Overview
//!
//! Cards are located with a case-insensitive `BEGIN:VCARD … END:VCARD`
//! match. Each card is unfolded and read line by line; only the first
//! `FN`, `N`, `EMAIL`, `TEL`, `ORG` and `ADR` are used, and every card
//! yields at most one contact.
//!
//! ```rust
//! use rsvp_contacts::vcard::parse_vcards;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = parse_vcards(input);
//! assert_eq!(contacts[0].first_name, "John");
//! assert_eq!(contacts[0].last_name, "Doe");
//! ```
//!
//! ## Submodules
//!
//! - [`lexer`] - unfolding and content line parsing
//! - [`values`] - structured and escaped value handling
//! - [`parser`] - card extraction into contact records

mod error;
pub mod lexer;
pub mod parser;
pub mod values;

pub use error::{ParseError, ParseResult};
pub use lexer::{ContentLine, Parameter, parse_content_line, unfold};
pub use parser::{parse_vcards, parse_vcards_with_report};
