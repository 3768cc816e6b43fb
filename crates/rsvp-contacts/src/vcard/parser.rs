//! Card extraction into contact records.

use std::sync::LazyLock;

use regex::Regex;

use super::lexer::{ContentLine, parse_content_line, unfold};
use super::values::{
    decode_quoted_printable, parse_address, parse_organization, parse_structured_name,
    unescape_text,
};
use crate::format::ImportFormat;
use crate::record::{ContactRecord, accept_email, accept_phone, split_name};
use crate::report::ImportReport;

#[expect(clippy::expect_used, reason = "The pattern is a literal")]
static CARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)BEGIN:VCARD(.*?)END:VCARD").expect("vCard block pattern compiles")
});

/// Parses every card in `text` into contacts.
#[must_use]
pub fn parse_vcards(text: &str) -> Vec<ContactRecord> {
    parse_vcards_with_report(text).into_contacts()
}

/// Parses every card in `text`, also counting cards that yielded nothing.
#[must_use]
pub fn parse_vcards_with_report(text: &str) -> ImportReport {
    let mut report = ImportReport::new(ImportFormat::VCard);

    for (idx, card) in CARD_PATTERN.captures_iter(text).enumerate() {
        let body = card.get(1).map_or("", |m| m.as_str());
        report.push(idx + 1, card_to_contact(body));
    }

    tracing::debug!(
        cards = report.contacts.len() + report.skipped,
        skipped = report.skipped,
        "Parsed vCard input"
    );

    report
}

/// The first occurrence of each property a contact is built from.
#[derive(Debug, Default)]
struct CardProperties {
    formatted_name: Option<String>,
    name: Option<String>,
    email: Option<String>,
    tel: Option<String>,
    org: Option<String>,
    adr: Option<String>,
}

impl CardProperties {
    fn collect(body: &str) -> Self {
        let mut props = Self::default();

        for (idx, line) in logical_lines(&unfold(body)).iter().enumerate() {
            let content = match parse_content_line(line, idx + 1) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed vCard line");
                    continue;
                }
            };

            let slot = match content.name.as_str() {
                "FN" => &mut props.formatted_name,
                "N" => &mut props.name,
                "EMAIL" => &mut props.email,
                "TEL" => &mut props.tel,
                "ORG" => &mut props.org,
                "ADR" => &mut props.adr,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(raw_value(&content));
            }
        }

        props
    }
}

/// Splits an unfolded card into lines, joining quoted-printable soft breaks.
fn logical_lines(unfolded: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut continuing = false;

    for line in unfolded.lines() {
        let line = line.trim_end_matches('\r');

        if continuing {
            if let Some(prev) = lines.last_mut() {
                prev.pop(); // soft break '='
                prev.push_str(line);
            }
        } else if !line.trim().is_empty() {
            lines.push(line.to_owned());
        }

        continuing = lines
            .last()
            .is_some_and(|l| l.ends_with('=') && declares_quoted_printable(l));
    }

    lines
}

fn declares_quoted_printable(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(head, _)| head.to_ascii_uppercase().contains("QUOTED-PRINTABLE"))
}

/// Returns the value with transfer encoding removed.
fn raw_value(content: &ContentLine) -> String {
    if content.is_quoted_printable() {
        decode_quoted_printable(&content.value)
    } else {
        content.value.clone()
    }
}

/// Strips a `tel:` URI scheme (vCard 4.0 `VALUE=uri`).
fn strip_tel_scheme(value: &str) -> &str {
    let value = value.trim();
    match value.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => &value[4..],
        _ => value,
    }
}

fn card_to_contact(body: &str) -> ContactRecord {
    let props = CardProperties::collect(body);
    let mut record = ContactRecord::default();

    if let Some(formatted) = &props.formatted_name {
        let (first, last) = split_name(&unescape_text(formatted));
        record.first_name = first;
        record.last_name = last;
    }

    if let Some(name) = &props.name {
        let name = parse_structured_name(name);
        if record.first_name.is_empty() {
            record.first_name = name.given;
        }
        if record.last_name.is_empty() {
            record.last_name = name.family;
        }
    }

    if let Some(email) = &props.email {
        record.email = accept_email(&unescape_text(email));
    }
    if let Some(tel) = &props.tel {
        record.phone = accept_phone(strip_tel_scheme(&unescape_text(tel)));
    }
    if let Some(org) = &props.org {
        record.company = parse_organization(org);
    }
    if let Some(adr) = &props.adr {
        let address = parse_address(adr);
        record.address = address.street;
        record.city = address.locality;
        record.country = address.country;
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_name_email_and_tel() {
        let input = "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:John Smith\r\nEMAIL:john@x.com\r\nTEL:+1 555 0100\r\nEND:VCARD\r\n";
        let contacts = parse_vcards(input);

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name, "John");
        assert_eq!(contacts[0].last_name, "Smith");
        assert_eq!(contacts[0].email, "john@x.com");
        assert_eq!(contacts[0].phone, "+1 555 0100");
    }

    #[test]
    fn structured_name_without_fn() {
        let contacts = parse_vcards("BEGIN:VCARD\nN:Smith;John\nEND:VCARD");
        assert_eq!(contacts[0].first_name, "John");
        assert_eq!(contacts[0].last_name, "Smith");
    }

    #[test]
    fn structured_name_only_fills_gaps() {
        let contacts = parse_vcards("BEGIN:VCARD\nN:Ciccone;Madonna Louise\nFN:Madonna\nEND:VCARD");
        assert_eq!(contacts[0].first_name, "Madonna");
        assert_eq!(contacts[0].last_name, "Ciccone");
    }

    #[test]
    fn first_occurrence_wins() {
        let input = "begin:vcard\nFN:Ana Ruiz\nEMAIL;TYPE=work:ana@work.com\nEMAIL;TYPE=home:ana@home.com\nitem1.TEL;TYPE=cell:600111222\nTEL:699999999\nend:vcard";
        let contacts = parse_vcards(input);
        assert_eq!(contacts[0].email, "ana@work.com");
        assert_eq!(contacts[0].phone, "600111222");
    }

    #[test]
    fn address_and_org() {
        let input = "BEGIN:VCARD\nFN:Ana Ruiz\nORG:Acme;Sales\nADR;TYPE=home:;;Calle Mayor 1;Madrid;;28013;España\nEND:VCARD";
        let contacts = parse_vcards(input);
        assert_eq!(contacts[0].company, "Acme");
        assert_eq!(contacts[0].address, "Calle Mayor 1");
        assert_eq!(contacts[0].city, "Madrid");
        assert_eq!(contacts[0].country, "España");
    }

    #[test]
    fn folded_lines_are_joined() {
        let input = "BEGIN:VCARD\r\nFN:Jean-Pierre\r\n  Dupont\r\nEND:VCARD";
        let contacts = parse_vcards(input);
        assert_eq!(contacts[0].first_name, "Jean-Pierre");
        assert_eq!(contacts[0].last_name, "Dupont");
    }

    #[test]
    fn quoted_printable_name() {
        let input = "BEGIN:VCARD\nVERSION:2.1\nFN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Jos=C3=A9 P=C3=\n=A9rez\nTEL;CELL:600111222\nEND:VCARD";
        let contacts = parse_vcards(input);
        assert_eq!(contacts[0].first_name, "José");
        assert_eq!(contacts[0].last_name, "Pérez");
        assert_eq!(contacts[0].phone, "600111222");
    }

    #[test]
    fn tel_uri_scheme_is_stripped() {
        let contacts = parse_vcards("BEGIN:VCARD\nFN:A B\nTEL;VALUE=uri:tel:+34-600-111-222\nEND:VCARD");
        assert_eq!(contacts[0].phone, "+34-600-111-222");
    }

    #[test_log::test]
    fn empty_and_malformed_cards_are_skipped() {
        let input = "BEGIN:VCARD\nVERSION:4.0\nNOTE:nothing useful\nEND:VCARD\n\
                     BEGIN:VCARD\ngarbage line\nFN:Luis\nEND:VCARD\n\
                     BEGIN:VCARD\nFN:never closed\n";
        let report = parse_vcards_with_report(input);
        assert_eq!(report.contacts.len(), 1);
        assert_eq!(report.contacts[0].first_name, "Luis");
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn no_cards_yields_nothing() {
        assert!(parse_vcards("FN:John Smith").is_empty());
    }
}
