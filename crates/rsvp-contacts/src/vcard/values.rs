//! Escaped and structured property values.

/// Resolves backslash escapes (`\n`, `\,`, `\;`, `\\`) in a text value.
///
/// Unknown escapes are kept as written.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut text = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        let unescaped = match (c, chars.peek()) {
            ('\\', Some('n' | 'N')) => '\n',
            ('\\', Some(&next @ (',' | ';' | '\\'))) => next,
            _ => {
                text.push(c);
                continue;
            }
        };
        chars.next();
        text.push(unescaped);
    }

    text
}

/// Splits on `sep` where it is not preceded by a backslash escape.
fn split_escaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + sep.len_utf8();
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a structured value (`N`, `ADR`, `ORG`) into its raw components.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    split_escaped(s, ';')
}

/// Splits a component into its comma-separated values, unescaped.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    split_escaped(s, ',').into_iter().map(unescape_text).collect()
}

/// Returns component `idx` of a structured value, unescaped and trimmed.
///
/// Multi-valued components (`a,b`) are joined with a space.
fn component(parts: &[&str], idx: usize) -> String {
    parts
        .get(idx)
        .map(|raw| {
            split_component(raw)
                .iter()
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Family and given names from an N property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    pub family: String,
    pub given: String,
}

/// Parses a structured name (N property).
///
/// N has 5 components: family;given;additional;prefixes;suffixes. Only the
/// first two are kept.
#[must_use]
pub fn parse_structured_name(value: &str) -> StructuredName {
    let parts = split_structured(value);
    StructuredName {
        family: component(&parts, 0),
        given: component(&parts, 1),
    }
}

/// The address components kept from an ADR property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub locality: String,
    pub country: String,
}

/// Parses an address (ADR property).
///
/// ADR has 7 components: PO Box;Extended;Street;Locality;Region;PostalCode;Country
#[must_use]
pub fn parse_address(value: &str) -> Address {
    let parts = split_structured(value);
    Address {
        street: component(&parts, 2),
        locality: component(&parts, 3),
        country: component(&parts, 6),
    }
}

/// Parses the organization name (first component of ORG).
#[must_use]
pub fn parse_organization(value: &str) -> String {
    let parts = split_structured(value);
    parts
        .first()
        .map(|name| unescape_text(name).trim().to_owned())
        .unwrap_or_default()
}

/// Decodes a quoted-printable value (vCard 2.1) as UTF-8.
///
/// Soft line breaks (`=` at end of line) are removed; malformed escapes are
/// kept literally.
#[must_use]
pub fn decode_quoted_printable(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'=' {
            decoded.push(bytes[i]);
            i += 1;
            continue;
        }

        let rest = &bytes[i + 1..];
        if rest.starts_with(b"\r\n") {
            i += 3;
        } else if rest.starts_with(b"\n") {
            i += 2;
        } else if let Some(byte) = rest
            .get(..2)
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
        {
            decoded.push(byte);
            i += 3;
        } else {
            decoded.push(b'=');
            i += 1;
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescapes_text() {
        assert_eq!(unescape_text(r"Smith\, Jr\;\nx\\y"), "Smith, Jr;\nx\\y");
    }

    #[test]
    fn split_structured_respects_escapes() {
        assert_eq!(split_structured(r"a\;b;c\\;d"), vec![r"a\;b", r"c\\", "d"]);
    }

    #[test]
    fn component_values_split_on_unescaped_commas() {
        assert_eq!(split_component(r"Ana,Luis\, Jr,"), vec!["Ana", "Luis, Jr", ""]);
        assert_eq!(split_component(""), vec![""]);
    }

    #[test]
    fn structured_name_family_given() {
        let name = parse_structured_name("Smith;John;Q.;Dr.;Jr.");
        assert_eq!(name.family, "Smith");
        assert_eq!(name.given, "John");
    }

    #[test]
    fn structured_name_multi_valued() {
        let name = parse_structured_name("García,López;Ana");
        assert_eq!(name.family, "García López");
    }

    #[test]
    fn address_positions() {
        let adr = parse_address(";;Calle Mayor 1\\, 2º;Madrid;Madrid;28013;España");
        assert_eq!(adr.street, "Calle Mayor 1, 2º");
        assert_eq!(adr.locality, "Madrid");
        assert_eq!(adr.country, "España");
    }

    #[test]
    fn short_address_is_empty_past_end() {
        let adr = parse_address(";;Main St");
        assert_eq!(adr.street, "Main St");
        assert_eq!(adr.locality, "");
        assert_eq!(adr.country, "");
    }

    #[test]
    fn organization_first_component() {
        assert_eq!(parse_organization("Acme\\, Inc.;Sales;EMEA"), "Acme, Inc.");
    }

    #[test]
    fn quoted_printable_utf8() {
        assert_eq!(decode_quoted_printable("Jos=C3=A9 P=C3=A9rez"), "José Pérez");
        assert_eq!(decode_quoted_printable("a=\r\nb"), "ab");
        assert_eq!(decode_quoted_printable("50=25 =ZZ"), "50% =ZZ");
    }
}
