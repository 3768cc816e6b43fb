//! Unfolding and content line splitting.
//!
//! A folded line continues on the next physical line when that line starts
//! with a space or tab. Exports from phones mix CRLF and bare LF, so both
//! are accepted.

use super::error::{ParseError, ParseResult};

/// Joins folded lines and normalizes line endings to `\n`.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut unfolded = String::with_capacity(input.len());

    for (idx, physical) in input.split('\n').enumerate() {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);

        match physical.strip_prefix([' ', '\t']) {
            Some(continuation) if idx > 0 => unfolded.push_str(continuation),
            _ => {
                if idx > 0 {
                    unfolded.push('\n');
                }
                unfolded.push_str(physical);
            }
        }
    }

    unfolded
}

/// A property parameter such as `TYPE=cell,voice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Uppercased name.
    pub name: String,
    pub values: Vec<String>,
}

impl Parameter {
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

/// One unfolded `[group.]NAME[;params]:value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Apple-style grouping prefix (`item1` in `item1.EMAIL`).
    pub group: Option<String>,
    /// Uppercased property name.
    pub name: String,
    pub params: Vec<Parameter>,
    /// Value as written, still escaped and possibly encoded.
    pub value: String,
}

impl ContentLine {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// vCard 2.1 marks quoted-printable either as `ENCODING=` or as a bare
    /// parameter.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.params
            .iter()
            .filter(|p| p.name == "ENCODING" || p.name == "TYPE")
            .any(|p| p.has_value("QUOTED-PRINTABLE"))
    }
}

/// ## Summary
/// Splits one unfolded line into group, name, parameters and value.
///
/// Bare vCard 2.1 parameters (`TEL;CELL:...`) are read as `TYPE` values.
///
/// ## Errors
/// [`ParseError::MissingSeparator`] when no unquoted `:` is present and
/// [`ParseError::InvalidPropertyName`] when the name is not a token.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon = value_colon(line).ok_or(ParseError::MissingSeparator { line: line_num })?;
    let (head, value) = (&line[..colon], &line[colon + 1..]);

    let (group, head) = split_group(head);
    let mut parts = split_unquoted(head, ';').into_iter();
    let name = parts.next().unwrap_or_default().trim();

    if !is_token(name) {
        return Err(ParseError::InvalidPropertyName {
            line: line_num,
            name: name.to_owned(),
        });
    }

    Ok(ContentLine {
        group: group.map(str::to_owned),
        name: name.to_ascii_uppercase(),
        params: parts
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_parameter)
            .collect(),
        value: value.to_owned(),
    })
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Position of the first `:` outside a quoted parameter value.
fn value_colon(line: &str) -> Option<usize> {
    let mut quoted = false;
    line.char_indices().find_map(|(i, c)| {
        if c == '"' {
            quoted = !quoted;
        }
        (c == ':' && !quoted).then_some(i)
    })
}

fn split_group(head: &str) -> (Option<&str>, &str) {
    match head.split_once('.') {
        Some((group, rest)) if is_token(group) => (Some(group), rest),
        _ => (None, head),
    }
}

fn parse_parameter(raw: &str) -> Parameter {
    match raw.split_once('=') {
        Some((name, values)) => Parameter {
            name: name.trim().to_ascii_uppercase(),
            values: split_unquoted(values, ',')
                .into_iter()
                .map(|v| decode_param_value(v.trim()))
                .collect(),
        },
        None => Parameter {
            name: "TYPE".to_owned(),
            values: vec![raw.trim().to_owned()],
        },
    }
}

/// Splits on `sep` outside double quotes.
fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quoted = false;

    for (i, c) in s.char_indices() {
        if c == '"' {
            quoted = !quoted;
        } else if c == sep && !quoted {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Strips surrounding quotes and applies RFC 6868 caret decoding.
fn decode_param_value(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut value = String::with_capacity(unquoted.len());
    let mut chars = unquoted.chars().peekable();

    while let Some(c) = chars.next() {
        let decoded = match (c, chars.peek()) {
            ('^', Some('n')) => '\n',
            ('^', Some('\'')) => '"',
            ('^', Some('^')) => '^',
            _ => {
                value.push(c);
                continue;
            }
        };
        chars.next();
        value.push(decoded);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_lines_rejoin() {
        assert_eq!(unfold("NOTE:Trae\r\n  postre\r\nFN:Ana"), "NOTE:Trae postre\nFN:Ana");
        assert_eq!(unfold("FN:Ana\n\tGarcía"), "FN:AnaGarcía");
        assert_eq!(unfold("FN:Ana\r\nTEL:600\r\n"), "FN:Ana\nTEL:600\n");
    }

    #[test]
    fn leading_space_on_first_line_is_kept() {
        assert_eq!(unfold(" FN:Ana"), " FN:Ana");
    }

    #[test]
    fn plain_line() {
        let line = parse_content_line("fn:Ana García", 1).unwrap();
        assert_eq!(line.group, None);
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "Ana García");
    }

    #[test]
    fn grouped_line_with_parameters() {
        let line = parse_content_line("item2.EMAIL;type=INTERNET,pref:ana@example.com", 4).unwrap();
        assert_eq!(line.group.as_deref(), Some("item2"));
        assert_eq!(line.name, "EMAIL");
        assert_eq!(line.params[0].values, vec!["INTERNET", "pref"]);
        assert!(line.param("TYPE").is_some_and(|p| p.has_value("PREF")));
    }

    #[test]
    fn bare_parameters_become_types() {
        let line = parse_content_line("TEL;CELL;QUOTED-PRINTABLE:600", 1).unwrap();
        assert_eq!(line.params.len(), 2);
        assert!(line.param("type").is_some_and(|p| p.has_value("cell")));
        assert!(line.is_quoted_printable());
    }

    #[test]
    fn quoted_parameter_may_hold_colons_and_carets() {
        let line = parse_content_line(r#"ADR;LABEL="Calle Mayor 1: 2ºB^nMadrid":;;Calle Mayor 1"#, 1).unwrap();
        assert_eq!(
            line.param("LABEL").and_then(Parameter::value),
            Some("Calle Mayor 1: 2ºB\nMadrid")
        );
        assert_eq!(line.value, ";;Calle Mayor 1");
    }

    #[test]
    fn value_keeps_later_colons() {
        let line = parse_content_line("TEL;VALUE=uri:tel:+34-600-111-222", 1).unwrap();
        assert_eq!(line.value, "tel:+34-600-111-222");
    }

    #[test]
    fn malformed_lines_report_their_position() {
        assert_eq!(
            parse_content_line("Ana García", 3),
            Err(ParseError::MissingSeparator { line: 3 })
        );

        let err = parse_content_line("E MAIL:x", 5).unwrap_err();
        assert_eq!(err.line(), 5);
        assert!(matches!(err, ParseError::InvalidPropertyName { .. }));
    }
}
