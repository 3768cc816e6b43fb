use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Display languages the catalogs carry labels for.
///
/// Variant order is the "first available" order used when neither the
/// requested nor the fallback language has a label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    Fr,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Es, Self::En, Self::Fr];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
            Self::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Accepts a bare language code or a locale tag such as `es-MX` / `fr_CA`.
    fn from_str(s: &str) -> CoreResult<Self> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            _ => Err(CoreError::UnsupportedLanguage(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_tags() {
        assert_eq!("es-MX".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" fr_CA ".parse::<Language>().unwrap(), Language::Fr);
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "de".parse::<Language>().unwrap_err();
        assert_eq!(err, CoreError::UnsupportedLanguage("de".to_owned()));
    }

    #[test]
    fn display_round_trips() {
        for lang in Language::ALL {
            assert_eq!(lang.to_string().parse::<Language>().unwrap(), lang);
        }
    }
}
