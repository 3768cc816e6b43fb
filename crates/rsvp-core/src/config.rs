use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::types::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub locale: LocaleConfig,
    pub suggestions: SuggestionConfig,
    pub import: ImportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Language used when a caller does not ask for one.
    pub default_language: Language,
    /// Language catalog labels fall back to when the requested one is missing.
    pub fallback_language: Language,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SuggestionConfig {
    pub max_items: usize,
    pub max_icebreakers: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_items: 6,
            max_icebreakers: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub dedupe: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// ## Summary
    /// Same as [`Settings::load`] with an explicit file path.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: &str) -> Result<Self> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &str, environment: config::Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("locale.default_language", Language::Es.as_str())?
            .set_default("locale.fallback_language", Language::Es.as_str())?
            .set_default("suggestions.max_items", 6)?
            .set_default("suggestions.max_icebreakers", 8)?
            .set_default("import.dedupe", false)?
            .add_source(environment)
            // TOML file
            .add_source(config::File::with_name(path).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// `RSVP_`-prefixed variables, with `__` between nesting levels
/// (`RSVP_SUGGESTIONS__MAX_ITEMS`).
fn environment() -> config::Environment {
    config::Environment::with_prefix("RSVP")
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Same as [`load_config`] reading the TOML layer from `path`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config_from(path: &str) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_apply_without_sources() {
        let settings = Settings::load_from("does-not-exist.toml").unwrap();
        tracing::debug!(?settings, "Loaded default settings");

        assert_eq!(settings.locale.fallback_language, Language::Es);
        assert_eq!(settings.suggestions.max_items, 6);
        assert_eq!(settings.suggestions.max_icebreakers, 8);
        assert!(!settings.import.dedupe);
    }

    #[test]
    fn environment_overrides_defaults() {
        let vars: config::Map<String, String> = [
            ("RSVP_LOGGING__LEVEL", "warn"),
            ("RSVP_LOCALE__FALLBACK_LANGUAGE", "en"),
            ("RSVP_SUGGESTIONS__MAX_ITEMS", "2"),
            ("RSVP_IMPORT__DEDUPE", "true"),
            ("LOCALE_DEFAULT_LANGUAGE", "fr"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        let settings =
            Settings::load_with("does-not-exist.toml", environment().source(Some(vars))).unwrap();

        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.locale.fallback_language, Language::En);
        assert_eq!(settings.suggestions.max_items, 2);
        assert_eq!(settings.suggestions.max_icebreakers, 8);
        assert!(settings.import.dedupe);
        // Unprefixed variables are not read
        assert_eq!(settings.locale.default_language, Language::Es);
    }

    #[test]
    fn language_deserializes_lowercase() {
        let locale: LocaleConfig =
            serde_json::from_str(r#"{"default_language":"fr","fallback_language":"en"}"#)
                .unwrap();
        assert_eq!(locale.default_language, Language::Fr);
        assert_eq!(locale.fallback_language, Language::En);
    }
}
