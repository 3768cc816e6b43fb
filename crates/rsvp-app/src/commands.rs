//! Command handlers. Each returns the JSON value `main` prints.

use std::io::Read;
use std::path::Path;

use rsvp_catalog::{CatalogName, CatalogOption, CatalogRegistry};
use rsvp_contacts::{ImportReport, dedupe_contacts};
use rsvp_core::config::Settings;
use rsvp_core::types::Language;
use rsvp_service::{SuggestionSnapshot, build_hosting_suggestions};
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{CatalogCommand, Command, FormatChoice};
use crate::error::{AppError, AppResult};

/// ## Summary
/// Runs `command` with `settings` and returns its JSON output.
///
/// ## Errors
/// Returns an error if an input cannot be read or parsed, or the built-in
/// catalogs failed to load.
pub fn run(command: &Command, settings: &Settings) -> AppResult<Value> {
    match command {
        Command::Import {
            input,
            format,
            dedupe,
        } => {
            let text = read_input(input)?;
            let report = import_contacts(&text, *format, *dedupe || settings.import.dedupe);
            Ok(serde_json::to_value(report.contacts)?)
        }
        Command::Catalog { command } => catalog(command, settings),
        Command::Suggest {
            snapshot,
            event,
            lang,
        } => suggest(snapshot, *event, lang.unwrap_or(settings.locale.default_language), settings),
    }
}

/// Reads `input`, or stdin when it is `-`.
fn read_input(input: &str) -> AppResult<String> {
    let io_error = |source| AppError::Io {
        path: input.to_owned(),
        source,
    };

    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(io_error)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).map_err(io_error)
    }
}

/// Parses `text`, detecting the format when asked to, and optionally merges
/// duplicates.
#[must_use]
pub fn import_contacts(text: &str, format: FormatChoice, dedupe: bool) -> ImportReport {
    let mut report = match format {
        FormatChoice::Auto => rsvp_contacts::parse_auto(text),
        FormatChoice::Fixed(format) => rsvp_contacts::parse(text, format),
    };

    if dedupe {
        let contacts = std::mem::take(&mut report.contacts);
        report.contacts = dedupe_contacts(contacts);
    }

    tracing::info!(
        format = %report.format,
        imported = report.contacts.len(),
        skipped = report.skipped,
        dedupe,
        "Import finished"
    );

    report
}

/// ## Summary
/// The built-in registry using the configured label fallback.
///
/// ## Errors
/// Returns the catalog error raised while indexing the built-in data.
pub fn registry(settings: &Settings) -> AppResult<CatalogRegistry> {
    Ok(rsvp_catalog::builtin()?
        .clone()
        .with_fallback(settings.locale.fallback_language))
}

fn catalog(command: &CatalogCommand, settings: &Settings) -> AppResult<Value> {
    let registry = registry(settings)?;
    let language = |lang: Option<Language>| lang.unwrap_or(settings.locale.default_language);

    match command {
        CatalogCommand::List { name, lang } => Ok(serde_json::to_value(
            registry.option_labels(*name, language(*lang)),
        )?),
        CatalogCommand::Resolve { name, value, lang } => Ok(serde_json::to_value(resolve(
            &registry,
            *name,
            value,
            language(*lang),
        ))?),
    }
}

#[must_use]
pub fn resolve(
    registry: &CatalogRegistry,
    name: CatalogName,
    value: &str,
    language: Language,
) -> CatalogOption {
    CatalogOption {
        code: registry.resolve_code(name, value),
        label: registry.resolve_label(name, value, language),
    }
}

fn suggest(path: &Path, event_id: Uuid, language: Language, settings: &Settings) -> AppResult<Value> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let snapshot = SuggestionSnapshot::from_json(&json)?;

    let summary = build_hosting_suggestions(
        event_id,
        &snapshot,
        &registry(settings)?,
        language,
        settings.suggestions,
    );

    Ok(serde_json::to_value(summary)?)
}

#[cfg(test)]
mod tests {
    use rsvp_contacts::ImportFormat;

    use super::*;

    fn settings() -> Settings {
        Settings::load_from("does-not-exist.toml").unwrap()
    }

    #[test_log::test]
    fn import_detects_and_dedupes() {
        let text = "Nombre completo;Correo\nAna;ana@x.com\nAna García;ANA@x.com\nLuis;";

        let report = import_contacts(text, FormatChoice::Auto, true);
        assert_eq!(report.format, ImportFormat::Csv);
        assert_eq!(report.contacts.len(), 2);
        assert_eq!(report.contacts[0].last_name, "García");

        let report = import_contacts(text, FormatChoice::Auto, false);
        assert_eq!(report.contacts.len(), 3);
    }

    #[test]
    fn import_honours_forced_format() {
        let report = import_contacts("Nombre,Email", FormatChoice::Fixed(ImportFormat::Text), false);
        assert_eq!(report.format, ImportFormat::Text);
        assert_eq!(report.contacts[0].first_name, "Nombre");
    }

    #[test]
    fn catalog_commands_emit_json() {
        let settings = settings();

        let listed = run(
            &Command::Catalog {
                command: CatalogCommand::List {
                    name: CatalogName::DayMoment,
                    lang: Some(Language::En),
                },
            },
            &settings,
        )
        .unwrap();
        assert_eq!(listed[0]["code"], "morning");
        assert_eq!(listed[0]["label"], "Morning");

        let resolved = run(
            &Command::Catalog {
                command: CatalogCommand::Resolve {
                    name: CatalogName::Allergy,
                    value: "Cacahuetes".to_owned(),
                    lang: None,
                },
            },
            &settings,
        )
        .unwrap();
        assert_eq!(resolved["code"], "peanut");
        assert_eq!(resolved["label"], "Cacahuete");
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let err = run(
            &Command::Suggest {
                snapshot: "does/not/exist.json".into(),
                event: Uuid::nil(),
                lang: None,
            },
            &settings(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
