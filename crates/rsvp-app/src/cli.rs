use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use rsvp_catalog::CatalogName;
use rsvp_contacts::ImportFormat;
use rsvp_core::error::CoreError;
use rsvp_core::types::Language;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(
    name = "rsvp",
    version,
    about = "Contact import, preference catalogs and hosting suggestions for guest lists"
)]
pub struct Cli {
    /// TOML file layered over defaults and environment
    #[arg(long, global = true, env = "RSVP_CONFIG", default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a contact list and print the records as JSON
    Import {
        /// File to read, `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// `auto`, `csv`, `text` or `vcard`
        #[arg(long, default_value = "auto")]
        format: FormatChoice,

        /// Merge contacts sharing an email, phone or name
        #[arg(long)]
        dedupe: bool,
    },

    /// Query the preference catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },

    /// Build hosting suggestions for an event from a JSON snapshot
    Suggest {
        snapshot: PathBuf,

        #[arg(long)]
        event: Uuid,

        #[arg(long)]
        lang: Option<Language>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Print a catalog's options in editorial order
    List {
        name: CatalogName,

        #[arg(long)]
        lang: Option<Language>,
    },

    /// Resolve a value to its code and label
    Resolve {
        name: CatalogName,

        value: String,

        #[arg(long)]
        lang: Option<Language>,
    },
}

/// Import format requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatChoice {
    Auto,
    Fixed(ImportFormat),
}

impl FromStr for FormatChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_defaults_to_stdin_and_auto() {
        let cli = Cli::try_parse_from(["rsvp", "import"]).unwrap();
        match cli.command {
            Command::Import {
                input,
                format,
                dedupe,
            } => {
                assert_eq!(input, "-");
                assert_eq!(format, FormatChoice::Auto);
                assert!(!dedupe);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn catalog_resolve_arguments() {
        let cli = Cli::try_parse_from([
            "rsvp", "catalog", "resolve", "pet-allergy", "gatos", "--lang", "en-GB",
        ])
        .unwrap();
        match cli.command {
            Command::Catalog {
                command: CatalogCommand::Resolve { name, value, lang },
            } => {
                assert_eq!(name, CatalogName::PetAllergy);
                assert_eq!(value, "gatos");
                assert_eq!(lang, Some(Language::En));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Cli::try_parse_from(["rsvp", "import", "--format", "xlsx"]).is_err());
        assert!(Cli::try_parse_from(["rsvp", "catalog", "list", "planets"]).is_err());
        assert!(Cli::try_parse_from(["rsvp", "suggest", "s.json", "--event", "nope"]).is_err());
    }

    #[test]
    fn format_choice_parsing() {
        assert_eq!("AUTO".parse::<FormatChoice>().unwrap(), FormatChoice::Auto);
        assert_eq!(
            "vcf".parse::<FormatChoice>().unwrap(),
            FormatChoice::Fixed(ImportFormat::VCard)
        );
    }
}
