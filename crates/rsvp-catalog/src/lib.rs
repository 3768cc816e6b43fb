//! Multilingual preference vocabularies.
//!
//! Every preference field a guest fills in draws from a catalog of canonical
//! codes with Spanish, English and French labels. Free text, legacy English
//! spellings and any label resolve back to a code; unknown values pass
//! through unchanged.
//!
//! ```
//! use rsvp_catalog::CatalogName;
//! use rsvp_core::types::Language;
//!
//! let registry = rsvp_catalog::builtin().unwrap();
//! assert_eq!(registry.resolve_code(CatalogName::Drink, "Vino Tinto"), "red_wine");
//! assert_eq!(registry.resolve_label(CatalogName::Drink, "red_wine", Language::Fr), "Vin rouge");
//! ```

pub mod catalog;
mod data;
pub mod error;
pub mod registry;

use std::sync::LazyLock;

pub use catalog::{Catalog, CatalogEntry, CatalogName};
pub use error::{CatalogError, CatalogResult};
pub use registry::{CatalogOption, CatalogRegistry};

static BUILTIN: LazyLock<CatalogResult<CatalogRegistry>> = LazyLock::new(CatalogRegistry::builtin);

/// ## Summary
/// Returns the process-wide built-in registry, building it on first use.
///
/// ## Errors
/// Returns the [`CatalogError`] raised while indexing the built-in data.
pub fn builtin() -> CatalogResult<&'static CatalogRegistry> {
    BUILTIN.as_ref().map_err(Clone::clone)
}
