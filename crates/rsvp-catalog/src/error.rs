use thiserror::Error;

use crate::catalog::CatalogName;

/// Catalog construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog {catalog}: key {key:?} maps to both {first:?} and {second:?}")]
    DuplicateKey {
        catalog: CatalogName,
        key: String,
        first: String,
        second: String,
    },

    #[error("Catalog {0} registered twice")]
    DuplicateCatalog(CatalogName),

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
