use thiserror::Error;

/// Service layer errors - wraps the lower crates' errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CatalogError(#[from] rsvp_catalog::error::CatalogError),

    #[error(transparent)]
    CoreError(#[from] rsvp_core::error::CoreError),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
