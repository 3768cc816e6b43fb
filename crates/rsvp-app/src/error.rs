use thiserror::Error;

/// Application-level errors (command layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] rsvp_service::error::ServiceError),

    #[error(transparent)]
    CatalogError(#[from] rsvp_catalog::error::CatalogError),

    #[error(transparent)]
    CoreError(#[from] rsvp_core::error::CoreError),

    #[error("Failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
