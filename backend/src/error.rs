use actix_multipart::MultipartError;
use std::num::ParseIntError;
use thiserror::Error;
use tokio::task::JoinError;

/// Failures of the product store. Any of these means the database could not serve
/// the request; none of them describe a business outcome.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

/// Errors surfaced by the catalog handlers.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Storage unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("Background task failed: {0}")]
    Worker(#[from] JoinError),
    #[error("Malformed form data: {0}")]
    Form(String),
}

impl From<MultipartError> for CatalogError {
    fn from(e: MultipartError) -> Self {
        CatalogError::Form(e.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {source}")]
    InvalidPort {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
}
