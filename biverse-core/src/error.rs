//! Error types for Biverse Core

use thiserror::Error;

/// Result type alias using BiverseError
pub type Result<T> = std::result::Result<T, BiverseError>;

/// Top-level error type for all Biverse operations
#[derive(Debug, Error)]
pub enum BiverseError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors raised by content-service requests.
///
/// Only the dual verse fetch lets these propagate to the caller; every other
/// call site converts them to a documented default value.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Errors that occur while constructing a book registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Book '{0}' must have at least one chapter")]
    EmptyBook(String),

    #[error("Duplicate book abbreviation '{0}'")]
    DuplicateAbbreviation(String),
}
