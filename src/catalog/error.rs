//! Catalog-specific error types
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`** / **`EncodeError`**: bincode failures on stored records
//! - **`SerializeError`**: Malformed snapshot documents
//! - **`DuplicateTag`** / **`UnknownTag`**: Vocabulary integrity violations
//! - **`GameNotFound`**: Lookup of a game id that is not stored
//! - **`UnknownSource`**: A review is attributed to a source that is not stored
//! - **`Unavailable`**: The catalog could not answer at all (retryable)

use crate::model::{GameId, SourceId};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Malformed snapshot document
    #[error("Error during serialization: {0}")]
    SerializeError(String),

    /// A tag with this id or name already exists
    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    /// A game references a tag that is not in the vocabulary
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// No game is stored under this id
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    /// A review names a source that is not stored
    #[error("Unknown review source: {0}")]
    UnknownSource(SourceId),

    /// Invalid input provided (e.g., an empty tag name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The catalog could not be reached
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializeError(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
