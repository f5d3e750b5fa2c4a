//! Search-specific error types
//!
//! # Error Types
//!
//! - **`NoIncludedTags`**: Search requested with nothing included; no catalog call is made
//! - **`InvalidQuery`**: The selection could not be frozen into a valid query
//! - **`Selection`**: A toggle or pre-seed referenced an unknown tag
//! - **`CatalogUnavailable`**: The catalog failed; the previous result is kept

use crate::catalog::CatalogError;
use crate::matching::MatchError;
use crate::selection::SelectionError;
use thiserror::Error;

/// Search errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// At least one tag must be included before searching
    #[error("Select at least one tag to include")]
    NoIncludedTags,

    /// Query validation failed
    #[error("Invalid query: {0}")]
    InvalidQuery(MatchError),

    /// Selection referenced an unknown tag
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Catalog failed while fetching candidates or tags
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(#[from] CatalogError),
}

impl From<MatchError> for SearchError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::NoIncludedTags => Self::NoIncludedTags,
            other => Self::InvalidQuery(other),
        }
    }
}

impl SearchError {
    /// True when retrying the same search may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::CatalogUnavailable(_))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
