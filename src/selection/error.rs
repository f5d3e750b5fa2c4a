//! Selection-specific error types
//!
//! Both variants describe a caller bug: the selection was asked about a tag
//! that is not part of the vocabulary it was built from. The selection is left
//! untouched when either is returned.

use crate::model::TagId;
use thiserror::Error;

/// Selection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Tag id is not in the vocabulary
    #[error("Unknown tag id: {0}")]
    UnknownTag(TagId),

    /// Tag name is not in the vocabulary
    #[error("Unknown tag: {0}")]
    UnknownTagName(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
