//! Match-specific error types
//!
//! These errors are raised when a tag query is constructed. Once a
//! [`TagQuery`](super::TagQuery) exists, bucketing itself cannot fail.
//!
//! # Error Types
//!
//! - **`NoIncludedTags`**: The include set was empty after trimming and de-duplication
//! - **`ConflictingTags`**: One or more tags appeared in both the include and exclude sets

use thiserror::Error;

/// Query construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// No tag to include was given
    #[error("At least one tag to include is required")]
    NoIncludedTags,

    /// The same tag was both required and forbidden
    #[error("Tags cannot be both included and excluded: {}", .0.join(", "))]
    ConflictingTags(Vec<String>),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
