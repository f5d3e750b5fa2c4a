//! Read-only catalog abstraction
//!
//! Searches only need two things from a catalog: the tag vocabulary and the
//! games that might match a query. Any backing store that can supply those
//! gets bucketed search for free through the provided
//! [`TagCatalog::search_by_tags`].
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  TagCatalog                  │
//! │  - list_tags()               │
//! │  - candidates(&TagQuery)     │
//! │  - search_by_tags(&TagQuery) │  ← provided: candidates + bucketing
//! └──────────────────────────────┘
//!            ▲
//!    ┌───────┴────────┐
//!  Catalog       MemoryCatalog
//!  (sled)        (fetched snapshot)
//! ```

use super::error::CatalogError;
use crate::matching::{MatchResult, TagQuery, bucket_matches};
use crate::model::{Game, Tag};

/// Source of tags and games for searching
pub trait TagCatalog {
    /// The full tag vocabulary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn list_tags(&self) -> Result<Vec<Tag>, CatalogError>;

    /// Games that carry at least one included tag
    ///
    /// Implementations may return extra games or duplicates; the bucketing
    /// step applies the full include/exclude rules.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read.
    fn candidates(&self, query: &TagQuery) -> Result<Vec<Game>, CatalogError>;

    /// Run a bucketed search for `query`
    ///
    /// # Errors
    ///
    /// Returns the `CatalogError` from fetching candidates; the engine is not
    /// invoked in that case.
    fn search_by_tags(&self, query: &TagQuery) -> Result<MatchResult, CatalogError> {
        let games = self.candidates(query)?;
        Ok(bucket_matches(games, query))
    }
}
