//! Tagsieve - multi-tag game catalog search
//!
//! Narrow a game catalog by marking tags as required (include) or forbidden
//! (exclude), and get the matches grouped by how many required tags each
//! game is missing. Perfect matches come first, then games missing one tag,
//! and so on. Any game carrying an excluded tag is left out entirely.
//!
//! The pieces, bottom-up:
//!
//! - [`model`]: tags, games, review sources and reviews
//! - [`matching`]: validated queries and the bucketing engine
//! - [`selection`]: the per-tag `none → include → exclude` state machine
//! - [`catalog`]: sled-backed and in-memory catalogs behind [`TagCatalog`]
//! - [`search`]: sessions that tie a selection to a catalog

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod matching;
pub mod model;
pub mod output;
pub mod search;
pub mod selection;

#[cfg(test)]
pub mod testing;

pub use catalog::TagCatalog;
pub use model::{
    Game, GameId, Review, ReviewId, Sentiment, Source, SourceId, SourceKind, Tag, TagColor, TagId,
};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TagsieveError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Selection error
    #[error("Selection error: {0}")]
    SelectionError(#[from] selection::SelectionError),
    /// Query validation error
    #[error("Query error: {0}")]
    MatchError(#[from] matching::MatchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
