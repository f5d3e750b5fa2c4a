//! JSON catalog snapshots for import and export
//!
//! The document shape is `{ "tags": [...], "games": [...], "sources": [...],
//! "reviews": [...] }`. Games refer to tags by name; reviews refer to games
//! and sources by id. Only `tags` and `games` are needed for searching, so the
//! review sections may be omitted.

use super::error::CatalogError;
use crate::model::{Game, Review, Source, Tag};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A complete, self-contained copy of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl CatalogSnapshot {
    /// Parse a snapshot document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SerializeError` for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::SerializeError` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check vocabulary integrity before anything is written
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a blank tag or game name
    /// - `DuplicateTag` for a repeated tag id or name
    /// - `InvalidInput` for a repeated game id
    /// - `UnknownTag` when a game references a tag name not in `tags`
    /// - `InvalidInput` for a blank source name, or a repeated source or review id
    /// - `GameNotFound` / `UnknownSource` when a review points outside the document
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for tag in &self.tags {
            if tag.name.trim().is_empty() {
                return Err(CatalogError::InvalidInput(format!("tag {} has an empty name", tag.id)));
            }
            if !ids.insert(tag.id) {
                return Err(CatalogError::DuplicateTag(format!("id {}", tag.id)));
            }
            if !names.insert(tag.name.as_str()) {
                return Err(CatalogError::DuplicateTag(tag.name.clone()));
            }
        }

        let mut game_ids = HashSet::new();
        for game in &self.games {
            if game.name.trim().is_empty() {
                return Err(CatalogError::InvalidInput(format!("game {} has an empty name", game.id)));
            }
            if !game_ids.insert(game.id) {
                return Err(CatalogError::InvalidInput(format!("duplicate game id {}", game.id)));
            }
            if let Some(unknown) = game.tags.iter().find(|t| !names.contains(t.as_str())) {
                return Err(CatalogError::UnknownTag(unknown.clone()));
            }
        }

        let mut source_ids = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(CatalogError::InvalidInput(format!("source {} has an empty name", source.id)));
            }
            if !source_ids.insert(source.id) {
                return Err(CatalogError::InvalidInput(format!("duplicate source id {}", source.id)));
            }
        }

        let mut review_ids = HashSet::new();
        for review in &self.reviews {
            if !review_ids.insert(review.id) {
                return Err(CatalogError::InvalidInput(format!("duplicate review id {}", review.id)));
            }
            if !game_ids.contains(&review.game_id) {
                return Err(CatalogError::GameNotFound(review.game_id));
            }
            if let Some(source) = review.source_id
                && !source_ids.contains(&source)
            {
                return Err(CatalogError::UnknownSource(source));
            }
        }

        Ok(())
    }
}
