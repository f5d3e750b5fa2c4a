//! In-memory catalog over an already fetched snapshot

use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;
use super::traits::TagCatalog;
use crate::matching::{TagIndex, TagQuery};
use crate::model::{Game, Tag};

/// Read-only catalog held entirely in memory
///
/// Candidates come from a [`TagIndex`] built once at construction, so a
/// query only touches games carrying at least one included tag.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tags: Vec<Tag>,
    games: Vec<Game>,
    index: TagIndex,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new(tags: Vec<Tag>, games: Vec<Game>) -> Self {
        let index = TagIndex::build(&games);
        Self { tags, games, index }
    }

    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl From<CatalogSnapshot> for MemoryCatalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::new(snapshot.tags, snapshot.games)
    }
}

impl TagCatalog for MemoryCatalog {
    fn list_tags(&self) -> Result<Vec<Tag>, CatalogError> {
        Ok(self.tags.clone())
    }

    fn candidates(&self, query: &TagQuery) -> Result<Vec<Game>, CatalogError> {
        Ok(self
            .index
            .candidates(query.include())
            .into_iter()
            .filter_map(|position| self.games.get(position).cloned())
            .collect())
    }
}
