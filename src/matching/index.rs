//! In-memory tag → game inverted index
//!
//! Built once over a catalog snapshot so a query only has to look at games
//! that carry at least one included tag instead of the whole catalog. This
//! is purely an optimization: the bucketing engine applies the full rules to
//! whatever candidates it is handed.

use crate::model::Game;
use std::collections::{BTreeSet, HashMap};

/// Positions of games in a slice, grouped by tag name
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl TagIndex {
    /// Index every game in `games` by position
    #[must_use]
    pub fn build(games: &[Game]) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, game) in games.iter().enumerate() {
            for tag in &game.tags {
                postings.entry(tag.clone()).or_default().push(position);
            }
        }
        Self { postings }
    }

    /// Positions of games carrying `tag`, ascending
    #[must_use]
    pub fn postings(&self, tag: &str) -> &[usize] {
        self.postings
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Positions of games carrying any of `tags`, ascending and de-duplicated
    #[must_use]
    pub fn candidates(&self, tags: &[String]) -> Vec<usize> {
        let union: BTreeSet<usize> = tags
            .iter()
            .flat_map(|tag| self.postings(tag).iter().copied())
            .collect();
        union.into_iter().collect()
    }

    /// Number of distinct indexed tags
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.postings.len()
    }
}
