//! Bucketed search results

use super::query::TagQuery;
use crate::model::Game;
use serde::Serialize;
use std::collections::BTreeMap;

/// Games grouped by how many required tags they lack
///
/// Buckets are keyed by missing count and iterate in ascending order, so
/// perfect matches (key `0`) always come first. A result is never mutated
/// after it is built; every search produces a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub included_tags: Vec<String>,
    pub excluded_tags: Vec<String>,
    pub total_required_tags: usize,
    pub buckets: BTreeMap<usize, Vec<Game>>,
}

/// A bucketed game annotated with its match level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedGame<'a> {
    pub game: &'a Game,
    pub matching_tags: usize,
    pub missing_tags: usize,
}

impl MatchResult {
    /// An empty result for the given query
    #[must_use]
    pub fn empty(query: &TagQuery) -> Self {
        Self {
            included_tags: query.include().to_vec(),
            excluded_tags: query.exclude().to_vec(),
            total_required_tags: query.total_required(),
            buckets: BTreeMap::new(),
        }
    }

    /// True when no game matched; this is a normal outcome, not a failure
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of games across all buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Games missing exactly `missing` required tags
    #[must_use]
    pub fn bucket(&self, missing: usize) -> &[Game] {
        self.buckets
            .get(&missing)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Games that carry every required tag
    #[must_use]
    pub fn perfect_matches(&self) -> &[Game] {
        self.bucket(0)
    }

    /// Buckets in ascending missing-count order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Game])> {
        self.buckets
            .iter()
            .map(|(missing, games)| (*missing, games.as_slice()))
    }

    /// Every game in display order, annotated with match counts
    pub fn ranked(&self) -> impl Iterator<Item = RankedGame<'_>> {
        self.iter().flat_map(move |(missing, games)| {
            games.iter().map(move |game| RankedGame {
                game,
                matching_tags: self.total_required_tags - missing,
                missing_tags: missing,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(buckets: Vec<(usize, Vec<Game>)>) -> MatchResult {
        let query = TagQuery::new(vec!["Action", "Horror"], Vec::<String>::new()).unwrap();
        let mut result = MatchResult::empty(&query);
        result.buckets = buckets.into_iter().collect();
        result
    }

    #[test]
    fn test_empty_result() {
        let result = result_with(vec![]);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert!(result.perfect_matches().is_empty());
        assert_eq!(result.total_required_tags, 2);
    }

    #[test]
    fn test_len_and_bucket_access() {
        let result = result_with(vec![
            (1, vec![Game::new(1, "A"), Game::new(3, "C")]),
            (0, vec![Game::new(2, "B")]),
        ]);
        assert_eq!(result.len(), 3);
        assert_eq!(result.bucket(1).len(), 2);
        assert!(result.bucket(5).is_empty());
        assert_eq!(result.perfect_matches()[0].name, "B");
    }

    #[test]
    fn test_iteration_is_ascending() {
        let result = result_with(vec![
            (1, vec![Game::new(1, "A")]),
            (0, vec![Game::new(2, "B")]),
        ]);
        let keys: Vec<usize> = result.iter().map(|(missing, _)| missing).collect();
        assert_eq!(keys, vec![0, 1]);
    }

    #[test]
    fn test_ranked_annotations() {
        let result = result_with(vec![
            (0, vec![Game::new(2, "B")]),
            (1, vec![Game::new(1, "A")]),
        ]);
        let ranked: Vec<(String, usize, usize)> = result
            .ranked()
            .map(|r| (r.game.name.clone(), r.matching_tags, r.missing_tags))
            .collect();
        assert_eq!(
            ranked,
            vec![("B".to_string(), 2, 0), ("A".to_string(), 1, 1)]
        );
    }
}
