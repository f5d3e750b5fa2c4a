//! Testing utilities for tagsieve
//!
//! Provides a `TestCatalog` wrapper for temporary sled catalogs and the
//! small fixture catalog most tests share:
//!
//! | id | game | tags            |
//! |----|------|-----------------|
//! | 1  | A    | Action, Indie   |
//! | 2  | B    | Action, Horror  |
//! | 3  | C    | Horror          |
//!
//! The vocabulary also contains an unused `RPG` tag. Game A has one
//! unsourced review; game B has one each from the two sample sources.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, CatalogSnapshot};
use crate::model::{
    Game, GameId, Review, Sentiment, Source, SourceId, SourceKind, Tag, TagColor,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use tempfile::TempDir;

/// Temporary sled catalog removed when the wrapper goes out of scope
///
/// # Panics
/// Constructors panic if the temporary directory or catalog cannot be created.
pub struct TestCatalog {
    // Declared before `dir` so the database closes before its directory is removed.
    catalog: Catalog,
    dir: TempDir,
}

impl TestCatalog {
    /// Open an empty catalog in a fresh temporary directory
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let catalog = Catalog::open(dir.path().join("catalog")).expect("Failed to open test catalog");
        Self { catalog, dir }
    }

    /// Open a catalog preloaded with [`sample_snapshot`]
    pub fn with_sample() -> Self {
        let test_catalog = Self::new();
        test_catalog
            .catalog
            .import(&sample_snapshot())
            .expect("Failed to import sample catalog");
        test_catalog
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Directory holding the catalog
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[must_use]
pub fn sample_tags() -> Vec<Tag> {
    vec![
        Tag::new(1, "Action", TagColor::Green),
        Tag::new(2, "Indie", TagColor::Orange),
        Tag::new(3, "Horror", TagColor::Red),
        Tag::new(4, "RPG", TagColor::Gray),
    ]
}

/// Sample games with a fixed `created_at` so repeated calls compare equal
#[must_use]
pub fn sample_games() -> Vec<Game> {
    let created_at = fixed_created_at();
    [
        Game::new(1, "A").with_tags(["Action", "Indie"]),
        Game::new(2, "B").with_tags(["Action", "Horror"]),
        Game::new(3, "C").with_tags(["Horror"]),
    ]
    .into_iter()
    .map(|game| Game { created_at, ..game })
    .collect()
}

#[must_use]
pub fn sample_sources() -> Vec<Source> {
    vec![
        Source {
            url: Some("https://www.ign.com".into()),
            ..Source::new(1, "IGN", SourceKind::Website)
        },
        Source::new(2, "Skill Up", SourceKind::Youtube),
    ]
}

/// Sample reviews in the order the catalog stores them: by game, then by id
#[must_use]
pub fn sample_reviews() -> Vec<Review> {
    let created_at = fixed_created_at();
    vec![
        Review {
            reviewer_name: Some("Anonymous".into()),
            sentiment: Some(Sentiment::Negative),
            created_at,
            ..Review::new(3, 1)
        },
        Review {
            source_id: Some(SourceId(1)),
            reviewer_name: Some("Jane Doe".into()),
            review_snippet: Some("A horror classic reborn.".into()),
            sentiment: Some(Sentiment::Positive),
            published_at: NaiveDate::from_ymd_opt(2023, 3, 24),
            created_at,
            ..Review::new(1, 2)
        },
        Review {
            source_id: Some(SourceId(2)),
            sentiment: Some(Sentiment::Mixed),
            created_at,
            ..Review::new(2, 2)
        },
    ]
}

#[must_use]
pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        tags: sample_tags(),
        games: sample_games(),
        sources: sample_sources(),
        reviews: sample_reviews(),
    }
}

fn fixed_created_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_basic() {
        let test_catalog = TestCatalog::new();
        assert_eq!(test_catalog.catalog().count(), 0);
        assert!(test_catalog.path().exists());
    }

    #[test]
    fn test_catalog_cleanup() {
        let path = {
            let test_catalog = TestCatalog::new();
            test_catalog.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_catalog_with_sample() {
        let test_catalog = TestCatalog::with_sample();
        assert_eq!(test_catalog.catalog().count(), 3);
        assert_eq!(test_catalog.catalog().tag_count(), 4);
        assert_eq!(test_catalog.catalog().review_count(), 3);
    }

    #[test]
    fn test_sample_snapshot_is_valid() {
        assert!(sample_snapshot().validate().is_ok());
    }

    #[test]
    fn test_sample_reviews_point_at_sample_games() {
        let games: Vec<GameId> = sample_games().iter().map(|g| g.id).collect();
        assert!(sample_reviews().iter().all(|r| games.contains(&r.game_id)));
    }
}
