//! Match bucketing engine
//!
//! Turns a set of candidate games and a [`TagQuery`] into a [`MatchResult`]:
//!
//! 1. **Filter**: any game carrying an excluded tag is dropped, no matter how
//!    many included tags it also has
//! 2. **Rank**: `missing = |include| - |include ∩ game.tags|`; games matching
//!    none of the included tags are dropped
//! 3. **Group**: games are bucketed by `missing` (ascending), each bucket
//!    ordered by name and then id
//!
//! The engine is a pure function of its inputs. Candidates may over-approximate
//! (for example the whole catalog); candidates sharing an id collapse to the
//! first one given.
//!
//! # Examples
//!
//! ```
//! use tagsieve::matching::{TagQuery, bucket_matches};
//! use tagsieve::Game;
//!
//! let games = vec![
//!     Game::new(1, "A").with_tags(["Action", "Indie"]),
//!     Game::new(2, "B").with_tags(["Action", "Horror"]),
//!     Game::new(3, "C").with_tags(["Horror"]),
//! ];
//! let query = TagQuery::new(["Action", "Horror"], Vec::<String>::new()).unwrap();
//! let result = bucket_matches(games, &query);
//!
//! assert_eq!(result.bucket(0)[0].name, "B");
//! assert_eq!(result.bucket(1).len(), 2);
//! ```

pub mod error;
pub mod index;
pub mod query;
pub mod result;

pub use error::MatchError;
pub use index::TagIndex;
pub use query::{TagQuery, split_tag_list};
pub use result::{MatchResult, RankedGame};

use crate::model::{Game, GameId};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Candidate count above which scoring runs on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Partition candidate games into missing-count buckets
#[must_use]
pub fn bucket_matches(games: Vec<Game>, query: &TagQuery) -> MatchResult {
    // First record per id wins.
    let mut unique: BTreeMap<GameId, Game> = BTreeMap::new();
    for game in games {
        unique.entry(game.id).or_insert(game);
    }
    let games: Vec<Game> = unique.into_values().collect();

    let scored: Vec<(usize, Game)> = if games.len() >= PARALLEL_THRESHOLD {
        games
            .into_par_iter()
            .filter_map(|game| query.missing_count(&game.tags).map(|missing| (missing, game)))
            .collect()
    } else {
        games
            .into_iter()
            .filter_map(|game| query.missing_count(&game.tags).map(|missing| (missing, game)))
            .collect()
    };

    let mut buckets: BTreeMap<usize, Vec<Game>> = BTreeMap::new();
    for (missing, game) in scored {
        buckets.entry(missing).or_default().push(game);
    }

    for bucket in buckets.values_mut() {
        bucket.sort_by(display_order);
    }

    let mut result = MatchResult::empty(query);
    result.buckets = buckets;
    result
}

/// Order within a bucket: name, then id so equal names stay deterministic
fn display_order(a: &Game, b: &Game) -> Ordering {
    a.name.cmp(&b.name).then(a.id.cmp(&b.id))
}
