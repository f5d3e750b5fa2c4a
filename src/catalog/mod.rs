//! Game catalog storage
//!
//! Persists the tag vocabulary and games in a sled database and serves them
//! to searches through [`TagCatalog`].
//!
//! Uses five sled trees:
//! - `tags`: tag id -> `Tag`
//! - `games`: game id -> `Game`
//! - `tag_index`: tag name -> game ids carrying it (reverse index)
//! - `sources`: source id -> `Source`
//! - `reviews`: (game id, review id) -> `Review`

use sled::{Db, Tree};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info, instrument};

pub mod error;
pub mod lookup;
pub mod memory;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use snapshot::CatalogSnapshot;
pub use traits::TagCatalog;
pub use types::{GameKey, ReviewKey, SourceKey, TagKey};

use crate::matching::TagQuery;
use crate::model::{Game, GameId, Review, Source, SourceId, Tag, TagId};
use types::{decode, encode};

/// Counts of records written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub tags: usize,
    pub games: usize,
    pub sources: usize,
    pub reviews: usize,
}

/// sled-backed catalog
pub struct Catalog {
    db: Db,
    tags: Tree,
    games: Tree,
    tag_index: Tree,
    sources: Tree,
    reviews: Tree,
}

impl Catalog {
    /// Opens or creates a catalog at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use tagsieve::catalog::Catalog;
    /// let catalog = Catalog::open("games_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the database or its trees cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let db = sled::open(path)?;
        let tags = db.open_tree("tags")?;
        let games = db.open_tree("games")?;
        let tag_index = db.open_tree("tag_index")?;
        let sources = db.open_tree("sources")?;
        let reviews = db.open_tree("reviews")?;
        Ok(Self {
            db,
            tags,
            games,
            tag_index,
            sources,
            reviews,
        })
    }

    /// Insert or update a tag
    ///
    /// Updating an existing id may change its color or description but not
    /// its name, since games refer to tags by name.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    /// - `DuplicateTag` if another tag already uses the name, or the id is
    ///   taken under a different name
    pub fn insert_tag(&self, tag: &Tag) -> Result<(), CatalogError> {
        if tag.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput(format!("tag {} has an empty name", tag.id)));
        }
        self.check_tag_identity(tag)?;

        self.tags.insert(TagKey(tag.id).to_bytes(), encode(tag)?)?;
        debug!(tag = %tag.name, id = %tag.id, "stored tag");
        Ok(())
    }

    /// Get a tag by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the read or decoding fails.
    pub fn get_tag(&self, id: TagId) -> Result<Option<Tag>, CatalogError> {
        self.tags
            .get(TagKey(id).to_bytes())?
            .map(|value| decode(&value))
            .transpose()
    }

    /// Find a tag by exact name
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>, CatalogError> {
        Ok(self.list_tags()?.into_iter().find(|tag| tag.name == name))
    }

    /// All tags in id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn list_tags(&self) -> Result<Vec<Tag>, CatalogError> {
        self.tags
            .iter()
            .map(|entry| {
                let (_, value) = entry?;
                decode(&value)
            })
            .collect()
    }

    /// Insert or update a game
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    /// - `UnknownTag` if the game references a tag not in the vocabulary
    /// - `CatalogError` if any database operation fails
    pub fn insert_game(&self, game: &Game) -> Result<(), CatalogError> {
        if game.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput(format!("game {} has an empty name", game.id)));
        }

        let known: BTreeSet<String> = self.list_tags()?.into_iter().map(|tag| tag.name).collect();
        if let Some(unknown) = game.tags.iter().find(|name| !known.contains(*name)) {
            return Err(CatalogError::UnknownTag(unknown.clone()));
        }

        if let Some(old) = self.get_game(game.id)? {
            self.remove_from_tag_index(game.id, &old.tags)?;
        }

        self.games.insert(GameKey(game.id).to_bytes(), encode(game)?)?;
        self.add_to_tag_index(game.id, &game.tags)?;
        debug!(game = %game.name, id = %game.id, tags = game.tags.len(), "stored game");
        Ok(())
    }

    /// Get a game by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the read or decoding fails.
    pub fn get_game(&self, id: GameId) -> Result<Option<Game>, CatalogError> {
        self.games
            .get(GameKey(id).to_bytes())?
            .map(|value| decode(&value))
            .transpose()
    }

    /// Get a game by id, treating absence as an error
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::GameNotFound` if no game has this id.
    pub fn game(&self, id: GameId) -> Result<Game, CatalogError> {
        self.get_game(id)?.ok_or(CatalogError::GameNotFound(id))
    }

    /// Remove a game with its index entries and reviews
    ///
    /// # Returns
    /// `true` if the game existed
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any database operation fails.
    pub fn remove_game(&self, id: GameId) -> Result<bool, CatalogError> {
        let Some(game) = self.get_game(id)? else {
            return Ok(false);
        };
        self.remove_from_tag_index(id, &game.tags)?;
        for entry in self.reviews.scan_prefix(GameKey(id).to_bytes()) {
            let (key, _) = entry?;
            self.reviews.remove(key)?;
        }
        Ok(self.games.remove(GameKey(id).to_bytes())?.is_some())
    }

    /// Insert or update a review source
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    /// - `CatalogError` if the write fails
    pub fn insert_source(&self, source: &Source) -> Result<(), CatalogError> {
        if source.name.trim().is_empty() {
            return Err(CatalogError::InvalidInput(format!("source {} has an empty name", source.id)));
        }
        self.sources.insert(SourceKey(source.id).to_bytes(), encode(source)?)?;
        debug!(source = %source.name, id = %source.id, "stored source");
        Ok(())
    }

    /// Get a review source by id
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the read or decoding fails.
    pub fn get_source(&self, id: SourceId) -> Result<Option<Source>, CatalogError> {
        self.sources
            .get(SourceKey(id).to_bytes())?
            .map(|value| decode(&value))
            .transpose()
    }

    /// All review sources in id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn list_sources(&self) -> Result<Vec<Source>, CatalogError> {
        self.sources
            .iter()
            .map(|entry| {
                let (_, value) = entry?;
                decode(&value)
            })
            .collect()
    }

    /// Insert or update a review
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if the reviewed game is not stored
    /// - `UnknownSource` if the review names a source that is not stored
    /// - `CatalogError` if any database operation fails
    pub fn insert_review(&self, review: &Review) -> Result<(), CatalogError> {
        if !self.games.contains_key(GameKey(review.game_id).to_bytes())? {
            return Err(CatalogError::GameNotFound(review.game_id));
        }
        if let Some(source) = review.source_id
            && !self.sources.contains_key(SourceKey(source).to_bytes())?
        {
            return Err(CatalogError::UnknownSource(source));
        }

        let key = ReviewKey {
            game: review.game_id,
            review: review.id,
        };
        self.reviews.insert(key.to_bytes(), encode(review)?)?;
        debug!(review = %review.id, game = %review.game_id, "stored review");
        Ok(())
    }

    /// Reviews of one game, in review id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn reviews_for(&self, game: GameId) -> Result<Vec<Review>, CatalogError> {
        self.reviews
            .scan_prefix(GameKey(game).to_bytes())
            .map(|entry| {
                let (_, value) = entry?;
                decode(&value)
            })
            .collect()
    }

    /// Every review, grouped by game id and then in review id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn list_reviews(&self) -> Result<Vec<Review>, CatalogError> {
        self.reviews
            .iter()
            .map(|entry| {
                let (_, value) = entry?;
                decode(&value)
            })
            .collect()
    }

    /// All games in id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if iteration or decoding fails.
    pub fn list_games(&self) -> Result<Vec<Game>, CatalogError> {
        self.games
            .iter()
            .map(|entry| {
                let (_, value) = entry?;
                decode(&value)
            })
            .collect()
    }

    /// One page of games in id order, optionally restricted to a tag
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any read or decoding fails.
    pub fn games_page(
        &self,
        skip: usize,
        limit: usize,
        tag: Option<&str>,
    ) -> Result<Vec<Game>, CatalogError> {
        match tag {
            Some(tag) => self
                .find_by_tag(tag)?
                .into_iter()
                .skip(skip)
                .take(limit)
                .map(|id| self.game(id))
                .collect(),
            None => self
                .games
                .iter()
                .skip(skip)
                .take(limit)
                .map(|entry| {
                    let (_, value) = entry?;
                    decode(&value)
                })
                .collect(),
        }
    }

    /// Ids of games carrying `tag`, ascending (reverse index lookup)
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the read or decoding fails.
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<GameId>, CatalogError> {
        match self.tag_index.get(tag.as_bytes())? {
            Some(value) => decode(&value),
            None => Ok(Vec::new()),
        }
    }

    /// Ids of games carrying any of `tags`, ascending and unique
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any tag lookup fails.
    pub fn find_by_any_tag(&self, tags: &[String]) -> Result<Vec<GameId>, CatalogError> {
        let mut ids = BTreeSet::new();
        for tag in tags {
            ids.extend(self.find_by_tag(tag)?);
        }
        Ok(ids.into_iter().collect())
    }

    /// Every tag with the number of games carrying it, in tag id order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any read or decoding fails.
    pub fn tag_usage(&self) -> Result<Vec<(Tag, usize)>, CatalogError> {
        self.list_tags()?
            .into_iter()
            .map(|tag| {
                let count = self.find_by_tag(&tag.name)?.len();
                Ok((tag, count))
            })
            .collect()
    }

    /// Type-ahead lookup on game names
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if reading games fails.
    pub fn lookup(&self, query: &str, limit: usize) -> Result<Vec<Game>, CatalogError> {
        if lookup::search_term(query).is_none() {
            return Ok(Vec::new());
        }
        let games = self.list_games()?;
        Ok(lookup::lookup(&games, query, limit))
    }

    /// Load a snapshot into the catalog: sources, tags, games, then reviews
    ///
    /// The snapshot is validated on its own and against the stored tag
    /// vocabulary before anything is written.
    ///
    /// # Errors
    ///
    /// Returns the validation error, or the first storage error encountered.
    #[instrument(skip_all, fields(tags = snapshot.tags.len(), games = snapshot.games.len()))]
    pub fn import(&self, snapshot: &CatalogSnapshot) -> Result<ImportSummary, CatalogError> {
        snapshot.validate()?;
        for tag in &snapshot.tags {
            self.check_tag_identity(tag)?;
        }

        for source in &snapshot.sources {
            self.insert_source(source)?;
        }
        for tag in &snapshot.tags {
            self.insert_tag(tag)?;
        }
        for game in &snapshot.games {
            self.insert_game(game)?;
        }
        for review in &snapshot.reviews {
            self.insert_review(review)?;
        }
        self.flush()?;

        let summary = ImportSummary {
            tags: snapshot.tags.len(),
            games: snapshot.games.len(),
            sources: snapshot.sources.len(),
            reviews: snapshot.reviews.len(),
        };
        info!(
            tags = summary.tags,
            games = summary.games,
            sources = summary.sources,
            reviews = summary.reviews,
            "import complete"
        );
        Ok(summary)
    }

    /// Copy the whole catalog into a snapshot
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any read or decoding fails.
    pub fn export(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(CatalogSnapshot {
            tags: self.list_tags()?,
            games: self.list_games()?,
            sources: self.list_sources()?,
            reviews: self.list_reviews()?,
        })
    }

    /// Number of stored games
    #[must_use]
    pub fn count(&self) -> usize {
        self.games.len()
    }

    /// Number of stored tags
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Number of stored reviews
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), CatalogError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove every record and index entry
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if clearing any tree fails.
    pub fn clear(&self) -> Result<(), CatalogError> {
        self.tags.clear()?;
        self.games.clear()?;
        self.tag_index.clear()?;
        self.sources.clear()?;
        self.reviews.clear()?;
        Ok(())
    }

    /// Reject a tag whose id or name is already stored with a different partner
    fn check_tag_identity(&self, tag: &Tag) -> Result<(), CatalogError> {
        if let Some(existing) = self.get_tag(tag.id)?
            && existing.name != tag.name
        {
            return Err(CatalogError::DuplicateTag(format!("id {}", tag.id)));
        }
        if let Some(named) = self.find_tag_by_name(&tag.name)?
            && named.id != tag.id
        {
            return Err(CatalogError::DuplicateTag(tag.name.clone()));
        }
        Ok(())
    }

    fn add_to_tag_index(&self, id: GameId, tags: &BTreeSet<String>) -> Result<(), CatalogError> {
        for tag in tags {
            let mut ids = self.find_by_tag(tag)?;
            if let Err(position) = ids.binary_search(&id) {
                ids.insert(position, id);
            }
            self.tag_index.insert(tag.as_bytes(), encode(&ids)?)?;
        }
        Ok(())
    }

    fn remove_from_tag_index(&self, id: GameId, tags: &BTreeSet<String>) -> Result<(), CatalogError> {
        for tag in tags {
            let mut ids = self.find_by_tag(tag)?;
            ids.retain(|existing| *existing != id);

            if ids.is_empty() {
                self.tag_index.remove(tag.as_bytes())?;
            } else {
                self.tag_index.insert(tag.as_bytes(), encode(&ids)?)?;
            }
        }
        Ok(())
    }
}

impl TagCatalog for Catalog {
    fn list_tags(&self) -> Result<Vec<Tag>, CatalogError> {
        Self::list_tags(self)
    }

    #[instrument(skip_all, fields(include = ?query.include()))]
    fn candidates(&self, query: &TagQuery) -> Result<Vec<Game>, CatalogError> {
        let ids = self.find_by_any_tag(query.include())?;
        debug!(candidates = ids.len(), "reverse index lookup");

        let games: BTreeMap<GameId, Game> = ids
            .into_iter()
            .map(|id| self.game(id).map(|game| (id, game)))
            .collect::<Result<_, _>>()?;
        Ok(games.into_values().collect())
    }
}

impl Drop for Catalog {
    fn drop(&mut self) {
        // Best-effort; callers that need durability call flush().
        let _ = self.db.flush();
    }
}
