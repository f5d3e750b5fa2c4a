//! Catalog data model
//!
//! Tags, games and reviews as supplied by the catalog. Tags and games are
//! treated as read-only records for the duration of a search session: the tag
//! vocabulary is fetched once, and games are snapshotted per query.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Unique tag identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub u32);

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique game identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presentational tag category
///
/// Only used for display; matching never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Green,
    Orange,
    Red,
    #[default]
    Gray,
}

impl TagColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "orange" => Ok(Self::Orange),
            "red" => Ok(Self::Red),
            "gray" | "grey" => Ok(Self::Gray),
            other => Err(format!("Unknown tag color '{other}' (expected green, orange, red or gray)")),
        }
    }
}

/// A named classification label attachable to games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    #[serde(default)]
    pub color: TagColor,
    #[serde(default)]
    pub description: Option<String>,
}

impl Tag {
    /// Create a tag without a description
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, color: TagColor) -> Self {
        Self {
            id: TagId(id),
            name: name.into(),
            color,
            description: None,
        }
    }
}

/// A catalog item
///
/// `tags` holds tag names; matching is exact membership on those names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub igdb_id: Option<u64>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a game with no tags or optional attributes
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: GameId(id),
            name: name.into(),
            igdb_id: None,
            release_date: None,
            cover_image: None,
            summary: None,
            platforms: Vec::new(),
            tags: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style helper to attach tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }
}

/// Unique review source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(pub u32);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique review identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub u64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a review was published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Website,
    Youtube,
}

/// A publication or channel that reviews games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: SourceId,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: SourceKind,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Source {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, kind: SourceKind) -> Self {
        Self {
            id: SourceId(id),
            name: name.into(),
            url: None,
            kind,
            logo: None,
        }
    }
}

/// Overall verdict of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Mixed,
    Negative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Mixed => "mixed",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review of one game, optionally attributed to a [`Source`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub game_id: GameId,
    #[serde(default)]
    pub source_id: Option<SourceId>,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    #[serde(default)]
    pub review_snippet: Option<String>,
    #[serde(default)]
    pub review_url: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Create an unattributed review with no text
    #[must_use]
    pub fn new(id: u64, game_id: u64) -> Self {
        Self {
            id: ReviewId(id),
            game_id: GameId(game_id),
            source_id: None,
            reviewer_name: None,
            review_snippet: None,
            review_url: None,
            sentiment: None,
            published_at: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_color_parse() {
        assert_eq!("green".parse::<TagColor>(), Ok(TagColor::Green));
        assert_eq!(" Orange ".parse::<TagColor>(), Ok(TagColor::Orange));
        assert_eq!("grey".parse::<TagColor>(), Ok(TagColor::Gray));
        assert!("purple".parse::<TagColor>().is_err());
    }

    #[test]
    fn test_game_with_tags_dedupes() {
        let game = Game::new(1, "Hades").with_tags(["Action", "Roguelike", "Action"]);
        assert_eq!(game.tags.len(), 2);
        assert!(game.has_tag("Action"));
        assert!(!game.has_tag("action"));
    }

    #[test]
    fn test_game_deserialize_defaults() {
        let game: Game = serde_json::from_str(r#"{"id": 7, "name": "Celeste"}"#).unwrap();
        assert_eq!(game.id, GameId(7));
        assert!(game.tags.is_empty());
        assert!(game.release_date.is_none());
    }

    #[test]
    fn test_tag_json_color_lowercase() {
        let tag = Tag::new(3, "Horror", TagColor::Red);
        let json = serde_json::to_string(&tag).unwrap();
        assert!(json.contains(r#""color":"red""#));
    }

    #[test]
    fn test_source_type_field_name() {
        let source: Source =
            serde_json::from_str(r#"{"id": 2, "name": "Skill Up", "type": "youtube"}"#).unwrap();
        assert_eq!(source.kind, SourceKind::Youtube);
        assert!(source.url.is_none());

        let json = serde_json::to_string(&Source::new(1, "IGN", SourceKind::Website)).unwrap();
        assert!(json.contains(r#""type":"website""#));
    }

    #[test]
    fn test_review_sentiment_is_constrained() {
        let review: Review =
            serde_json::from_str(r#"{"id": 1, "game_id": 4, "sentiment": "mixed"}"#).unwrap();
        assert_eq!(review.sentiment, Some(Sentiment::Mixed));
        assert_eq!(review.game_id, GameId(4));

        let bad = serde_json::from_str::<Review>(r#"{"id": 1, "game_id": 4, "sentiment": "great"}"#);
        assert!(bad.is_err());
    }
}
