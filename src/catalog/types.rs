//! Key and value encoding for the sled trees
//!
//! Ids are stored as fixed-width big-endian keys so that sled's lexicographic
//! key order is also numeric order; review keys are compound (game, review).
//! Records go through bincode's serde integration with the standard
//! configuration.

use super::error::CatalogError;
use crate::model::{GameId, ReviewId, SourceId, TagId};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Big-endian key for the `games` tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameKey(pub GameId);

impl GameKey {
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.0.to_be_bytes()
    }
}

/// Big-endian key for the `tags` tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagKey(pub TagId);

impl TagKey {
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.0.to_be_bytes()
    }
}

/// Big-endian key for the `sources` tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceKey(pub SourceId);

impl SourceKey {
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.0.to_be_bytes()
    }
}

/// Key for the `reviews` tree: game id, then review id
///
/// The game id comes first so a game's reviews form one contiguous range that
/// can be scanned with the game's [`GameKey`] as prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewKey {
    pub game: GameId,
    pub review: ReviewId,
}

impl ReviewKey {
    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&GameKey(self.game).to_bytes());
        bytes[8..].copy_from_slice(&self.review.0.to_be_bytes());
        bytes
    }
}

/// Encode a record for storage
///
/// # Errors
///
/// Returns `CatalogError::EncodeError` if serialization fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CatalogError> {
    Ok(bincode::serde::encode_to_vec(value, bincode::config::standard())?)
}

/// Decode a stored record
///
/// # Errors
///
/// Returns `CatalogError::DecodeError` if the bytes are not a valid `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CatalogError> {
    let (value, _): (T, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Game, Review, Sentiment, Tag, TagColor};

    #[test]
    fn test_game_key_preserves_numeric_order() {
        let small = GameKey(GameId(2)).to_bytes();
        let large = GameKey(GameId(256)).to_bytes();
        assert!(small < large);
    }

    #[test]
    fn test_review_key_groups_by_game() {
        let key = ReviewKey {
            game: GameId(7),
            review: ReviewId(300),
        }
        .to_bytes();
        assert!(key.starts_with(&GameKey(GameId(7)).to_bytes()));

        let earlier = ReviewKey {
            game: GameId(7),
            review: ReviewId(2),
        }
        .to_bytes();
        let next_game = ReviewKey {
            game: GameId(8),
            review: ReviewId(1),
        }
        .to_bytes();
        assert!(earlier < key);
        assert!(key < next_game);
    }

    #[test]
    fn test_game_record_survives_storage_encoding() {
        let mut game = Game::new(5, "Inside").with_tags(["Indie", "Puzzle"]);
        game.release_date = chrono::NaiveDate::from_ymd_opt(2016, 6, 29);
        game.platforms = vec!["PC".into(), "Switch".into()];

        let decoded: Game = decode(&encode(&game).unwrap()).unwrap();
        assert_eq!(decoded, game);
    }

    #[test]
    fn test_tag_record_with_description() {
        let mut tag = Tag::new(1, "Horror", TagColor::Red);
        tag.description = Some("Scary".into());
        let decoded: Tag = decode(&encode(&tag).unwrap()).unwrap();
        assert_eq!(decoded, tag);
    }

    #[test]
    fn test_review_record_with_source() {
        let mut review = Review::new(3, 5);
        review.source_id = Some(SourceId(2));
        review.sentiment = Some(Sentiment::Negative);
        review.published_at = chrono::NaiveDate::from_ymd_opt(2021, 3, 1);

        let decoded: Review = decode(&encode(&review).unwrap()).unwrap();
        assert_eq!(decoded, review);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode::<Game>(&[0xff]).is_err());
    }
}
