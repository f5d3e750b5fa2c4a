//! Type-ahead game name lookup
//!
//! Case-insensitive substring matching on game names. A short table of
//! common abbreviations is expanded before matching, so `gta` finds
//! "Grand Theft Auto V". There is no fuzzy matching.

use crate::model::Game;

/// Queries shorter than this (after trimming) return nothing
pub const MIN_QUERY_LEN: usize = 2;

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("gta", "grand theft auto"),
    ("rdr", "red dead redemption"),
    ("cod", "call of duty"),
    ("csgo", "counter strike"),
    ("cs", "counter strike"),
    ("gow", "god of war"),
    ("tlou", "the last of us"),
    ("botw", "breath of the wild"),
    ("totk", "tears of the kingdom"),
    ("bg3", "baldur's gate 3"),
    ("tw3", "the witcher 3"),
    ("rdr2", "red dead redemption 2"),
    ("gta5", "grand theft auto v"),
    ("gtav", "grand theft auto v"),
];

/// Normalized search term for `query`, or `None` if it is too short
///
/// # Examples
///
/// ```
/// use tagsieve::catalog::lookup::search_term;
///
/// assert_eq!(search_term(" BG3 ").as_deref(), Some("baldur's gate 3"));
/// assert_eq!(search_term("zelda").as_deref(), Some("zelda"));
/// assert_eq!(search_term("z"), None);
/// ```
#[must_use]
pub fn search_term(query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return None;
    }

    let expanded = ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == query)
        .map_or(query.clone(), |(_, long)| (*long).to_string());
    Some(expanded)
}

/// Games whose name contains `query`, at most `limit` of them, in input order
#[must_use]
pub fn lookup<'a, I>(games: I, query: &str, limit: usize) -> Vec<Game>
where
    I: IntoIterator<Item = &'a Game>,
{
    let Some(term) = search_term(query) else {
        return Vec::new();
    };

    games
        .into_iter()
        .filter(|game| game.name.to_lowercase().contains(&term))
        .take(limit)
        .cloned()
        .collect()
}
