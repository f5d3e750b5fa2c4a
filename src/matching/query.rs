//! Validated include/exclude tag query
//!
//! A `TagQuery` is the immutable snapshot a search is run against. Construction
//! is the single validation boundary:
//!
//! - Names are trimmed, empty names dropped, duplicates removed (first one wins)
//! - The include set must be non-empty
//! - No name may appear in both sets
//!
//! # Examples
//!
//! ```
//! use tagsieve::matching::TagQuery;
//!
//! let query = TagQuery::parse("Action, Horror", Some("Indie")).unwrap();
//! assert_eq!(query.include(), ["Action", "Horror"]);
//! assert_eq!(query.total_required(), 2);
//! ```

use super::error::MatchError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Immutable include/exclude tag sets for one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagQuery {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl TagQuery {
    /// Build a query from include and exclude tag names
    ///
    /// # Errors
    ///
    /// Returns `MatchError::NoIncludedTags` if no usable include name remains, or
    /// `MatchError::ConflictingTags` if a name is both included and excluded.
    pub fn new<I, S, E, T>(include: I, exclude: E) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let include = normalize(include);
        let exclude = normalize(exclude);

        if include.is_empty() {
            return Err(MatchError::NoIncludedTags);
        }

        let conflicts: Vec<String> = include
            .iter()
            .filter(|name| exclude.contains(name))
            .cloned()
            .collect();
        if !conflicts.is_empty() {
            return Err(MatchError::ConflictingTags(conflicts));
        }

        Ok(Self { include, exclude })
    }

    /// Build a query from comma-separated tag lists
    ///
    /// # Errors
    ///
    /// Same conditions as [`TagQuery::new`].
    pub fn parse(include: &str, exclude: Option<&str>) -> Result<Self, MatchError> {
        Self::new(
            split_tag_list(include),
            exclude.map(split_tag_list).unwrap_or_default(),
        )
    }

    /// Required tag names, in the order given
    #[must_use]
    pub fn include(&self) -> &[String] {
        &self.include
    }

    /// Forbidden tag names, in the order given
    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Number of required tags, used for "matches 3 of 4" labels
    #[must_use]
    pub fn total_required(&self) -> usize {
        self.include.len()
    }

    /// How many required tags an item lacks
    ///
    /// Returns `None` when the item must not appear at all: it carries an
    /// excluded tag, or it matches none of the included tags.
    #[must_use]
    pub fn missing_count(&self, tags: &BTreeSet<String>) -> Option<usize> {
        if self.exclude.iter().any(|name| tags.contains(name)) {
            return None;
        }

        let matched = self
            .include
            .iter()
            .filter(|name| tags.contains(name.as_str()))
            .count();

        (matched > 0).then(|| self.include.len() - matched)
    }
}

/// Split a comma-separated tag list, trimming entries and dropping empties
#[must_use]
pub fn split_tag_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn normalize<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .map(|name| Into::<String>::into(name).trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}
