//! Tag selection state machine
//!
//! A [`Selection`] holds one [`SelectionState`] per tag of a fixed vocabulary
//! and derives the include/exclude name lists a search runs against. It is
//! the only writer of that state; callers mutate it through [`Selection::toggle`],
//! [`Selection::set`] and [`Selection::clear`].
//!
//! Because each tag has exactly one state, a tag can never be included and
//! excluded at the same time.
//!
//! # Examples
//!
//! ```
//! use tagsieve::selection::{Selection, SelectionState};
//! use tagsieve::{Tag, TagColor, TagId};
//!
//! let tags = vec![
//!     Tag::new(1, "Action", TagColor::Green),
//!     Tag::new(3, "Horror", TagColor::Red),
//! ];
//! let mut selection = Selection::new(&tags);
//!
//! selection.toggle(TagId(1)).unwrap();
//! selection.set(TagId(3), SelectionState::Exclude).unwrap();
//!
//! let sets = selection.query_sets();
//! assert_eq!(sets.include, ["Action"]);
//! assert_eq!(sets.exclude, ["Horror"]);
//! ```

pub mod error;
pub mod state;

pub use error::SelectionError;
pub use state::SelectionState;

use crate::matching::{MatchError, TagQuery};
use crate::model::{Tag, TagId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Include/exclude tag names derived from a selection, in tag-id order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySets {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl QuerySets {
    /// True when at least one tag is included
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        !self.include.is_empty()
    }

    /// Freeze the sets into a validated query
    ///
    /// # Errors
    ///
    /// Returns `MatchError::NoIncludedTags` when nothing is included.
    pub fn into_query(self) -> Result<TagQuery, MatchError> {
        TagQuery::new(self.include, self.exclude)
    }
}

/// Three-state selection over a fixed tag vocabulary
#[derive(Debug, Clone, Default)]
pub struct Selection {
    vocabulary: BTreeMap<TagId, String>,
    names: HashMap<String, TagId>,
    // Only selected tags are stored; absence means `Unselected`.
    states: BTreeMap<TagId, SelectionState>,
}

impl Selection {
    /// Create an empty selection over `tags`
    #[must_use]
    pub fn new(tags: &[Tag]) -> Self {
        let vocabulary: BTreeMap<TagId, String> =
            tags.iter().map(|tag| (tag.id, tag.name.clone())).collect();
        let names = vocabulary
            .iter()
            .map(|(id, name)| (name.clone(), *id))
            .collect();

        Self {
            vocabulary,
            names,
            states: BTreeMap::new(),
        }
    }

    /// Advance a tag to its next state and return the new state
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownTag` if `id` is not in the vocabulary;
    /// the selection is unchanged.
    pub fn toggle(&mut self, id: TagId) -> Result<SelectionState, SelectionError> {
        let next = self.known(id)?.next();
        self.store(id, next);
        debug!(tag = %id, state = %next, "toggled tag");
        Ok(next)
    }

    /// Put a tag directly into `state`
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownTag` if `id` is not in the vocabulary.
    pub fn set(&mut self, id: TagId, state: SelectionState) -> Result<(), SelectionError> {
        self.known(id)?;
        self.store(id, state);
        Ok(())
    }

    /// Look up a tag id by exact name
    #[must_use]
    pub fn tag_id(&self, name: &str) -> Option<TagId> {
        self.names.get(name).copied()
    }

    /// Look up a tag id by name, reporting unknown names as an error
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownTagName` if no tag has this name.
    pub fn resolve(&self, name: &str) -> Result<TagId, SelectionError> {
        self.tag_id(name).ok_or_else(|| {
            warn!(tag = name, "unknown tag name");
            SelectionError::UnknownTagName(name.to_string())
        })
    }

    /// Current state of a tag; unknown ids read as `Unselected`
    #[must_use]
    pub fn state(&self, id: TagId) -> SelectionState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Reset every tag to `Unselected`
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Number of tags that are included or excluded
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.states.len()
    }

    /// Derive the include/exclude name lists
    #[must_use]
    pub fn query_sets(&self) -> QuerySets {
        let mut sets = QuerySets::default();
        for (id, state) in &self.states {
            let Some(name) = self.vocabulary.get(id) else {
                continue;
            };
            match state {
                SelectionState::Include => sets.include.push(name.clone()),
                SelectionState::Exclude => sets.exclude.push(name.clone()),
                SelectionState::Unselected => {}
            }
        }
        sets
    }

    /// Every tag with its current state, in tag-id order
    pub fn iter(&self) -> impl Iterator<Item = (TagId, &str, SelectionState)> {
        self.vocabulary
            .iter()
            .map(|(id, name)| (*id, name.as_str(), self.state(*id)))
    }

    fn known(&self, id: TagId) -> Result<SelectionState, SelectionError> {
        if self.vocabulary.contains_key(&id) {
            Ok(self.state(id))
        } else {
            warn!(tag = %id, "selection referenced unknown tag id");
            Err(SelectionError::UnknownTag(id))
        }
    }

    fn store(&mut self, id: TagId, state: SelectionState) {
        if state.is_selected() {
            self.states.insert(id, state);
        } else {
            self.states.remove(&id);
        }
    }
}
