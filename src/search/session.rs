//! Search session: selection, ticketed searches and the current result
//!
//! A search is split in two phases so a slow catalog never blocks the
//! selection:
//!
//! 1. [`SearchSession::begin_search`] freezes the current include/exclude
//!    sets into a [`SearchTicket`] with a fresh sequence number
//! 2. [`SearchSession::complete`] hands back the catalog outcome for a ticket
//!
//! Only the newest issued ticket may replace the current result; answers to
//! older tickets are reported as [`Completion::Stale`] and dropped. Toggling
//! tags between the two phases never changes the ticket's query.

use crate::catalog::{CatalogError, TagCatalog};
use crate::matching::{MatchError, MatchResult, TagQuery};
use crate::model::{Tag, TagId};
use crate::search::SearchError;
use crate::selection::{Selection, SelectionState};
use tracing::{debug, instrument, warn};

/// Frozen query for one outstanding search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: TagQuery,
}

impl SearchTicket {
    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }

    #[must_use]
    pub const fn query(&self) -> &TagQuery {
        &self.query
    }
}

/// What happened to a completed ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The ticket was current and its outcome was applied
    Applied,
    /// A newer ticket was issued (or the session cleared); outcome dropped
    Stale,
}

/// Single-writer owner of a selection and its latest result
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    selection: Selection,
    issued: u64,
    result: Option<MatchResult>,
}

impl SearchSession {
    /// Start a session over a fetched tag vocabulary
    #[must_use]
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            selection: Selection::new(tags),
            issued: 0,
            result: None,
        }
    }

    /// Fetch the vocabulary from `catalog` and start a session
    ///
    /// # Errors
    ///
    /// Returns `SearchError::CatalogUnavailable` if the tags cannot be listed.
    pub fn load<C: TagCatalog + ?Sized>(catalog: &C) -> Result<Self, SearchError> {
        let tags = catalog.list_tags()?;
        debug!(tags = tags.len(), "loaded tag vocabulary");
        Ok(Self::new(&tags))
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cycle a tag's state; does not search
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Selection` for an unknown tag.
    pub fn toggle(&mut self, id: TagId) -> Result<SelectionState, SearchError> {
        Ok(self.selection.toggle(id)?)
    }

    /// Set a tag's state directly; does not search
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Selection` for an unknown tag.
    pub fn set(&mut self, id: TagId, state: SelectionState) -> Result<(), SearchError> {
        Ok(self.selection.set(id, state)?)
    }

    /// Pre-seed a selection by tag names, e.g. from a deep link
    ///
    /// Names are resolved before anything changes, so an unknown name leaves
    /// the selection untouched.
    ///
    /// # Errors
    ///
    /// - `SearchError::Selection` for the first unknown name
    /// - `SearchError::InvalidQuery` with `MatchError::ConflictingTags` when a
    ///   tag is named on both sides
    pub fn seed<S: AsRef<str>>(&mut self, include: &[S], exclude: &[S]) -> Result<(), SearchError> {
        let include_ids = resolve_all(&self.selection, include)?;
        let exclude_ids = resolve_all(&self.selection, exclude)?;

        let mut conflicts: Vec<String> = include
            .iter()
            .zip(&include_ids)
            .filter(|(_, id)| exclude_ids.contains(*id))
            .map(|(name, _)| name.as_ref().to_string())
            .collect();
        conflicts.dedup();
        if !conflicts.is_empty() {
            warn!(tags = ?conflicts, "seed names tags on both sides");
            return Err(SearchError::InvalidQuery(MatchError::ConflictingTags(conflicts)));
        }

        for id in include_ids {
            self.selection.set(id, SelectionState::Include)?;
        }
        for id in exclude_ids {
            self.selection.set(id, SelectionState::Exclude)?;
        }
        Ok(())
    }

    /// Reset the selection and drop the current result
    ///
    /// Outstanding tickets become stale.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.issued += 1;
        self.result = None;
    }

    /// The most recently applied result, if any
    #[must_use]
    pub const fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Freeze the current selection into a ticket
    ///
    /// # Errors
    ///
    /// Returns `SearchError::NoIncludedTags` if nothing is included. No
    /// ticket is issued in that case and outstanding tickets stay current.
    pub fn begin_search(&mut self) -> Result<SearchTicket, SearchError> {
        let query = self.selection.query_sets().into_query()?;
        self.issued += 1;
        debug!(seq = self.issued, include = ?query.include(), exclude = ?query.exclude(), "issued search");
        Ok(SearchTicket {
            seq: self.issued,
            query,
        })
    }

    /// Deliver the catalog outcome for a ticket
    ///
    /// A current ticket's successful result replaces the stored one. A current
    /// ticket's failure is returned as `CatalogUnavailable` and the stored result
    /// is left as it was. Outcomes for stale tickets are dropped either way.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::CatalogUnavailable` when a current ticket failed.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<MatchResult, CatalogError>,
    ) -> Result<Completion, SearchError> {
        if ticket.seq != self.issued {
            debug!(seq = ticket.seq, latest = self.issued, "dropping stale search response");
            return Ok(Completion::Stale);
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Ok(Completion::Applied)
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "search failed; keeping previous result");
                Err(SearchError::CatalogUnavailable(err))
            }
        }
    }

    /// Search the catalog with the current selection
    ///
    /// # Errors
    ///
    /// - `NoIncludedTags` if nothing is included (the catalog is not called)
    /// - `InvalidQuery` if the selection cannot form a valid query
    /// - `CatalogUnavailable` if the catalog fails (previous result kept)
    #[instrument(skip_all)]
    pub fn search<C: TagCatalog + ?Sized>(&mut self, catalog: &C) -> Result<&MatchResult, SearchError> {
        let ticket = self.begin_search()?;
        let outcome = catalog.search_by_tags(ticket.query());
        self.complete(&ticket, outcome)?;
        self.result
            .as_ref()
            .ok_or_else(|| SearchError::CatalogUnavailable(CatalogError::Unavailable("no result".into())))
    }
}

fn resolve_all<S: AsRef<str>>(selection: &Selection, names: &[S]) -> Result<Vec<TagId>, SearchError> {
    names
        .iter()
        .map(|name| selection.resolve(name.as_ref()).map_err(SearchError::from))
        .collect()
}
