//! Search results types.

use crate::query::SearchQuery;
use folio_core::types::Entry;
use std::sync::Arc;

/// Which part of an entry produced its best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Slug,
    Title,
    Summary,
    /// Index into the entry's tag list.
    Tag(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Position of the entry in the indexed content set.
    pub index: usize,
    /// `0.0..=1.0`, higher is better.
    pub similarity: f64,
    pub field: MatchedField,
}

/// Ranked matches for one query, best first.
///
/// Owns a handle to the indexed entries so it can outlive the index borrow.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub(crate) query: SearchQuery,
    pub(crate) hits: Vec<SearchHit>,
    pub(crate) entries: Arc<[Entry]>,
}

impl SearchResults {
    /// Results for a query that was too short to run.
    pub(crate) fn idle(query: SearchQuery, entries: Arc<[Entry]>) -> Self {
        Self {
            query,
            hits: Vec::new(),
            entries,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// True when no search ran because the query was too short.
    pub fn is_idle(&self) -> bool {
        self.query.is_pending()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Iterates over matched entries in rank order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        self.hits.iter().map(|hit| &self.entries[hit.index])
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn get(&self, rank: usize) -> Option<&Entry> {
        self.hits.get(rank).map(|hit| &self.entries[hit.index])
    }

    /// Line shown above the result list; `None` while idle.
    pub fn status_line(&self) -> Option<String> {
        if self.is_idle() {
            return None;
        }
        Some(if self.hits.is_empty() {
            format!("No results found for \"{}\"", self.query.text())
        } else {
            format!("Found {} results", self.hits.len())
        })
    }
}
