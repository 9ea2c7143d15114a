//! Immutable set of content entries handed over by the content pipeline.
//!
//! Design:
//! - Entries live in one shared `Arc<[Entry]>`; every view (filter, search
//!   index, derived sets) holds a cheap clone of it.
//! - Derived sets (`published`, `in_collection`, ...) allocate a new slice and
//!   never touch the original.
//! - Slugs are unique within a collection; the same slug may appear in two
//!   different collections.

use crate::error::ContentError;
use crate::types::{Collection, Entry};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ContentSet {
    entries: Arc<[Entry]>,
}

/// Create operations.
impl ContentSet {
    /// Wraps entries in their pipeline order, rejecting duplicate slugs.
    pub fn new(entries: Vec<Entry>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert((entry.collection, entry.slug.as_str())) {
                return Err(ContentError::DuplicateSlug {
                    collection: entry.collection,
                    slug: entry.slug.to_string(),
                });
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Parses a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        let set = Self::new(entries)?;
        tracing::debug!(entries = set.len(), "loaded content set");
        Ok(set)
    }

    /// Reads a JSON content manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn derived(entries: Vec<Entry>) -> Self {
        // Subsets of a valid set keep unique slugs.
        Self {
            entries: entries.into(),
        }
    }
}

/// Access operations.
impl ContentSet {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns a shared handle to the underlying entries.
    pub fn shared(&self) -> Arc<[Entry]> {
        Arc::clone(&self.entries)
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by collection and slug.
    pub fn find(&self, collection: Collection, slug: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.collection == collection && e.slug.as_str() == slug)
    }

    /// Distinct tags across all entries, sorted.
    pub fn tags(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| e.data.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Derived views.
impl ContentSet {
    /// Drops draft entries.
    pub fn published(&self) -> Self {
        self.filtered(|e| !e.data.draft)
    }

    pub fn in_collection(&self, collection: Collection) -> Self {
        self.filtered(|e| e.collection == collection)
    }

    pub fn in_collections(&self, collections: &[Collection]) -> Self {
        self.filtered(|e| collections.contains(&e.collection))
    }

    /// Entries of collections that carry tags; the set a tag filter runs over.
    pub fn taggable(&self) -> Self {
        self.filtered(|e| e.collection.is_taggable())
    }

    /// Newest first. Entries with the same date keep their relative order.
    pub fn sorted_by_date_desc(&self) -> Self {
        let mut entries = self.entries.to_vec();
        entries.sort_by(|a, b| b.data.date.cmp(&a.data.date));
        Self::derived(entries)
    }

    fn filtered(&self, keep: impl Fn(&Entry) -> bool) -> Self {
        Self::derived(self.entries.iter().filter(|&e| keep(e)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a ContentSet {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
