//! Tag filter over a content set.
//!
//! Design:
//! - The selection behaves like a set of exact strings, kept in selection
//!   order so the presentation layer can render removable chips.
//! - Matching against entry tags ignores case; every selected tag must match
//!   (AND). An empty selection shows everything.
//! - The visible list is recomputed eagerly on every mutation and stored as
//!   indexes into the shared entry slice.

use crate::content::ContentSet;
use crate::types::Entry;
use std::sync::Arc;

pub struct TagFilter {
    content: ContentSet,
    selected: Vec<String>,
    visible: Vec<usize>,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

/// Create operations.
impl TagFilter {
    pub fn new(content: ContentSet) -> Self {
        let visible = (0..content.len()).collect();
        Self {
            content,
            selected: Vec::new(),
            visible,
            notify: None,
        }
    }

    /// Registers a callback invoked after every change to the visible list.
    pub fn on_change(&mut self, notify: Arc<dyn Fn() + Send + Sync>) {
        self.notify = Some(notify);
    }
}

/// Mutation operations.
impl TagFilter {
    /// Adds `tag` to the selection if absent, removes it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == tag) {
            self.selected.remove(pos);
        } else {
            self.selected.push(tag.to_string());
        }
        self.recompute();
    }

    pub fn clear_all(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        let selected = &self.selected;
        self.visible = self
            .content
            .iter()
            .enumerate()
            .filter(|(_, entry)| selected.iter().all(|tag| entry.has_tag(tag)))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            selected = ?self.selected,
            visible = self.visible.len(),
            total = self.content.len(),
            "tag filter recomputed"
        );

        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

/// Query operations.
impl TagFilter {
    /// Entries matching every selected tag, in their original order.
    pub fn visible_entries(&self) -> impl ExactSizeIterator<Item = &Entry> + '_ {
        let entries = self.content.entries();
        self.visible.iter().map(move |&i| &entries[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn total_len(&self) -> usize {
        self.content.len()
    }

    /// Selected tags in the order they were selected.
    pub fn selected_tags(&self) -> &[String] {
        &self.selected
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    pub fn is_filtered(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }
}

#[cfg(test)]
mod tests;
