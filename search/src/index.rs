//! Fuzzy index over slug, title, summary and tags of every entry.

use crate::config::SearchConfig;
use crate::query::SearchQuery;
use crate::results::{MatchedField, SearchHit, SearchResults};
use crate::similarity::{CompiledQuery, FieldText};
use folio_core::ContentSet;
use folio_core::types::Entry;
use nucleo::{Config as NucleoConfig, Matcher};
use std::sync::Arc;

struct IndexedEntry {
    fields: Vec<(MatchedField, FieldText)>,
}

/// Built once per content set. Searching never mutates the index.
pub struct FuzzyIndex {
    entries: Arc<[Entry]>,
    indexed: Vec<IndexedEntry>,
    config: SearchConfig,
}

impl FuzzyIndex {
    pub fn new(content: &ContentSet, config: SearchConfig) -> Self {
        let indexed = content
            .iter()
            .map(|entry| {
                let mut fields = vec![
                    (MatchedField::Slug, FieldText::new(entry.slug.as_str())),
                    (MatchedField::Title, FieldText::new(&entry.data.title)),
                    (MatchedField::Summary, FieldText::new(&entry.data.summary)),
                ];
                fields.extend(
                    entry
                        .data
                        .tags
                        .iter()
                        .enumerate()
                        .map(|(i, tag)| (MatchedField::Tag(i), FieldText::new(tag))),
                );
                IndexedEntry { fields }
            })
            .collect();

        tracing::debug!(
            entries = content.len(),
            threshold = config.threshold,
            "built fuzzy search index"
        );

        Self {
            entries: content.shared(),
            indexed,
            config,
        }
    }

    /// Returns every entry whose best field clears the threshold, best first.
    ///
    /// Queries shorter than `min_query_len` return idle results. Equal
    /// similarities keep content order.
    pub fn search(&self, text: &str) -> SearchResults {
        let query = SearchQuery::new(text, self.config.min_query_len);
        if query.is_pending() {
            return SearchResults::idle(query, Arc::clone(&self.entries));
        }

        let mut matcher = Matcher::new(NucleoConfig::DEFAULT);
        let compiled = CompiledQuery::new(text, &self.config, &mut matcher);
        let min_similarity = self.config.min_similarity();

        let mut hits: Vec<SearchHit> = Vec::new();
        if !compiled.is_empty() {
            for (index, entry) in self.indexed.iter().enumerate() {
                let mut best: Option<(MatchedField, f64)> = None;
                for (field, text) in &entry.fields {
                    let similarity = compiled.similarity(text, &mut matcher);
                    if best.is_none_or(|(_, s)| similarity > s) {
                        best = Some((*field, similarity));
                    }
                }
                let Some((field, similarity)) = best else {
                    continue;
                };
                if similarity > 0.0 && similarity >= min_similarity {
                    hits.push(SearchHit {
                        index,
                        similarity,
                        field,
                    });
                }
            }
        }

        // Stable sort: ties keep content order.
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        tracing::debug!(query = text, matches = hits.len(), "search");

        SearchResults {
            query,
            hits,
            entries: Arc::clone(&self.entries),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
