//! Search query types.

/// Query text after the minimum length gate.
///
/// `Pending` keeps "nothing typed yet" apart from "typed, but no matches".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Shorter than the configured minimum; never searched.
    Pending(String),
    /// Fuzzy matching search.
    Fuzzy(String),
}

impl SearchQuery {
    /// Classifies `text` by its length in chars. The text is kept verbatim.
    pub fn new(text: &str, min_len: usize) -> Self {
        if text.chars().count() < min_len {
            SearchQuery::Pending(text.to_string())
        } else {
            SearchQuery::Fuzzy(text.to_string())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            SearchQuery::Pending(text) | SearchQuery::Fuzzy(text) => text,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SearchQuery::Pending(_))
    }
}
