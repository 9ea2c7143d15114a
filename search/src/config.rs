use folio_core::types::SearchSettings;

pub use folio_core::types::CaseMatching;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// `Smart` ignores case unless the query contains an uppercase letter.
    /// Applies to both the subsequence and the edit-distance measure.
    pub case_matching: CaseMatching,
    /// Strips diacritics ("é" matches "e") unless the query itself has any.
    pub unicode_normalization: bool,
    /// Largest accepted distance from a perfect match, in `0.0..=1.0`.
    pub threshold: f64,
    /// Queries shorter than this (in chars) never search.
    pub min_query_len: usize,
}

impl SearchConfig {
    /// Smallest similarity an entry needs to be returned.
    pub fn min_similarity(&self) -> f64 {
        1.0 - self.threshold.clamp(0.0, 1.0)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            case_matching: settings.case_matching,
            unicode_normalization: settings.unicode_normalization,
            threshold: settings.threshold,
            min_query_len: settings.min_query_len,
        }
    }
}
