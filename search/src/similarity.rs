//! Field similarity scoring.
//!
//! Two measures are combined and the better one wins:
//! - Subsequence: nucleo's optimal fuzzy matcher. Every query word must match
//!   the field. Each word's score is divided by the score it gets against
//!   itself and scaled by how compact the match is (matched chars over the
//!   span they cover), giving `0.0..=1.0`. Letters scattered across unrelated
//!   words therefore score low.
//! - Edit distance: every query word is compared with the field's words by
//!   Levenshtein distance and the best `1 - distance / longer_len` is kept;
//!   the field value is the mean over query words. Catches swapped or
//!   substituted letters that a subsequence matcher rejects.
//!
//! Both measures fold case and normalize characters under the same rules:
//! nucleo's `Smart` modes, decided per query.

use crate::config::{CaseMatching, SearchConfig};
use nucleo::chars;
use nucleo::pattern::{Atom, AtomKind, CaseMatching as NucleoCaseMatching, Normalization};
use nucleo::{Matcher, Utf32Str, Utf32String};

/// Searchable text of one entry field, prepared once at index build time.
pub(crate) struct FieldText {
    haystack: Utf32String,
    words: Vec<Vec<char>>,
}

impl FieldText {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            haystack: Utf32String::from(text),
            words: split_words(text),
        }
    }
}

struct Needle {
    atom: Atom,
    perfect: u32,
}

/// How characters are compared by the edit-distance measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CharFolding {
    ignore_case: bool,
    normalize: bool,
}

impl CharFolding {
    /// Mirrors nucleo: smart case ignores case unless the query has an
    /// uppercase letter; smart normalization applies unless the query itself
    /// holds a character normalization would change.
    fn for_query(text: &str, config: &SearchConfig) -> Self {
        let ignore_case = match config.case_matching {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !text.chars().any(char::is_uppercase),
        };
        let normalize =
            config.unicode_normalization && text.chars().all(|c| chars::normalize(c) == c);
        Self {
            ignore_case,
            normalize,
        }
    }

    fn apply(self, c: char) -> char {
        let c = if self.normalize { chars::normalize(c) } else { c };
        if self.ignore_case {
            chars::to_lower_case(c)
        } else {
            c
        }
    }

    fn word(self, word: &[char]) -> Vec<char> {
        word.iter().map(|&c| self.apply(c)).collect()
    }
}

/// A query compiled against one search configuration.
pub(crate) struct CompiledQuery {
    needles: Vec<Needle>,
    words: Vec<Vec<char>>,
    folding: CharFolding,
}

impl CompiledQuery {
    pub(crate) fn new(text: &str, config: &SearchConfig, matcher: &mut Matcher) -> Self {
        let case_matching = match config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        let mut buf = Vec::new();
        let needles = text
            .split_whitespace()
            .map(|word| {
                let atom = Atom::new(word, case_matching, normalization, AtomKind::Fuzzy, false);
                let perfect = atom
                    .score(Utf32Str::new(word, &mut buf), matcher)
                    .map(u32::from)
                    .unwrap_or(0)
                    .max(1);
                Needle { atom, perfect }
            })
            .collect();

        let folding = CharFolding::for_query(text, config);
        Self {
            needles,
            words: split_words(text)
                .iter()
                .map(|word| folding.word(word))
                .collect(),
            folding,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Similarity of `field` to this query in `0.0..=1.0`.
    pub(crate) fn similarity(&self, field: &FieldText, matcher: &mut Matcher) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.subsequence_similarity(field, matcher)
            .max(self.edit_similarity(field))
    }

    fn subsequence_similarity(&self, field: &FieldText, matcher: &mut Matcher) -> f64 {
        let mut indices = Vec::new();
        let mut achieved = 0.0;
        let mut perfect = 0u32;
        for needle in &self.needles {
            indices.clear();
            let Some(score) = needle
                .atom
                .indices(field.haystack.slice(..), matcher, &mut indices)
            else {
                return 0.0;
            };
            achieved += f64::from(score) * compactness(&indices);
            perfect += needle.perfect;
        }
        (achieved / f64::from(perfect)).min(1.0)
    }

    fn edit_similarity(&self, field: &FieldText) -> f64 {
        if self.words.is_empty() || field.words.is_empty() {
            return 0.0;
        }
        let field_words: Vec<Vec<char>> = field
            .words
            .iter()
            .map(|word| self.folding.word(word))
            .collect();
        let total: f64 = self
            .words
            .iter()
            .map(|query_word| {
                field_words
                    .iter()
                    .map(|field_word| word_similarity(query_word, field_word))
                    .fold(0.0, f64::max)
            })
            .sum();
        total / self.words.len() as f64
    }
}

/// Matched chars over the span they cover; `1.0` for a gapless match.
fn compactness(indices: &[u32]) -> f64 {
    let (Some(&first), Some(&last)) = (indices.iter().min(), indices.iter().max()) else {
        return 0.0;
    };
    let span = last - first + 1;
    (indices.len() as f64 / f64::from(span)).min(1.0)
}

fn split_words(text: &str) -> Vec<Vec<char>> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.chars().collect())
        .collect()
}

fn word_similarity(a: &[char], b: &[char]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Number of single-character edits needed to turn `a` into `b`.
pub(crate) fn levenshtein_distance(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
