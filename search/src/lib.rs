//! Folio fuzzy search library.
//!
//! Provides typo-tolerant search over slug, title, summary and tags of a
//! content set, plus the state behind the search overlay.
//!
//! # Design
//!
//! - The index is built once per content set and never mutated.
//! - Searching is synchronous; results are ranked best first and equal
//!   scores keep content order.
//! - Queries shorter than the configured minimum return idle results, which
//!   are distinct from "no matches".
//!
//! # API
//!
//! - `FuzzyIndex::search()`: Ranked results for a query
//! - `SearchPalette`: Overlay state driven by key events and input changes
//! - `GlobalShortcuts`, `GLOBAL_LISTENER`: Window-level bindings and their
//!   single registration

mod config;
mod index;
mod palette;
mod query;
mod results;
mod selection;
mod shortcuts;
mod similarity;

pub use config::{CaseMatching, SearchConfig};
pub use index::FuzzyIndex;
pub use palette::{InputOutcome, SearchPalette};
pub use query::SearchQuery;
pub use results::{MatchedField, SearchHit, SearchResults};
pub use selection::{Direction, Selection};
pub use shortcuts::{
    GLOBAL_LISTENER, GlobalShortcuts, KeyInput, ListenerGuard, ListenerSlot, Modifiers,
    OverlayCommand, Shortcut, ShortcutError,
};

#[cfg(test)]
mod tests;
