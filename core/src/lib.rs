//! Content model and tag filtering for the folio site.
//!
//! Entries are produced once by the content pipeline and never mutated here.
//! Everything in this crate derives read-only views over a [`ContentSet`].

pub mod content;
pub mod error;
pub mod filter;
pub mod types;

pub use content::ContentSet;
pub use error::{ContentError, Error, Result};
pub use filter::TagFilter;
