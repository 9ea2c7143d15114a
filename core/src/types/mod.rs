pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, CaseMatching, SearchSettings, ShortcutsConfig, SiteConfig,
};

pub(crate) mod collection;
pub use collection::Collection;

pub(crate) mod entry;
pub use entry::{Entry, EntryData};

pub(crate) mod slug;
pub use slug::{MAX_SLUG_LENGTH, Slug, SlugError};
