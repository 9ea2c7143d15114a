mod app;

pub use app::{
    AppConfig, AppConfigError, CaseMatching, SearchSettings, ShortcutsConfig, SiteConfig,
};
