use crate::types::{Collection, SlugError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("config error: {0}")]
    Config(#[from] crate::types::AppConfigError),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed content manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid slug: {0}")]
    InvalidSlug(#[from] SlugError),

    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("duplicate slug '{slug}' in collection {collection}")]
    DuplicateSlug { collection: Collection, slug: String },
}
