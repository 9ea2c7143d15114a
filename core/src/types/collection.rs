use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content collection an entry belongs to. Its name is the first URL segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Projects,
    Resume,
    Certifications,
    Legal,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Blog,
        Collection::Projects,
        Collection::Resume,
        Collection::Certifications,
        Collection::Legal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Projects => "projects",
            Collection::Resume => "resume",
            Collection::Certifications => "certifications",
            Collection::Legal => "legal",
        }
    }

    /// Collections whose entries always carry a tag list.
    pub fn is_taggable(&self) -> bool {
        matches!(self, Collection::Blog | Collection::Projects)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| ContentError::UnknownCollection(s.to_string()))
    }
}
