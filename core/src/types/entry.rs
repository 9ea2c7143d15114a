use crate::types::{Collection, Slug};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One addressable piece of site content: a post, project, résumé item, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub slug: Slug,
    pub collection: Collection,
    pub data: EntryData,
}

/// Frontmatter of an entry.
///
/// Fields the site does not interpret (`version`, `demoUrl`, `repoUrl`, ...)
/// are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// Site-relative URL of the entry's page: `/{collection}/{slug}/`.
    pub fn url(&self) -> String {
        format!("/{}/{}/", self.collection, self.slug)
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn tags(&self) -> &[String] {
        &self.data.tags
    }

    /// True if any tag equals `tag` ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.data.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}
