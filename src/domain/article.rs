use serde::{Deserialize, Serialize};

use super::FeedEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub link: String,
    pub pub_date: String,
    pub source_url: String,
    pub synopsis: String,
    pub top_image_url: Option<String>,
}

impl EnrichedArticle {
    /// Copies the entry metadata; synopsis and image come from the downloaded page.
    pub fn from_entry(entry: &FeedEntry, synopsis: String, top_image_url: Option<String>) -> Self {
        Self {
            title: entry.title.clone(),
            link: entry.link.clone(),
            pub_date: entry.pub_date.clone(),
            source_url: entry.source_url.clone(),
            synopsis,
            top_image_url,
        }
    }
}
