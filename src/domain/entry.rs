use serde::{Deserialize, Serialize};
use url::Url;

/// One item of a news listing, as handed over by a feed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    /// Kept exactly as the feed formatted it.
    pub pub_date: String,
    pub source_url: String,
}

impl FeedEntry {
    pub fn new(title: String, link: String) -> Self {
        let source_url = Self::host_of(&link).unwrap_or_default();

        Self {
            title,
            link,
            pub_date: String::new(),
            source_url,
        }
    }

    pub fn with_pub_date(mut self, pub_date: impl Into<String>) -> Self {
        self.pub_date = pub_date.into();
        self
    }

    /// Overrides the source hint derived from the link. Blank hints are ignored.
    pub fn with_source_url(mut self, source_url: Option<String>) -> Self {
        if let Some(source_url) = source_url.filter(|s| !s.trim().is_empty()) {
            self.source_url = source_url;
        }
        self
    }

    fn host_of(link: &str) -> Option<String> {
        let parsed = Url::parse(link).ok()?;
        Some(format!("{}://{}", parsed.scheme(), parsed.host_str()?))
    }
}
