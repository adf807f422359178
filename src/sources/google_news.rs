use feed_rs::parser;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, info, warn};

use crate::domain::{FeedEntry, Topic};
use crate::errors::FeedError;
use crate::http::HttpFetcher;
use crate::sources::traits::FeedSource;

pub const DEFAULT_BASE_URL: &str = "https://news.google.com";

/// Google News RSS listings: top stories, headline sections and keyword search.
pub struct GoogleNewsSource<H: HttpFetcher> {
    fetcher: H,
    base_url: String,
}

impl<H: HttpFetcher> GoogleNewsSource<H> {
    pub fn new(fetcher: H, base_url: &str) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn trending_url(&self) -> String {
        format!("{}/news/rss", self.base_url)
    }

    pub fn category_url(&self, topic: Topic) -> String {
        format!(
            "{}/news/rss/headlines/section/topic/{}",
            self.base_url,
            topic.as_str()
        )
    }

    /// Spaces are dropped from the keyword before it is encoded.
    pub fn search_url(&self, keyword: &str) -> String {
        let compact: String = keyword.split_whitespace().collect();
        format!(
            "{}/rss/search?q={}",
            self.base_url,
            urlencoding::encode(&compact)
        )
    }

    fn fetch_and_parse(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
        info!(%url, "Fetching news feed");

        let resource = self
            .fetcher
            .get(url)
            .map_err(|e| FeedError::Unreachable(format!("{}: {}", url, e)))?;

        let entries = Self::entries_from_bytes(&resource.bytes)?;
        info!(count = entries.len(), %url, "Parsed news feed");

        Ok(entries)
    }

    fn entries_from_bytes(bytes: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
        let parsed = parser::parse(bytes).map_err(|e| FeedError::Malformed(e.to_string()))?;

        let mut hints = source_hints(bytes);
        if hints.len() != parsed.entries.len() {
            warn!(
                items = hints.len(),
                entries = parsed.entries.len(),
                "Source hints do not line up with feed entries, using link hosts"
            );
            hints.clear();
        }
        let mut hints = hints.into_iter();

        let entries = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let link = entry
                    .links
                    .into_iter()
                    .next()
                    .map(|l| l.href)
                    .unwrap_or_default();

                if link.is_empty() {
                    debug!(%title, "Feed entry has no link");
                }

                let pub_date = entry
                    .published
                    .or(entry.updated)
                    .map(|dt| dt.to_rfc2822())
                    .unwrap_or_default();

                FeedEntry::new(title, link)
                    .with_pub_date(pub_date)
                    .with_source_url(hints.next().flatten())
            })
            .collect();

        Ok(entries)
    }
}

/// The `<source url="...">` of every `<item>`, in document order.
///
/// Google News links all point back at news.google.com; the publisher is only
/// named by this element, which feed-rs drops. A scan error ends the scan
/// early, and the caller then ignores the hints.
fn source_hints(bytes: &[u8]) -> Vec<Option<String>> {
    let xml = String::from_utf8_lossy(bytes);
    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut hints = Vec::new();
    let mut in_item = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"item" => {
                in_item = true;
                hints.push(None);
            }
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if in_item && e.local_name().as_ref() == b"source" =>
            {
                if let Some(slot) = hints.last_mut() {
                    *slot = source_url_attribute(&e);
                }
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"item" => in_item = false,
            Ok(Event::Eof) => break,
            Err(e) => {
                debug!(error = %e, "Stopped scanning feed for source hints");
                break;
            }
            _ => {}
        }
    }

    hints
}

fn source_url_attribute(element: &BytesStart<'_>) -> Option<String> {
    let attr = element.try_get_attribute("url").ok()??;
    let value = attr.unescape_value().ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl<H: HttpFetcher> FeedSource for GoogleNewsSource<H> {
    fn fetch_trending(&self) -> Result<Vec<FeedEntry>, FeedError> {
        self.fetch_and_parse(&self.trending_url())
    }

    fn fetch_category(&self, topic: Topic) -> Result<Vec<FeedEntry>, FeedError> {
        self.fetch_and_parse(&self.category_url(topic))
    }

    fn fetch_search(&self, keyword: &str) -> Result<Vec<FeedEntry>, FeedError> {
        self.fetch_and_parse(&self.search_url(keyword))
    }
}
