use tracing::{debug, instrument};

use crate::domain::{EnrichedArticle, FeedEntry};
use crate::enrich::parser;
use crate::enrich::summarizer::Summarizer;
use crate::errors::EnrichmentError;
use crate::http::HttpFetcher;

/// Downloads the article behind a feed entry and derives its synopsis and top image.
pub struct ArticleEnricher<H: HttpFetcher> {
    fetcher: H,
    summarizer: Summarizer,
}

impl<H: HttpFetcher> ArticleEnricher<H> {
    pub fn new(fetcher: H, summarizer: Summarizer) -> Self {
        Self {
            fetcher,
            summarizer,
        }
    }

    #[instrument(level = "debug", skip_all, fields(url = %entry.link))]
    pub fn enrich(&self, entry: &FeedEntry) -> Result<EnrichedArticle, EnrichmentError> {
        if entry.link.trim().is_empty() {
            return Err(EnrichmentError::DownloadFailed {
                url: String::new(),
                reason: format!("entry '{}' has no link", entry.title),
            });
        }

        let resource = self
            .fetcher
            .get(&entry.link)
            .map_err(|e| EnrichmentError::DownloadFailed {
                url: entry.link.clone(),
                reason: e.to_string(),
            })?;

        let parsed = parser::parse_resource(&resource, &entry.link).map_err(|reason| {
            EnrichmentError::ParseFailed {
                url: entry.link.clone(),
                reason,
            }
        })?;

        let title = parsed.title.as_deref().unwrap_or(&entry.title);
        let synopsis = self.summarizer.summarize(title, &parsed.text);

        debug!(
            synopsis_len = synopsis.len(),
            has_image = parsed.top_image.is_some(),
            "Enriched article"
        );

        Ok(EnrichedArticle::from_entry(entry, synopsis, parsed.top_image))
    }
}
