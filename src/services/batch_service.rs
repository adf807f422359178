use tracing::{info, warn};

use crate::domain::{BatchRequest, DisplayRecord, FeedEntry, Notice, NoticeKind};
use crate::enrich::ArticleEnricher;
use crate::errors::FeedError;
use crate::http::HttpFetcher;
use crate::images::ImageResolver;

/// Drives enrichment and image resolution over an ordered list of feed entries.
pub struct BatchProcessor<H: HttpFetcher> {
    enricher: ArticleEnricher<H>,
    resolver: ImageResolver<H>,
}

impl<H: HttpFetcher> BatchProcessor<H> {
    pub fn new(enricher: ArticleEnricher<H>, resolver: ImageResolver<H>) -> Self {
        Self { enricher, resolver }
    }

    /// Lazily turns `entries` into at most `request.max_count()` records.
    pub fn run_batch<I>(&self, request: &BatchRequest, entries: I) -> Batch<'_, H, I::IntoIter>
    where
        I: IntoIterator<Item = FeedEntry>,
    {
        info!(
            mode = %request.mode().describe(),
            max_count = request.max_count(),
            "Starting batch"
        );

        Batch {
            processor: self,
            entries: entries.into_iter(),
            remaining: request.max_count(),
            produced: 0,
            notices: Vec::new(),
        }
    }

    /// Like [`run_batch`](Self::run_batch), but a failed feed gives an empty
    /// batch carrying a single fatal notice.
    pub fn run_feed(
        &self,
        request: &BatchRequest,
        feed: Result<Vec<FeedEntry>, FeedError>,
    ) -> Batch<'_, H, std::vec::IntoIter<FeedEntry>> {
        match feed {
            Ok(entries) => self.run_batch(request, entries),
            Err(e) => {
                warn!(error = %e, "Feed failed, batch is empty");
                Batch {
                    processor: self,
                    entries: Vec::new().into_iter(),
                    remaining: 0,
                    produced: 0,
                    notices: vec![Notice::new(NoticeKind::FeedFailed, e.to_string())],
                }
            }
        }
    }
}

/// A single pass over a feed. Records come out in feed order; notices
/// accumulate as entries are processed.
pub struct Batch<'a, H: HttpFetcher, I> {
    processor: &'a BatchProcessor<H>,
    entries: I,
    remaining: usize,
    produced: usize,
    notices: Vec<Notice>,
}

impl<'a, H: HttpFetcher, I: Iterator<Item = FeedEntry>> Batch<'a, H, I> {
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain the notices gathered so far, e.g. to show them next to the record just produced.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// True when the feed itself failed.
    pub fn is_failed(&self) -> bool {
        self.notices.iter().any(|n| n.kind.is_fatal())
    }

    /// Run to completion, returning every record and the remaining notices.
    pub fn finish(mut self) -> (Vec<DisplayRecord>, Vec<Notice>) {
        let records: Vec<DisplayRecord> = self.by_ref().collect();
        (records, self.notices)
    }
}

impl<'a, H: HttpFetcher, I: Iterator<Item = FeedEntry>> Iterator for Batch<'a, H, I> {
    type Item = DisplayRecord;

    fn next(&mut self) -> Option<DisplayRecord> {
        while self.remaining > 0 {
            let entry = self.entries.next()?;

            let article = match self.processor.enricher.enrich(&entry) {
                Ok(article) => article,
                Err(e) => {
                    // Skipped entries don't count toward the quota
                    warn!(error = %e, title = %entry.title, "Skipping entry");
                    self.notices.push(Notice::new(
                        NoticeKind::EntrySkipped,
                        format!("Error processing article '{}': {}", entry.title, e),
                    ));
                    continue;
                }
            };

            let resolution = self
                .processor
                .resolver
                .resolve(article.top_image_url.as_deref());
            self.notices.extend(resolution.notices);

            self.remaining -= 1;
            self.produced += 1;

            return Some(DisplayRecord::new(self.produced, article, resolution.visual));
        }

        None
    }
}
