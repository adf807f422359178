use std::vec;

use tracing::info;

use crate::domain::{BatchRequest, FeedEntry};
use crate::http::HttpFetcher;
use crate::services::batch_service::{Batch, BatchProcessor};
use crate::sources::{fetch_for_mode, FeedSource};

/// Fetches the listing for a request and hands it to the batch processor.
pub struct NewsService<S: FeedSource, H: HttpFetcher> {
    source: S,
    processor: BatchProcessor<H>,
}

impl<S: FeedSource, H: HttpFetcher> NewsService<S, H> {
    pub fn new(source: S, processor: BatchProcessor<H>) -> Self {
        Self { source, processor }
    }

    /// Feed failures are not returned as errors: they show up as an empty
    /// batch with a fatal notice.
    pub fn digest(&self, request: &BatchRequest) -> Batch<'_, H, vec::IntoIter<FeedEntry>> {
        let feed = fetch_for_mode(&self.source, request.mode());

        if let Ok(entries) = &feed {
            info!(
                count = entries.len(),
                mode = %request.mode().describe(),
                "Feed entries received"
            );
        }

        self.processor.run_feed(request, feed)
    }
}
