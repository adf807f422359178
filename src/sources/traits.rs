use crate::domain::{FeedEntry, Mode, Topic};
use crate::errors::FeedError;

/// Resolves a request into the ordered entries of a news listing.
#[cfg_attr(test, mockall::automock)]
pub trait FeedSource: Send + Sync {
    fn fetch_trending(&self) -> Result<Vec<FeedEntry>, FeedError>;

    fn fetch_category(&self, topic: Topic) -> Result<Vec<FeedEntry>, FeedError>;

    fn fetch_search(&self, keyword: &str) -> Result<Vec<FeedEntry>, FeedError>;
}

/// Dispatch on the request mode.
pub fn fetch_for_mode<S: FeedSource + ?Sized>(
    source: &S,
    mode: &Mode,
) -> Result<Vec<FeedEntry>, FeedError> {
    match mode {
        Mode::Trending => source.fetch_trending(),
        Mode::Category(topic) => source.fetch_category(*topic),
        Mode::Search(keyword) => source.fetch_search(keyword),
    }
}
