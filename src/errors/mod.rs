use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // User input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Feed errors
    #[error(transparent)]
    Feed(#[from] FeedError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NewsResult<T> = Result<T, NewsError>;

/// Failure to obtain the feed itself. Fatal to a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed unreachable: {0}")]
    Unreachable(String),

    #[error("Feed malformed: {0}")]
    Malformed(String),
}

/// Failure to turn one feed entry into an article. Only skips that entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("Article download failed for {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Article parsing failed for {url}: {reason}")]
    ParseFailed { url: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Error loading image {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Error decoding image {source_name}: {reason}")]
    DecodeFailed { source_name: String, reason: String },

    #[error("Placeholder image not available at {path}: {reason}")]
    PlaceholderMissing { path: String, reason: String },
}

/// Errors raised by the HTTP seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_error_converts_into_news_error() {
        let err: NewsError = FeedError::Unreachable("dns failure".to_string()).into();
        assert_eq!(err.to_string(), "Feed unreachable: dns failure");
    }

    #[test]
    fn test_enrichment_error_mentions_url() {
        let err = EnrichmentError::ParseFailed {
            url: "https://example.com/a".to_string(),
            reason: "empty document".to_string(),
        };
        assert!(err.to_string().contains("https://example.com/a"));
        assert!(err.to_string().contains("empty document"));
    }
}
