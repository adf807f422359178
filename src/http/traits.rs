use crate::errors::FetchError;

/// Body and content type of a successful (2xx) GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResource {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl FetchedResource {
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.map(str::to_string),
        }
    }

    /// Media type without parameters, lowercased (`text/html; charset=utf-8` -> `text/html`).
    pub fn media_type(&self) -> Option<String> {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait HttpFetcher: Send + Sync {
    /// Blocking GET. Non-2xx statuses are errors.
    fn get(&self, url: &str) -> Result<FetchedResource, FetchError>;
}
