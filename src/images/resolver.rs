use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{DecodedImage, Notice, NoticeKind, Visual};
use crate::errors::ImageError;
use crate::http::HttpFetcher;

/// One way of obtaining a picture for a record. Strategies are tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStrategy {
    Remote(String),
    Placeholder(PathBuf),
}

impl ImageStrategy {
    fn visual(&self, image: DecodedImage) -> Visual {
        match self {
            ImageStrategy::Remote(_) => Visual::Image(image),
            ImageStrategy::Placeholder(_) => Visual::Placeholder(image),
        }
    }

    fn failure_kind(&self) -> NoticeKind {
        match self {
            ImageStrategy::Remote(_) => NoticeKind::ImageFallback,
            ImageStrategy::Placeholder(_) => NoticeKind::PlaceholderUnavailable,
        }
    }
}

/// Outcome of resolving one image: always renderable, plus any diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub visual: Visual,
    pub notices: Vec<Notice>,
}

pub struct ImageResolver<H: HttpFetcher> {
    fetcher: H,
    placeholder_path: PathBuf,
}

impl<H: HttpFetcher> ImageResolver<H> {
    pub fn new(fetcher: H, placeholder_path: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            placeholder_path: placeholder_path.into(),
        }
    }

    /// The fallback chain for a candidate URL.
    pub fn strategies(&self, url: Option<&str>) -> Vec<ImageStrategy> {
        vec![
            ImageStrategy::Remote(url.unwrap_or_default().trim().to_string()),
            ImageStrategy::Placeholder(self.placeholder_path.clone()),
        ]
    }

    /// Never fails: falls back to the placeholder, then to [`Visual::NoImage`].
    pub fn resolve(&self, url: Option<&str>) -> Resolution {
        let mut notices = Vec::new();

        for strategy in self.strategies(url) {
            match self.attempt(&strategy) {
                Ok(image) => {
                    debug!(source = %image.source, "Resolved image");
                    return Resolution {
                        visual: strategy.visual(image),
                        notices,
                    };
                }
                Err(e) => {
                    warn!(error = %e, "Image strategy failed");
                    notices.push(Notice::new(strategy.failure_kind(), e.to_string()));
                }
            }
        }

        Resolution {
            visual: Visual::NoImage,
            notices,
        }
    }

    fn attempt(&self, strategy: &ImageStrategy) -> Result<DecodedImage, ImageError> {
        match strategy {
            ImageStrategy::Remote(url) => self.fetch_remote(url),
            ImageStrategy::Placeholder(path) => Self::load_placeholder(path),
        }
    }

    fn fetch_remote(&self, url: &str) -> Result<DecodedImage, ImageError> {
        if url.is_empty() {
            return Err(ImageError::FetchFailed {
                url: String::new(),
                reason: "no image url".to_string(),
            });
        }

        let resource = self.fetcher.get(url).map_err(|e| ImageError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let image = image::load_from_memory(&resource.bytes).map_err(|e| {
            ImageError::DecodeFailed {
                source_name: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(DecodedImage::new(url, image))
    }

    fn load_placeholder(path: &Path) -> Result<DecodedImage, ImageError> {
        let display = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| ImageError::PlaceholderMissing {
            path: display.clone(),
            reason: e.to_string(),
        })?;

        let image = image::load_from_memory(&bytes).map_err(|e| ImageError::DecodeFailed {
            source_name: display.clone(),
            reason: e.to_string(),
        })?;

        Ok(DecodedImage::new(display, image))
    }
}
