use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The feed could not be fetched; the batch is empty.
    FeedFailed,
    EntrySkipped,
    ImageFallback,
    PlaceholderUnavailable,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::FeedFailed => "feed_failed",
            NoticeKind::EntrySkipped => "entry_skipped",
            NoticeKind::ImageFallback => "image_fallback",
            NoticeKind::PlaceholderUnavailable => "placeholder_unavailable",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, NoticeKind::FeedFailed)
    }
}

/// A diagnostic the presentation layer is expected to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}
