pub mod entry;
pub mod article;
pub mod record;
pub mod request;
pub mod notice;

pub use entry::FeedEntry;
pub use article::EnrichedArticle;
pub use record::{DecodedImage, DisplayRecord, Visual};
pub use request::{BatchRequest, Mode, Topic};
pub use notice::{Notice, NoticeKind};
