pub mod traits;
pub mod google_news;

pub use traits::{fetch_for_mode, FeedSource};
pub use google_news::GoogleNewsSource;
