pub mod batch_service;
pub mod news_service;

pub use batch_service::{Batch, BatchProcessor};
pub use news_service::NewsService;
