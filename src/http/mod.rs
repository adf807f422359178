pub mod traits;
pub mod client;

pub use traits::{FetchedResource, HttpFetcher};
pub use client::ReqwestFetcher;
