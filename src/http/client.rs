use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::errors::{FetchError, NewsError, NewsResult};
use crate::http::traits::{FetchedResource, HttpFetcher};

/// Blocking HTTP client shared by the feed source, the enricher and the image resolver.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            // Each fetch gets its own connection
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| NewsError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get(&self, url: &str) -> Result<FetchedResource, FetchError> {
        debug!(%url, "GET");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes()?;

        Ok(FetchedResource {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}
