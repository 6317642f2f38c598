//! HTTP news source backed by the site's load-more endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::{FeedError, FeedPage, NewsSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches feed pages from a JSON endpoint.
///
/// The endpoint is expected to accept a `page` query parameter and respond
/// with `{"articles": [...], "hasMore": bool}`.
#[derive(Debug)]
pub struct HttpNewsSource {
    client: Client,
    url: String,
}

impl HttpNewsSource {
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::Http(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl NewsSource for HttpNewsSource {
    fn fetch_page(&mut self, page: usize) -> Result<FeedPage, FeedError> {
        debug!("Fetching news page {} from {}", page, self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[("page", page)])
            .send()
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Http(format!("unexpected status {}", status)));
        }

        response
            .json::<FeedPage>()
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}
