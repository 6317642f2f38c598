//! News feed: article model, pluggable page sources, feed state.
//!
//! The feed never cares where pages come from. `NewsSource` is the single
//! "fetch next page" capability with two implementations:
//! - `MockNewsSource`: deterministic generated articles (development mode)
//! - `HttpNewsSource`: JSON endpoint (production mode)

mod http;
mod mock;

pub use http::HttpNewsSource;
pub use mock::MockNewsSource;

use serde::Deserialize;
use tracing::{debug, warn};

/// Hard cap on the number of articles kept in the feed.
pub const MAX_ARTICLES: usize = 20;

/// A single news article.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Publication date as `YYYY-MM-DD`.
    pub date: String,
}

/// One page of articles from a source.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedPage {
    pub articles: Vec<Article>,
    #[serde(rename = "hasMore", default)]
    pub has_more: bool,
}

/// Error types that can occur while fetching a feed page.
#[derive(Debug, Clone)]
pub enum FeedError {
    /// Network or HTTP-level failure.
    Http(String),
    /// Error decoding the response payload.
    Parse(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Http(msg) => write!(f, "HTTP error: {}", msg),
            FeedError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// A paged source of news articles.
pub trait NewsSource {
    /// Fetches the given 1-based page.
    fn fetch_page(&mut self, page: usize) -> Result<FeedPage, FeedError>;
}

/// Accumulated feed state: loaded articles, page cursor, termination flag.
#[derive(Debug, Default)]
pub struct NewsFeed {
    articles: Vec<Article>,
    current_page: usize,
    exhausted: bool,
    last_error: Option<FeedError>,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Whether another page can still be requested.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Last fetch error, if any. Cleared by the next successful fetch.
    pub fn last_error(&self) -> Option<&FeedError> {
        self.last_error.as_ref()
    }

    /// Fetches the next page from `source` and appends its articles.
    ///
    /// Returns the number of articles appended. The feed terminates once the
    /// source reports no more pages, returns an empty page, or the article
    /// cap is reached. A fetch error is recorded but does not terminate the
    /// feed; a later call may succeed.
    pub fn load_more(&mut self, source: &mut dyn NewsSource) -> usize {
        if self.exhausted {
            return 0;
        }

        let page = match source.fetch_page(self.current_page + 1) {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to fetch news page {}: {}", self.current_page + 1, e);
                self.last_error = Some(e);
                return 0;
            }
        };
        self.last_error = None;
        self.current_page += 1;

        if page.articles.is_empty() {
            self.exhausted = true;
            return 0;
        }

        let before = self.articles.len();
        self.articles.extend(page.articles);
        if self.articles.len() >= MAX_ARTICLES {
            self.articles.truncate(MAX_ARTICLES);
            self.exhausted = true;
        }
        if !page.has_more {
            self.exhausted = true;
        }

        let appended = self.articles.len() - before;
        debug!(
            "Loaded news page {}: {} articles ({} total, more: {})",
            self.current_page,
            appended,
            self.articles.len(),
            !self.exhausted
        );
        appended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that serves a fixed number of pages, two articles each.
    struct ScriptedSource {
        pages: usize,
    }

    impl NewsSource for ScriptedSource {
        fn fetch_page(&mut self, page: usize) -> Result<FeedPage, FeedError> {
            if page > self.pages {
                return Ok(FeedPage {
                    articles: Vec::new(),
                    has_more: false,
                });
            }
            let articles = (0..2)
                .map(|i| Article {
                    id: (page * 10 + i) as u64,
                    title: format!("Article {}-{}", page, i),
                    content: "body".to_string(),
                    image: None,
                    featured: false,
                    date: "2026-08-30".to_string(),
                })
                .collect();
            Ok(FeedPage {
                articles,
                has_more: page < self.pages,
            })
        }
    }

    struct FailingSource;

    impl NewsSource for FailingSource {
        fn fetch_page(&mut self, _page: usize) -> Result<FeedPage, FeedError> {
            Err(FeedError::Http("connection refused".to_string()))
        }
    }

    #[test]
    fn appends_pages_until_source_reports_end() {
        let mut source = ScriptedSource { pages: 2 };
        let mut feed = NewsFeed::new();

        assert_eq!(feed.load_more(&mut source), 2);
        assert!(feed.has_more());
        assert_eq!(feed.load_more(&mut source), 2);
        assert!(!feed.has_more());
        assert_eq!(feed.len(), 4);

        // Further calls are no-ops.
        assert_eq!(feed.load_more(&mut source), 0);
        assert_eq!(feed.len(), 4);
    }

    #[test]
    fn stops_at_article_cap() {
        let mut source = MockNewsSource::new();
        let mut feed = NewsFeed::new();
        while feed.has_more() {
            feed.load_more(&mut source);
        }
        assert_eq!(feed.len(), MAX_ARTICLES);
    }

    #[test]
    fn empty_page_terminates_feed() {
        let mut source = ScriptedSource { pages: 0 };
        let mut feed = NewsFeed::new();
        assert_eq!(feed.load_more(&mut source), 0);
        assert!(!feed.has_more());
        assert!(feed.is_empty());
    }

    #[test]
    fn fetch_error_is_recorded_but_not_terminal() {
        let mut feed = NewsFeed::new();
        assert_eq!(feed.load_more(&mut FailingSource), 0);
        assert!(feed.has_more());
        assert!(matches!(feed.last_error(), Some(FeedError::Http(_))));

        // A later successful fetch clears the error.
        let mut source = ScriptedSource { pages: 1 };
        assert_eq!(feed.load_more(&mut source), 2);
        assert!(feed.last_error().is_none());
    }

    #[test]
    fn feed_page_payload_decodes_server_contract() {
        let json = r#"{
            "articles": [
                {"id": 7, "title": "T", "content": "C", "date": "2026-08-30"}
            ],
            "hasMore": true
        }"#;
        let page: FeedPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.articles.len(), 1);
        assert!(page.has_more);
        assert!(page.articles[0].image.is_none());
        assert!(!page.articles[0].featured);
    }
}
