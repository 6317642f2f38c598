//! Deterministic mock news source for development mode.

use chrono::Utc;

use super::{Article, FeedError, FeedPage, NewsSource};

/// Title/content templates cycled through by the generator. The second entry
/// of each batch is featured and carries an image.
const TEMPLATES: &[(&str, &str)] = &[
    (
        "New investment opportunities",
        "Market analysis points to promising directions for investors this year.",
    ),
    (
        "Cryptocurrencies: what's next for the market?",
        "Experts forecast changes in the regulation of digital assets.",
    ),
    (
        "Financial planning for the year ahead",
        "Recommendations on building a personal budget and reaching financial goals.",
    ),
    (
        "Tax changes overview",
        "A review of new tax rules and their impact on retail investors.",
    ),
];

const FEATURED_IMAGE: &str =
    "https://images.unsplash.com/photo-1621761191319-c6fb62004040?w=400&h=300&fit=crop";

/// Generates a fixed batch of articles per page, never reporting exhaustion;
/// the feed's article cap is what terminates a mock-backed feed.
#[derive(Debug, Default)]
pub struct MockNewsSource {
    next_id: u64,
}

impl MockNewsSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NewsSource for MockNewsSource {
    fn fetch_page(&mut self, _page: usize) -> Result<FeedPage, FeedError> {
        let today = Utc::now().format("%Y-%m-%d").to_string();
        let articles = TEMPLATES
            .iter()
            .enumerate()
            .map(|(i, &(title, content))| {
                let id = self.next_id;
                self.next_id += 1;
                let featured = i == 1;
                Article {
                    id,
                    title: title.to_string(),
                    content: content.to_string(),
                    image: featured.then(|| FEATURED_IMAGE.to_string()),
                    featured,
                    date: today.clone(),
                }
            })
            .collect();
        Ok(FeedPage {
            articles,
            has_more: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_fixed_batch_with_unique_ids() {
        let mut source = MockNewsSource::new();
        let first = source.fetch_page(1).unwrap();
        let second = source.fetch_page(2).unwrap();

        assert_eq!(first.articles.len(), TEMPLATES.len());
        assert!(first.has_more);

        let mut ids: Vec<u64> = first
            .articles
            .iter()
            .chain(second.articles.iter())
            .map(|a| a.id)
            .collect();
        ids.dedup();
        assert_eq!(ids.len(), TEMPLATES.len() * 2);
    }

    #[test]
    fn featured_article_carries_image() {
        let mut source = MockNewsSource::new();
        let page = source.fetch_page(1).unwrap();
        let featured: Vec<&Article> = page.articles.iter().filter(|a| a.featured).collect();
        assert_eq!(featured.len(), 1);
        assert!(featured[0].image.is_some());
    }
}
