pub mod strip;

use feed_rs::parser;

use crate::app::{FeedPaneError, Result};
use crate::domain::article::UNTITLED;
use crate::domain::Article;
use crate::normalizer::strip::strip;

/// Maps raw feed bytes to normalized [`Article`] records.
///
/// Format detection (RSS 0.9x/1.0/2.0, Atom) is delegated to `feed-rs`;
/// this layer owns the field mapping and markup stripping. Entry order is
/// preserved as parsed, which is the feed-native order.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &[u8]) -> Result<Vec<Article>> {
        let feed = parser::parse(body).map_err(|e| FeedPaneError::FeedParse(e.to_string()))?;

        let articles = feed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| strip(&t.content))
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| UNTITLED.to_string());

                let link = entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default();

                let summary = entry
                    .summary
                    .map(|s| strip(&s.content))
                    .unwrap_or_default();

                // An entry has at most one content body in the feed-rs
                // model; collected and joined so multi-block feeds would
                // still concatenate.
                let blocks: Vec<String> =
                    entry.content.and_then(|c| c.body).into_iter().collect();
                let content = if blocks.is_empty() {
                    String::new()
                } else {
                    strip(&blocks.join(" "))
                };

                Article {
                    title,
                    link,
                    summary,
                    content,
                }
            })
            .collect();

        Ok(articles)
    }
}
