use serde::{Deserialize, Serialize};

/// A user-saved feed URL plus an editable display title. The display title
/// is independent of whatever title the feed itself advertises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub feed_url: String,
    pub display_title: String,
}

impl Subscription {
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            display_title: String::new(),
        }
    }

    pub fn with_title(feed_url: impl Into<String>, display_title: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            display_title: display_title.into(),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.display_title.is_empty() {
            &self.feed_url
        } else {
            &self.display_title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_with_title() {
        let sub = Subscription::with_title("https://example.com/feed.xml", "Example");
        assert_eq!(sub.display_title(), "Example");
    }

    #[test]
    fn test_display_title_falls_back_to_url() {
        let sub = Subscription::new("https://example.com/feed.xml");
        assert_eq!(sub.display_title(), "https://example.com/feed.xml");
    }
}
