pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::app::{FeedPaneError, Result};
use crate::domain::Subscription;

/// Storage key for the subscription list.
pub const SUBSCRIPTIONS_KEY: &str = "feedpane.subscriptions";

/// Host-provided key/value storage. The panel persists its entire state
/// under a single key; anything that can hold named strings qualifies.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Persists the subscription list as one `feedUrl|displayTitle` pair per
/// line. The split is on the first pipe, so titles may contain pipes; a
/// line with no pipe is a bare URL.
pub struct SubscriptionStore {
    storage: Box<dyn KeyValueStorage>,
}

impl SubscriptionStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Result<Vec<Subscription>> {
        let raw = self.storage.get(SUBSCRIPTIONS_KEY)?.unwrap_or_default();
        Ok(decode_subscriptions(&raw))
    }

    pub fn save(&self, subscriptions: &[Subscription]) -> Result<()> {
        tracing::debug!(count = subscriptions.len(), "saving subscription list");
        self.storage
            .set(SUBSCRIPTIONS_KEY, &encode_subscriptions(subscriptions))
    }

    /// Add a subscription unless its URL is already present.
    /// Returns whether the list changed.
    pub fn add(&self, subscription: Subscription) -> Result<bool> {
        let mut subs = self.load()?;
        if subs.iter().any(|s| s.feed_url == subscription.feed_url) {
            return Ok(false);
        }
        subs.push(subscription);
        self.save(&subs)?;
        Ok(true)
    }

    pub fn remove(&self, feed_url: &str) -> Result<()> {
        let mut subs = self.load()?;
        let before = subs.len();
        subs.retain(|s| s.feed_url != feed_url);
        if subs.len() == before {
            return Err(FeedPaneError::SubscriptionNotFound(feed_url.to_string()));
        }
        self.save(&subs)
    }

    pub fn rename(&self, feed_url: &str, display_title: &str) -> Result<()> {
        let mut subs = self.load()?;
        let sub = subs
            .iter_mut()
            .find(|s| s.feed_url == feed_url)
            .ok_or_else(|| FeedPaneError::SubscriptionNotFound(feed_url.to_string()))?;
        sub.display_title = display_title.to_string();
        self.save(&subs)
    }
}

fn encode_subscriptions(subscriptions: &[Subscription]) -> String {
    subscriptions
        .iter()
        .map(|s| format!("{}|{}", s.feed_url, s.display_title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_subscriptions(raw: &str) -> Vec<Subscription> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('|') {
            Some((url, title)) => Subscription::with_title(url, title),
            None => Subscription::new(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SubscriptionStore {
        SubscriptionStore::new(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_codec_round_trip() {
        let subs = vec![
            Subscription::with_title("https://a.example/feed.xml", "A"),
            Subscription::new("https://b.example/rss"),
            Subscription::with_title("https://c.example/atom", "Pipes | in | title"),
        ];

        let decoded = decode_subscriptions(&encode_subscriptions(&subs));
        assert_eq!(decoded, subs);
    }

    #[test]
    fn test_decode_tolerates_bare_urls_and_blank_lines() {
        let decoded = decode_subscriptions("https://a.example/feed\n\n  \nhttps://b.example|B\n");

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].feed_url, "https://a.example/feed");
        assert_eq!(decoded[0].display_title, "");
        assert_eq!(decoded[1].display_title, "B");
    }

    #[test]
    fn test_add_dedups_by_url() {
        let store = store();
        assert!(store.add(Subscription::new("https://a.example/feed")).unwrap());
        assert!(!store
            .add(Subscription::with_title("https://a.example/feed", "dup"))
            .unwrap());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_and_missing() {
        let store = store();
        store.add(Subscription::new("https://a.example/feed")).unwrap();

        store.remove("https://a.example/feed").unwrap();
        assert!(store.load().unwrap().is_empty());

        let err = store.remove("https://a.example/feed").unwrap_err();
        assert!(matches!(err, FeedPaneError::SubscriptionNotFound(_)));
    }

    #[test]
    fn test_rename() {
        let store = store();
        store.add(Subscription::new("https://a.example/feed")).unwrap();
        store.rename("https://a.example/feed", "Renamed").unwrap();

        let subs = store.load().unwrap();
        assert_eq!(subs[0].display_title, "Renamed");
    }

    #[test]
    fn test_empty_storage_loads_empty_list() {
        assert!(store().load().unwrap().is_empty());
    }
}
