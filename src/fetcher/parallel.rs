use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::Subscription;
use crate::fetcher::{FeedFetcher, FetchOutcome};

pub const DEFAULT_WORKERS: usize = 10;

/// Fans a refresh-all out over a bounded worker pool. Each fetch is
/// independent and stateless, so the only coordination needed is the
/// semaphore capping in-flight requests.
#[derive(Clone)]
pub struct ParallelFetcher {
    fetcher: FeedFetcher,
    semaphore: Arc<Semaphore>,
}

impl ParallelFetcher {
    pub fn new(fetcher: FeedFetcher) -> Self {
        Self::with_workers(fetcher, DEFAULT_WORKERS)
    }

    pub fn with_workers(fetcher: FeedFetcher, workers: usize) -> Self {
        Self {
            fetcher,
            semaphore: Arc::new(Semaphore::new(workers.max(1))),
        }
    }

    /// Fetch every subscription, returning `(feed_url, outcome)` pairs in
    /// completion-gathering order (one pair per input, failures included).
    pub async fn fetch_all(&self, subscriptions: &[Subscription]) -> Vec<(String, FetchOutcome)> {
        let mut handles = Vec::with_capacity(subscriptions.len());

        for sub in subscriptions {
            let fetcher = self.fetcher.clone();
            let semaphore = self.semaphore.clone();
            let url = sub.feed_url.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                let outcome = fetcher.fetch(&url).await;
                (url, outcome)
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!("Task join error: {}", e);
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Result;
    use crate::fetcher::{HttpResponse, Transport};
    use async_trait::async_trait;

    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            let name = url.rsplit('/').next().unwrap_or("feed");
            let body = format!(
                r#"<?xml version="1.0"?><rss version="2.0"><channel>
                   <title>{name}</title>
                   <item><title>{name} item</title></item>
                   </channel></rss>"#
            );
            Ok(HttpResponse {
                status: 200,
                reason: "OK".into(),
                body: body.into_bytes(),
            })
        }
    }

    #[tokio::test]
    async fn test_fetch_all_covers_every_subscription() {
        let fetcher = FeedFetcher::new(Arc::new(EchoTransport));
        let parallel = ParallelFetcher::with_workers(fetcher, 3);

        let subs: Vec<Subscription> = (0..7)
            .map(|i| Subscription::new(format!("https://example.com/s{i}")))
            .collect();

        let mut results = parallel.fetch_all(&subs).await;
        assert_eq!(results.len(), subs.len());

        results.sort_by(|a, b| a.0.cmp(&b.0));
        for (i, (url, outcome)) in results.into_iter().enumerate() {
            assert_eq!(url, format!("https://example.com/s{i}"));
            let articles = outcome.into_articles();
            assert_eq!(articles[0].title, format!("s{i} item"));
        }
    }

    #[tokio::test]
    async fn test_fetch_all_empty_input() {
        let fetcher = FeedFetcher::new(Arc::new(EchoTransport));
        let parallel = ParallelFetcher::new(fetcher);
        assert!(parallel.fetch_all(&[]).await.is_empty());
    }
}
