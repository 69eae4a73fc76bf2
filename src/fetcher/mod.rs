pub mod http_transport;
pub mod parallel;

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::Article;
use crate::normalizer::Normalizer;

/// One HTTP response, reduced to what the pipeline needs. Transport-level
/// failures (DNS, refused connection, timeout, TLS) surface as `Err` from
/// [`Transport::get`]; a non-2xx status is a successful transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Why a fetch produced no articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// DNS, connection, timeout, or TLS failure; also a syntactically
    /// invalid URL, which never reaches the network.
    Transport,
    /// Successful transport, non-2xx status.
    HttpStatus(u16),
    /// 2xx response whose body is not a recognizable feed.
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::HttpStatus(status),
            message: reason.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Parse,
            message: message.into(),
        }
    }

    /// The classic placeholder row: a synthetic article whose title carries
    /// the failure. Presentation layers render this inside the normal list;
    /// the titles are display text, not an API.
    pub fn placeholder(&self) -> Article {
        match self.kind {
            FailureKind::HttpStatus(status) => {
                let mut article = Article::new(format!("HTTP Error: {status}"));
                article.content = self.message.clone();
                article
            }
            FailureKind::Transport | FailureKind::Parse => {
                Article::new(format!("Error: {}", self.message))
            }
        }
    }
}

/// Outcome of one fetch. `Fetched` with an empty list is a valid empty
/// feed, distinct from every failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Fetched(Vec<Article>),
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// Flatten into the displayable list: articles on success, a single
    /// placeholder row on failure.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Fetched(articles) => articles,
            FetchOutcome::Failed(failure) => vec![failure.placeholder()],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// The fetch pipeline: transport, then parse, then normalize.
///
/// Stateless and infallible at the signature; every failure mode is folded
/// into [`FetchOutcome`], so callers never see a raised error from
/// [`fetch`](FeedFetcher::fetch). Safe to call concurrently; the transport
/// (and its connection pool) is shared behind an `Arc`.
#[derive(Clone)]
pub struct FeedFetcher {
    transport: Arc<dyn Transport>,
    normalizer: Normalizer,
}

impl FeedFetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch `url` and normalize its entries. Single best-effort attempt:
    /// no retries, no caching, no side effects beyond the request itself.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        if let Err(e) = url::Url::parse(url) {
            return FetchOutcome::Failed(FetchFailure::transport(e.to_string()));
        }

        let response = match self.transport.get(url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url, error = %e, "transport failure");
                return FetchOutcome::Failed(FetchFailure::transport(e.to_string()));
            }
        };

        if !response.is_success() {
            tracing::debug!(url, status = response.status, "non-success status");
            return FetchOutcome::Failed(FetchFailure::http_status(
                response.status,
                response.reason,
            ));
        }

        // A blank body is a valid zero-entry feed, not a parse failure.
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return FetchOutcome::Fetched(Vec::new());
        }

        match self.normalizer.normalize(&response.body) {
            Ok(articles) => FetchOutcome::Fetched(articles),
            Err(e) => {
                tracing::debug!(url, error = %e, "feed parse failure");
                FetchOutcome::Failed(FetchFailure::parse(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FeedPaneError;

    /// Transport stub serving canned responses keyed by URL path suffix.
    struct StubTransport;

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            if url.ends_with("/refused") {
                return Err(FeedPaneError::Other("Connection refused".into()));
            }
            if url.ends_with("/missing") {
                return Ok(HttpResponse {
                    status: 404,
                    reason: "Not Found".into(),
                    body: Vec::new(),
                });
            }
            if url.ends_with("/blank") {
                return Ok(HttpResponse {
                    status: 200,
                    reason: "OK".into(),
                    body: b"  \n ".to_vec(),
                });
            }
            if url.ends_with("/garbage") {
                return Ok(HttpResponse {
                    status: 200,
                    reason: "OK".into(),
                    body: b"<<< definitely not xml".to_vec(),
                });
            }
            // Any other URL serves a one-item feed titled after its path.
            let name = url.rsplit('/').next().unwrap_or("feed");
            let body = format!(
                r#"<?xml version="1.0"?><rss version="2.0"><channel>
                   <title>{name}</title>
                   <item><title>{name} item</title><link>{url}/1</link></item>
                   </channel></rss>"#
            );
            Ok(HttpResponse {
                status: 200,
                reason: "OK".into(),
                body: body.into_bytes(),
            })
        }
    }

    fn fetcher() -> FeedFetcher {
        FeedFetcher::new(Arc::new(StubTransport))
    }

    #[tokio::test]
    async fn test_transport_failure_is_single_error_placeholder() {
        let outcome = fetcher().fetch("https://example.com/refused").await;

        assert!(outcome.is_failed());
        let articles = outcome.into_articles();
        assert_eq!(articles.len(), 1);
        assert!(articles[0].title.starts_with("Error: "));
        assert_eq!(articles[0].link, "");
        assert_eq!(articles[0].summary, "");
        assert_eq!(articles[0].content, "");
    }

    #[tokio::test]
    async fn test_http_status_failure() {
        let outcome = fetcher().fetch("https://example.com/missing").await;

        match &outcome {
            FetchOutcome::Failed(failure) => {
                assert_eq!(failure.kind, FailureKind::HttpStatus(404));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        let articles = outcome.into_articles();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "HTTP Error: 404");
        assert_eq!(articles[0].content, "Not Found");
    }

    #[tokio::test]
    async fn test_blank_body_is_valid_empty_feed() {
        let outcome = fetcher().fetch("https://example.com/blank").await;
        assert_eq!(outcome, FetchOutcome::Fetched(Vec::new()));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let outcome = fetcher().fetch("https://example.com/garbage").await;

        match &outcome {
            FetchOutcome::Failed(failure) => assert_eq!(failure.kind, FailureKind::Parse),
            other => panic!("expected failure, got {other:?}"),
        }
        let articles = outcome.into_articles();
        assert_eq!(articles.len(), 1);
        assert!(articles[0].title.starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_invalid_url_never_reaches_transport() {
        let outcome = fetcher().fetch("not a url").await;

        match outcome {
            FetchOutcome::Failed(failure) => assert_eq!(failure.kind, FailureKind::Transport),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_fetch() {
        let outcome = fetcher().fetch("https://example.com/rust").await;

        match outcome {
            FetchOutcome::Fetched(articles) => {
                assert_eq!(articles.len(), 1);
                assert_eq!(articles[0].title, "rust item");
                assert_eq!(articles[0].link, "https://example.com/rust/1");
            }
            other => panic!("expected articles, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_fetches_stay_independent() {
        let fetcher = fetcher();
        let urls: Vec<String> = (0..8)
            .map(|i| format!("https://example.com/feed{i}"))
            .collect();

        let handles: Vec<_> = urls
            .iter()
            .map(|url| {
                let fetcher = fetcher.clone();
                let url = url.clone();
                tokio::spawn(async move { (url.clone(), fetcher.fetch(&url).await) })
            })
            .collect();

        for handle in handles {
            let (url, outcome) = handle.await.unwrap();
            let name = url.rsplit('/').next().unwrap();
            match outcome {
                FetchOutcome::Fetched(articles) => {
                    assert_eq!(articles.len(), 1);
                    assert_eq!(articles[0].title, format!("{name} item"));
                }
                other => panic!("expected articles for {url}, got {other:?}"),
            }
        }
    }
}
