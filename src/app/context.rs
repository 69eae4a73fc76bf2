use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{FeedPaneError, Result};
use crate::config::Config;
use crate::directory::FeedDirectory;
use crate::fetcher::http_transport::HttpTransport;
use crate::fetcher::parallel::ParallelFetcher;
use crate::fetcher::FeedFetcher;
use crate::store::{FileStorage, MemoryStorage, SubscriptionStore};

/// Wires the components together: subscription store, fetch pipeline,
/// parallel refresher, and the bundled feed directory.
pub struct AppContext {
    pub store: Arc<SubscriptionStore>,
    pub fetcher: FeedFetcher,
    pub parallel_fetcher: ParallelFetcher,
    pub directory: FeedDirectory,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let data_dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => Self::default_data_dir()?,
        };

        let storage = FileStorage::new(data_dir)?;
        let store = Arc::new(SubscriptionStore::new(Box::new(storage)));
        Self::with_store(store, config)
    }

    /// Ephemeral context backed by in-memory storage.
    pub fn in_memory(config: &Config) -> Result<Self> {
        let store = Arc::new(SubscriptionStore::new(Box::new(MemoryStorage::new())));
        Self::with_store(store, config)
    }

    fn with_store(store: Arc<SubscriptionStore>, config: &Config) -> Result<Self> {
        let fetcher = FeedFetcher::new(Arc::new(HttpTransport::new()));
        let parallel_fetcher = ParallelFetcher::with_workers(fetcher.clone(), config.workers);
        let directory = FeedDirectory::bundled(&config.language)?;

        Ok(Self {
            store,
            fetcher,
            parallel_fetcher,
            directory,
        })
    }

    fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| FeedPaneError::Config("Could not find data directory".into()))?;
        Ok(data_dir.join("feedpane"))
    }
}
