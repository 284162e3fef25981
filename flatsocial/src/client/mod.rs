//! Entry point for the social data core.
//!
//! A [`Client`] bundles an injected [`CollectionStore`], the per-collection write locks and
//! the runtime [`Config`]. Every social operation (feed, posting, likes, comments,
//! friendships, accounts) is a method on it, implemented in [`crate::social`].
//!
//! # Example
//! ```ignore
//! let client = Client::open(Config::load(None)?)?;
//! let feed = client.build_feed(1).await;
//! let toggled = client.toggle_like(3, ActorRef::user(1)).await?;
//! ```

use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::{
    config::Config,
    errors::RepoError,
    store::{CollectionGuard, CollectionLocks, CollectionStore, JsonFileStore},
    types::Record,
};

/// Main client for collection access and social operations.
///
/// Cloning is cheap; clones share the store and the lock registry, so mutations issued
/// through any clone are serialized per collection.
pub struct Client<S> {
    store: Arc<S>,
    locks: Arc<CollectionLocks>,
    config: Config,
}

impl<S> Clone for Client<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            locks: Arc::clone(&self.locks),
            config: self.config.clone(),
        }
    }
}

impl Client<JsonFileStore> {
    /// Client over JSON files in the configured data directory.
    pub fn open(config: Config) -> Result<Self> {
        let data_dir = config.data_dir()?;
        info!("using data directory {}", data_dir.display());
        Ok(Self::new(JsonFileStore::new(data_dir), config))
    }
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    pub fn new(store: S, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            locks: Arc::new(CollectionLocks::new()),
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whole collection; empty when missing or unreadable.
    pub async fn load<T: Record>(&self) -> Vec<T> {
        self.store.load(T::COLLECTION).await
    }

    /// Whole collection, surfacing read failures instead of degrading to empty.
    pub async fn try_load<T: Record>(&self) -> Result<Vec<T>, RepoError> {
        self.store.try_load(T::COLLECTION).await
    }

    /// Replace the whole collection. `false` means nothing was written.
    pub async fn save<T: Record>(&self, records: &[T]) -> bool {
        self.store.save(T::COLLECTION, records).await
    }

    /// Write lock over `collections`, held for a mutation's load -> modify -> save.
    pub async fn lock(&self, collections: &[&str]) -> CollectionGuard {
        self.locks.acquire(collections).await
    }

    /// Save inside a mutation, turning a failed write into [`RepoError::Storage`].
    pub(crate) async fn persist<T: Record>(&self, records: &[T]) -> Result<(), RepoError> {
        if self.save(records).await {
            Ok(())
        } else {
            Err(RepoError::write_failed(T::COLLECTION))
        }
    }
}
