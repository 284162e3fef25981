//! Whole-file collection persistence.
//!
//! A backend only moves raw documents (one JSON array per collection). Typed
//! `load`/`save` on top of that live in the trait's provided methods, so every backend
//! shares the same failure policy:
//!
//! - `load` never fails. A missing document is an empty collection; an unreadable or
//!   corrupt one is logged and also reported as empty.
//! - `save` rewrites the whole document and reports success as a boolean.
//! - `try_load` is available to callers that must tell "empty" from "failed".

mod file;
mod locks;
mod memory;

pub use file::JsonFileStore;
pub use locks::{CollectionGuard, CollectionLocks};
pub use memory::MemoryStore;

use log::{debug, error, warn};
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::RepoError;

#[allow(async_fn_in_trait)]
pub trait CollectionStore {
    /// Raw document for `collection`, or `None` when it has never been written.
    async fn read_document(&self, collection: &str) -> Result<Option<String>, RepoError>;

    /// Replace the document for `collection` with `document`.
    async fn write_document(&self, collection: &str, document: String) -> Result<(), RepoError>;

    async fn try_load<T>(&self, collection: &str) -> Result<Vec<T>, RepoError>
    where
        T: DeserializeOwned,
    {
        let Some(document) = self.read_document(collection).await? else {
            warn!("collection {collection} has no document yet; treating as empty");
            return Ok(Vec::new());
        };
        let records: Vec<T> = serde_json::from_str(&document)
            .map_err(|err| RepoError::storage(collection, format!("failed to parse collection: {err}")))?;
        debug!("loaded {} records from {collection}", records.len());
        Ok(records)
    }

    async fn load<T>(&self, collection: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        match self.try_load(collection).await {
            Ok(records) => records,
            Err(err) => {
                error!("reading {collection} failed, continuing with an empty collection: {err}");
                Vec::new()
            }
        }
    }

    async fn save<T>(&self, collection: &str, records: &[T]) -> bool
    where
        T: Serialize,
    {
        let document = match serde_json::to_string_pretty(records) {
            Ok(document) => document,
            Err(err) => {
                error!("serializing {collection} failed: {err}");
                return false;
            }
        };
        match self.write_document(collection, document).await {
            Ok(()) => {
                debug!("saved {} records to {collection}", records.len());
                true
            }
            Err(err) => {
                error!("writing {collection} failed: {err}");
                false
            }
        }
    }
}
