use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{errors::RepoError, store::CollectionStore};

/// Process-local store holding each collection's document in memory.
///
/// Used by tests and by embedders that want the social core without touching disk.
/// `set_read_only` makes every write fail and `fail_writes_to` fails a single collection,
/// which is how storage faults are simulated.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
    read_only: AtomicBool,
    failing: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw document, e.g. a hand-written JSON fixture.
    pub fn with_document(self, collection: &str, document: impl Into<String>) -> Self {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(collection.to_string(), document.into());
        self
    }

    pub fn document(&self, collection: &str) -> Option<String> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .cloned()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Reject every later write to `collection` while other collections stay writable.
    pub fn fail_writes_to(&self, collection: &str) {
        self.failing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(collection.to_string());
    }

    fn rejects(&self, collection: &str) -> bool {
        self.read_only.load(Ordering::SeqCst)
            || self
                .failing
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(collection)
    }
}

impl CollectionStore for MemoryStore {
    async fn read_document(&self, collection: &str) -> Result<Option<String>, RepoError> {
        Ok(self.document(collection))
    }

    async fn write_document(&self, collection: &str, document: String) -> Result<(), RepoError> {
        if self.rejects(collection) {
            return Err(RepoError::storage(collection, "store is read-only"));
        }
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(collection.to_string(), document);
        Ok(())
    }
}
