use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-collection write locks.
///
/// A mutation holds the guard for every collection it rewrites across its whole
/// load -> modify -> save sequence. Locks are always taken in name order so two
/// mutations touching overlapping sets cannot deadlock.
#[derive(Debug, Default)]
pub struct CollectionLocks {
    slots: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Held locks; dropping it releases every collection.
#[derive(Debug)]
pub struct CollectionGuard {
    collections: Vec<String>,
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl CollectionGuard {
    pub fn collections(&self) -> &[String] {
        &self.collections
    }
}

impl CollectionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, collection: &str) -> Arc<AsyncMutex<()>> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(collection.to_string()).or_default().clone()
    }

    pub async fn acquire(&self, collections: &[&str]) -> CollectionGuard {
        let mut ordered: Vec<String> = collections.iter().map(|name| name.to_string()).collect();
        ordered.sort();
        ordered.dedup();

        let mut guards = Vec::with_capacity(ordered.len());
        for name in &ordered {
            guards.push(self.slot(name).lock_owned().await);
        }
        CollectionGuard {
            collections: ordered,
            _guards: guards,
        }
    }
}
