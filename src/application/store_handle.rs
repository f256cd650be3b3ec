use crate::domain::entities::feature_store::FeatureStore;
use crate::domain::entities::snapshot::Snapshot;
use std::sync::{Arc, RwLock};

/// Holds the currently published feature store.
///
/// Readers take an `Arc` to the snapshot and work against it without any
/// lock held. Publishing swaps the pointer; a reader that already holds
/// the previous snapshot keeps using it until it drops the `Arc`. A
/// poisoned lock still guards a complete snapshot and is read through.
pub struct StoreHandle {
    current: RwLock<Arc<Snapshot>>,
}

impl StoreHandle {
    pub fn new(store: FeatureStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::new(0, store))),
        }
    }

    pub fn empty() -> Self {
        Self::new(FeatureStore::new())
    }

    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the published store. The caller builds `store` beforehand;
    /// the write lock is only held for the swap.
    pub fn publish(&self, store: FeatureStore) -> Arc<Snapshot> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = Arc::new(Snapshot::new(guard.version + 1, store));
        *guard = Arc::clone(&next);
        next
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::empty()
    }
}
