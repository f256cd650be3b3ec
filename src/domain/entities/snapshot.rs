use crate::domain::entities::feature_store::FeatureStore;
use chrono::{DateTime, Utc};

/// A published, immutable version of the feature store.
#[derive(Debug)]
pub struct Snapshot {
    pub version: u64,
    pub loaded_at: DateTime<Utc>,
    pub store: FeatureStore,
}

impl Snapshot {
    pub fn new(version: u64, store: FeatureStore) -> Self {
        Self {
            version,
            loaded_at: Utc::now(),
            store,
        }
    }
}
