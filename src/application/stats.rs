use crate::application::store_handle::StoreHandle;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub source: String,
    pub version: u64,
    pub records: usize,
    pub dimension: Option<usize>,
    pub uniform_dimension: bool,
    pub loaded_at: DateTime<Utc>,
}

pub struct StatsUseCase {
    handle: Arc<StoreHandle>,
    source: String,
}

impl StatsUseCase {
    pub fn new(handle: Arc<StoreHandle>, source: String) -> Self {
        Self { handle, source }
    }

    pub fn stats(&self) -> StoreStats {
        let snapshot = self.handle.current();
        StoreStats {
            source: self.source.clone(),
            version: snapshot.version,
            records: snapshot.store.len(),
            dimension: snapshot.store.dimension(),
            uniform_dimension: snapshot.store.is_uniform(),
            loaded_at: snapshot.loaded_at,
        }
    }
}
