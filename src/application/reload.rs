use crate::application::store_handle::StoreHandle;
use crate::domain::error::GalleryError;
use crate::domain::ports::feature_source::FeatureSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ReloadReport {
    pub version: u64,
    pub records: usize,
    pub dimension: Option<usize>,
    pub uniform_dimension: bool,
    pub loaded_at: DateTime<Utc>,
}

pub struct ReloadUseCase {
    source: Arc<dyn FeatureSource>,
    handle: Arc<StoreHandle>,
}

impl ReloadUseCase {
    pub fn new(source: Arc<dyn FeatureSource>, handle: Arc<StoreHandle>) -> Self {
        Self { source, handle }
    }

    /// Parse the source into a fresh store, then publish it. On any error
    /// the published snapshot is left as it was.
    pub fn execute(&self) -> Result<ReloadReport, GalleryError> {
        let store = self.source.load()?;
        let snapshot = self.handle.publish(store);
        Ok(ReloadReport {
            version: snapshot.version,
            records: snapshot.store.len(),
            dimension: snapshot.store.dimension(),
            uniform_dimension: snapshot.store.is_uniform(),
            loaded_at: snapshot.loaded_at,
        })
    }
}
