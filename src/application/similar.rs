use crate::application::store_handle::StoreHandle;
use crate::domain::entities::feature_store::FeatureStore;
use crate::domain::error::GalleryError;
use crate::domain::values::rank_request::RankRequest;
use crate::domain::values::similarity::{cosine_similarity, SimilarityResult};
use std::sync::Arc;

/// Rank every record in `store` against the request's query image.
///
/// Results are ordered by descending score. Equal scores keep the store's
/// iteration order. The query itself and excluded names never appear.
pub fn rank(store: &FeatureStore, request: &RankRequest) -> Result<Vec<SimilarityResult>, GalleryError> {
    if store.is_empty() {
        return Ok(vec![]);
    }
    let query = store
        .get(&request.query_name)
        .ok_or_else(|| GalleryError::UnknownQuery(request.query_name.clone()))?;

    let mut results: Vec<SimilarityResult> = store
        .iter()
        .filter(|record| !request.skips(&record.name))
        .map(|record| {
            SimilarityResult::new(
                record.name.clone(),
                cosine_similarity(&query.vector, &record.vector),
            )
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(request.limit);
    Ok(results)
}

pub struct SimilarUseCase {
    handle: Arc<StoreHandle>,
}

impl SimilarUseCase {
    pub fn new(handle: Arc<StoreHandle>) -> Self {
        Self { handle }
    }

    pub fn execute(&self, request: &RankRequest) -> Result<Vec<SimilarityResult>, GalleryError> {
        let snapshot = self.handle.current();
        rank(&snapshot.store, request)
    }
}
