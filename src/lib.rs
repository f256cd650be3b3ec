pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::reindex::ReindexUseCase;
use crate::application::reload::{ReloadReport, ReloadUseCase};
use crate::application::sample::{sample_names, SampleUseCase};
use crate::application::similar::SimilarUseCase;
use crate::application::stats::{StatsUseCase, StoreStats};
use crate::application::store_handle::StoreHandle;
use crate::config::Settings;
use crate::domain::entities::feature_record::FeatureRecord;
use crate::domain::entities::feature_store::FeatureStore;
use crate::domain::error::GalleryError;
use crate::domain::ports::feature_extractor::FeatureExtractor;
use crate::domain::ports::feature_source::FeatureSource;
use crate::domain::ports::image_catalog::ImageCatalog;
use crate::domain::values::rank_request::RankRequest;
use crate::domain::values::similarity::SimilarityResult;
use crate::infrastructure::catalog::directory::DirectoryCatalog;
use crate::infrastructure::extractor::process::ProcessExtractor;
use crate::infrastructure::features::text_file::TextFeatureFile;
use std::sync::Arc;

pub struct ImageSim {
    store: Arc<StoreHandle>,
    similar_uc: SimilarUseCase,
    sample_uc: SampleUseCase,
    reload_uc: Arc<ReloadUseCase>,
    reindex_uc: ReindexUseCase,
    stats_uc: StatsUseCase,
}

impl ImageSim {
    pub fn new(settings: &Settings) -> Result<Self, GalleryError> {
        let source: Arc<dyn FeatureSource> = Arc::new(TextFeatureFile::new(&settings.features_path));
        let catalog: Arc<dyn ImageCatalog> = Arc::new(DirectoryCatalog::new(&settings.image_dir));
        let extractor: Arc<dyn FeatureExtractor> = Arc::new(ProcessExtractor::new(
            settings.extractor.clone(),
            settings.extractor_args.clone(),
        ));

        Self::with_providers(source, catalog, extractor)
    }

    /// Wire the gallery around explicit collaborators and perform the initial
    /// load. A missing or malformed feature source starts the gallery empty so
    /// that sampling and reindexing stay available; later reloads still
    /// report the error.
    pub fn with_providers(
        source: Arc<dyn FeatureSource>,
        catalog: Arc<dyn ImageCatalog>,
        extractor: Arc<dyn FeatureExtractor>,
    ) -> Result<Self, GalleryError> {
        let source_desc = source.describe();
        let initial = match source.load() {
            Ok(initial) => {
                tracing::info!(
                    source = %source_desc,
                    records = initial.len(),
                    dimension = ?initial.dimension(),
                    "feature store loaded"
                );
                if !initial.is_uniform() {
                    tracing::warn!(
                        source = %source_desc,
                        "feature vectors have mixed dimensions; mismatched pairs score 0.0"
                    );
                }
                initial
            }
            Err(e) if e.is_absent_source() => {
                tracing::warn!(source = %source_desc, "feature source missing, starting with an empty store");
                FeatureStore::new()
            }
            Err(e @ GalleryError::Parse { .. }) => {
                tracing::warn!(source = %source_desc, error = %e, "feature source malformed, starting with an empty store");
                FeatureStore::new()
            }
            Err(e) => return Err(e),
        };

        let store = Arc::new(StoreHandle::new(initial));
        let reload_uc = Arc::new(ReloadUseCase::new(source, store.clone()));

        Ok(Self {
            similar_uc: SimilarUseCase::new(store.clone()),
            sample_uc: SampleUseCase::new(catalog),
            reindex_uc: ReindexUseCase::new(extractor, reload_uc.clone()),
            stats_uc: StatsUseCase::new(store.clone(), source_desc),
            reload_uc,
            store,
        })
    }

    // Delegating methods
    pub fn similar(
        &self,
        query: &str,
        excluded: &[String],
        limit: usize,
    ) -> Result<Vec<SimilarityResult>, GalleryError> {
        let request = RankRequest::new(query, limit).excluding(excluded.iter().cloned());
        self.similar_uc.execute(&request)
    }

    pub fn rank(&self, request: &RankRequest) -> Result<Vec<SimilarityResult>, GalleryError> {
        self.similar_uc.execute(request)
    }

    pub fn sample(&self, count: usize) -> Result<Vec<String>, GalleryError> {
        self.sample_uc.execute(count)
    }

    pub fn sample_names(&self, names: &[String], count: usize) -> Vec<String> {
        sample_names(names, count, &mut rand::thread_rng())
    }

    pub fn images(&self) -> Result<Vec<String>, GalleryError> {
        self.sample_uc.list()
    }

    pub fn feature(&self, name: &str) -> Result<FeatureRecord, GalleryError> {
        let snapshot = self.store.current();
        snapshot.store.lookup(name).cloned()
    }

    pub fn stats(&self) -> StoreStats {
        self.stats_uc.stats()
    }

    pub fn reload(&self) -> Result<ReloadReport, GalleryError> {
        let report = self.reload_uc.execute()?;
        tracing::info!(version = report.version, records = report.records, "feature store reloaded");
        Ok(report)
    }

    pub async fn reindex(&self) -> Result<ReloadReport, GalleryError> {
        tracing::info!(extractor = %self.reindex_uc.extractor_name(), "reindexing gallery");
        let report = self.reindex_uc.execute().await?;
        tracing::info!(version = report.version, records = report.records, "reindex complete");
        Ok(report)
    }

    pub fn store_handle(&self) -> Arc<StoreHandle> {
        self.store.clone()
    }
}
