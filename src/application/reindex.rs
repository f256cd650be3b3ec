use crate::application::reload::{ReloadReport, ReloadUseCase};
use crate::domain::error::GalleryError;
use crate::domain::ports::feature_extractor::FeatureExtractor;
use std::sync::Arc;

pub struct ReindexUseCase {
    extractor: Arc<dyn FeatureExtractor>,
    reload: Arc<ReloadUseCase>,
}

impl ReindexUseCase {
    pub fn new(extractor: Arc<dyn FeatureExtractor>, reload: Arc<ReloadUseCase>) -> Self {
        Self { extractor, reload }
    }

    /// Run the extractor to completion, then load what it wrote.
    pub async fn execute(&self) -> Result<ReloadReport, GalleryError> {
        self.extractor.extract().await?;
        self.reload.execute()
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }
}
