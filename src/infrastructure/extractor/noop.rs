use crate::domain::error::GalleryError;
use crate::domain::ports::feature_extractor::FeatureExtractor;

pub struct NoopExtractor;

#[async_trait::async_trait]
impl FeatureExtractor for NoopExtractor {
    fn name(&self) -> &str {
        "noop"
    }

    async fn extract(&self) -> Result<(), GalleryError> {
        // Feature file is maintained out of band
        Ok(())
    }
}
