use crate::domain::error::GalleryError;
use async_trait::async_trait;

/// The external process that (re)writes the feature file.
///
/// Extraction only has to finish before the caller reloads the store; the
/// contract between the two is the feature file itself.
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    /// Extractor name for logging.
    fn name(&self) -> &str;

    /// Run extraction to completion.
    async fn extract(&self) -> Result<(), GalleryError>;
}
