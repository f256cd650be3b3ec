use crate::domain::entities::feature_store::FeatureStore;
use crate::domain::error::GalleryError;

/// Where feature vectors come from. Implementations build a complete store
/// or fail; they never return a partially parsed store.
pub trait FeatureSource: Send + Sync {
    /// Short description of the source for diagnostics (e.g. a file path).
    fn describe(&self) -> String;

    fn load(&self) -> Result<FeatureStore, GalleryError>;
}
