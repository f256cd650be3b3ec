use crate::domain::error::GalleryError;

/// Lists the image names available for display.
pub trait ImageCatalog: Send + Sync {
    fn list_images(&self) -> Result<Vec<String>, GalleryError>;
}
