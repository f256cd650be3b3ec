use crate::domain::error::GalleryError;
use crate::domain::ports::image_catalog::ImageCatalog;
use std::path::{Path, PathBuf};

/// Extensions recognised as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff"];

/// Image catalog backed by a flat directory of image files.
pub struct DirectoryCatalog {
    dir: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

impl ImageCatalog for DirectoryCatalog {
    fn list_images(&self) -> Result<Vec<String>, GalleryError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            GalleryError::Catalog(format!("Failed to read image directory {}: {e}", self.dir.display()))
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GalleryError::Catalog(e.to_string()))?;
            let file_type = entry.file_type().map_err(|e| GalleryError::Catalog(e.to_string()))?;
            if !file_type.is_file() || !is_image(&entry.path()) {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => {
                    tracing::debug!(dir = %self.dir.display(), name = ?raw, "skipping image with non-UTF-8 name")
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
