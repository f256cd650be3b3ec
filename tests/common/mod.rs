//! Shared test helpers.

#![allow(dead_code)]

use imagesim::infrastructure::catalog::directory::DirectoryCatalog;
use imagesim::infrastructure::extractor::noop::NoopExtractor;
use imagesim::infrastructure::features::text_file::TextFeatureFile;
use imagesim::ImageSim;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub struct Gallery {
    pub dir: TempDir,
    pub sim: ImageSim,
}

impl Gallery {
    pub fn features_path(&self) -> PathBuf {
        features_path(self.dir.path())
    }

    pub fn write_features(&self, text: &str) {
        std::fs::write(self.features_path(), text).unwrap();
    }
}

pub fn features_path(dir: &Path) -> PathBuf {
    dir.join("image_features.txt")
}

pub fn image_dir(dir: &Path) -> PathBuf {
    dir.join("static")
}

/// Gallery over a temp directory whose feature file holds `features`
/// (or no feature file at all when `None`).
pub fn setup(features: Option<&str>) -> Gallery {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(image_dir(dir.path())).unwrap();
    if let Some(text) = features {
        std::fs::write(features_path(dir.path()), text).unwrap();
    }
    let sim = ImageSim::with_providers(
        Arc::new(TextFeatureFile::new(features_path(dir.path()))),
        Arc::new(DirectoryCatalog::new(image_dir(dir.path()))),
        Arc::new(NoopExtractor),
    )
    .unwrap();
    Gallery { dir, sim }
}

pub fn add_images(g: &Gallery, names: &[&str]) {
    for name in names {
        std::fs::write(image_dir(g.dir.path()).join(name), b"\x89PNG").unwrap();
    }
}

pub fn names(results: &[imagesim::domain::values::similarity::SimilarityResult]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}
