use crate::domain::error::GalleryError;
use crate::domain::ports::image_catalog::ImageCatalog;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// Uniformly shuffle `names` and keep the first `count`.
pub fn sample_names<R: Rng + ?Sized>(names: &[String], count: usize, rng: &mut R) -> Vec<String> {
    if names.is_empty() || count == 0 {
        return vec![];
    }
    let mut pool = names.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Picks a cold-start selection from the image catalog.
pub struct SampleUseCase {
    catalog: Arc<dyn ImageCatalog>,
}

impl SampleUseCase {
    pub fn new(catalog: Arc<dyn ImageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(&self, count: usize) -> Result<Vec<String>, GalleryError> {
        let names = self.catalog.list_images()?;
        Ok(sample_names(&names, count, &mut rand::thread_rng()))
    }

    pub fn list(&self) -> Result<Vec<String>, GalleryError> {
        self.catalog.list_images()
    }
}
