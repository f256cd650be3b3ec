mod common;

use async_trait::async_trait;
use imagesim::domain::error::GalleryError;
use imagesim::domain::ports::feature_extractor::FeatureExtractor;
use imagesim::infrastructure::catalog::directory::DirectoryCatalog;
use imagesim::infrastructure::features::text_file::TextFeatureFile;
use imagesim::ImageSim;
use std::path::PathBuf;
use std::sync::Arc;

/// Stands in for the extraction binary by writing a fixed feature file.
struct WritingExtractor {
    path: PathBuf,
    contents: String,
}

#[async_trait]
impl FeatureExtractor for WritingExtractor {
    fn name(&self) -> &str {
        "writer"
    }

    async fn extract(&self) -> Result<(), GalleryError> {
        tokio::fs::write(&self.path, &self.contents)
            .await
            .map_err(|e| GalleryError::Extraction(e.to_string()))
    }
}

struct FailingExtractor;

#[async_trait]
impl FeatureExtractor for FailingExtractor {
    fn name(&self) -> &str {
        "failing"
    }

    async fn extract(&self) -> Result<(), GalleryError> {
        Err(GalleryError::Extraction("model not found".into()))
    }
}

fn gallery(dir: &std::path::Path, extractor: Arc<dyn FeatureExtractor>) -> ImageSim {
    ImageSim::with_providers(
        Arc::new(TextFeatureFile::new(common::features_path(dir))),
        Arc::new(DirectoryCatalog::new(dir)),
        extractor,
    )
    .unwrap()
}

#[tokio::test]
async fn test_reindex_loads_fresh_features() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = Arc::new(WritingExtractor {
        path: common::features_path(dir.path()),
        contents: "a.jpg 1 0\nb.jpg 0.9 0.1\nc.jpg 0 1\n".into(),
    });
    let sim = gallery(dir.path(), extractor);
    assert_eq!(sim.stats().records, 0);

    let report = sim.reindex().await.unwrap();
    assert_eq!(report.records, 3);
    assert_eq!(report.version, 1);

    let results = sim.similar("a.jpg", &[], 1).unwrap();
    assert_eq!(results[0].name, "b.jpg");
}

#[tokio::test]
async fn test_failed_extraction_keeps_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(common::features_path(dir.path()), "a.jpg 1 0\nb.jpg 0 1\n").unwrap();
    let sim = gallery(dir.path(), Arc::new(FailingExtractor));

    let err = sim.reindex().await.unwrap_err();
    assert!(matches!(err, GalleryError::Extraction(_)));
    assert_eq!(sim.stats().records, 2);
    assert_eq!(sim.stats().version, 0);
}

#[tokio::test]
async fn test_reindex_repairs_malformed_feature_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::features_path(dir.path());
    std::fs::write(&path, "a.jpg 1 0\nb.jpg 1 zero\n").unwrap();
    std::fs::write(dir.path().join("a.jpg"), b"\x89PNG").unwrap();

    let extractor = Arc::new(WritingExtractor {
        path,
        contents: "a.jpg 1 0\nb.jpg 0.8 0.2\n".into(),
    });
    let sim = gallery(dir.path(), extractor);
    assert_eq!(sim.stats().records, 0);
    assert_eq!(sim.sample(1).unwrap(), vec!["a.jpg"]);

    let report = sim.reindex().await.unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(report.version, 1);
    assert_eq!(sim.similar("a.jpg", &[], 5).unwrap()[0].name, "b.jpg");
}

#[cfg(unix)]
#[tokio::test]
async fn test_reindex_with_external_process() {
    use imagesim::infrastructure::extractor::process::ProcessExtractor;

    let dir = tempfile::tempdir().unwrap();
    let extractor = ProcessExtractor::new(
        "sh",
        vec![
            "-c".into(),
            "printf 'x.png 0.5 0.5\\ny.png 0.5 0.4\\n' > image_features.txt".into(),
        ],
    )
    .with_working_dir(dir.path());
    let sim = gallery(dir.path(), Arc::new(extractor));

    let report = sim.reindex().await.unwrap();
    assert_eq!(report.records, 2);
    assert_eq!(sim.similar("x.png", &[], 5).unwrap()[0].name, "y.png");
}
