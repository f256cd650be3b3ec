use crate::domain::error::GalleryError;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ResNet-50 v1-7 from the ONNX model zoo, the network the extractor runs.
pub const DEFAULT_MODEL_URL: &str =
    "https://github.com/onnx/models/raw/main/vision/classification/resnet/model/resnet50-v1-7.onnx";

/// Fetches the extractor's model file over HTTP.
pub struct ModelDownloader {
    url: String,
    dest: PathBuf,
    client: reqwest::Client,
}

impl ModelDownloader {
    pub fn new(url: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            dest: dest.into(),
            client: reqwest::Client::builder()
                .user_agent("imagesim/0.1")
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Download the model and return the number of bytes written.
    pub async fn download(&self) -> Result<u64, GalleryError> {
        tracing::info!(url = %self.url, dest = %self.dest.display(), "downloading model");

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GalleryError::Download(format!("Request to {} failed: {e}", self.url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GalleryError::Download(format!(
                "{} returned HTTP {status}",
                self.url
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GalleryError::Download(format!("Failed to read body: {e}")))?;

        let size = install(&self.dest, &body).await?;
        tracing::info!(bytes = size, dest = %self.dest.display(), "model downloaded");
        Ok(size)
    }
}

/// Write `body` beside `dest` and rename it into place. The staging file is
/// removed if either step fails.
async fn install(dest: &Path, body: &[u8]) -> Result<u64, GalleryError> {
    let staging = staging_path(dest);
    if let Err(e) = tokio::fs::write(&staging, body).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(GalleryError::Io(format!(
            "Failed to write {}: {e}",
            staging.display()
        )));
    }
    if let Err(e) = tokio::fs::rename(&staging, dest).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(GalleryError::Io(format!(
            "Failed to move model into {}: {e}",
            dest.display()
        )));
    }
    Ok(body.len() as u64)
}

fn staging_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "model".into());
    name.push(".part");
    dest.with_file_name(name)
}
