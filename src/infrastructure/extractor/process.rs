use crate::domain::error::GalleryError;
use crate::domain::ports::feature_extractor::FeatureExtractor;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

/// Runs the external feature-extraction binary and waits for it to exit.
pub struct ProcessExtractor {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

#[async_trait]
impl FeatureExtractor for ProcessExtractor {
    fn name(&self) -> &str {
        &self.program
    }

    async fn extract(&self) -> Result<(), GalleryError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::info!(program = %self.program, args = ?self.args, "running feature extractor");
        let output = cmd
            .output()
            .await
            .map_err(|e| GalleryError::Extraction(format!("Failed to start {}: {e}", self.program)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!(program = %self.program, "{line}");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GalleryError::Extraction(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
