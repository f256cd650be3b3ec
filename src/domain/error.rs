use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Feature source not found: {}", .0.display())]
    AbsentSource(PathBuf),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown query image: {0}")]
    UnknownQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Download error: {0}")]
    Download(String),
}

impl GalleryError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        GalleryError::Parse {
            line,
            message: message.into(),
        }
    }

    /// True for the condition a caller may treat as "zero records".
    pub fn is_absent_source(&self) -> bool {
        matches!(self, GalleryError::AbsentSource(_))
    }
}

