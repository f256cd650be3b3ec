use crate::infrastructure::model::download::DEFAULT_MODEL_URL;
use std::path::PathBuf;

/// Runtime settings, read from `IMAGESIM_*` environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub features_path: PathBuf,
    pub image_dir: PathBuf,
    pub extractor: String,
    pub extractor_args: Vec<String>,
    pub model_path: PathBuf,
    pub model_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            features_path: PathBuf::from("image_features.txt"),
            image_dir: PathBuf::from("static"),
            extractor: "./feature_extractor".into(),
            extractor_args: vec![],
            model_path: PathBuf::from("resnet50-v1-7.onnx"),
            model_url: DEFAULT_MODEL_URL.into(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset or empty keys fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();
        Self {
            features_path: get("IMAGESIM_FEATURES")
                .map(PathBuf::from)
                .unwrap_or(defaults.features_path),
            image_dir: get("IMAGESIM_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            extractor: get("IMAGESIM_EXTRACTOR").unwrap_or(defaults.extractor),
            extractor_args: get("IMAGESIM_EXTRACTOR_ARGS")
                .map(|s| s.split_whitespace().map(String::from).collect())
                .unwrap_or(defaults.extractor_args),
            model_path: get("IMAGESIM_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            model_url: get("IMAGESIM_MODEL_URL").unwrap_or(defaults.model_url),
        }
    }
}
