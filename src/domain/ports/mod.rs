pub mod feature_extractor;
pub mod feature_source;
pub mod image_catalog;
