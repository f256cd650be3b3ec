pub mod catalog;
pub mod extractor;
pub mod features;
pub mod model;
