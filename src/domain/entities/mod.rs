pub mod feature_record;
pub mod feature_store;
pub mod snapshot;
