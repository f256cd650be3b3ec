pub mod rank_request;
pub mod similarity;
