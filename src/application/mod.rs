pub mod reindex;
pub mod reload;
pub mod sample;
pub mod similar;
pub mod stats;
pub mod store_handle;
