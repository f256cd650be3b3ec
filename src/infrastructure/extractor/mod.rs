pub mod noop;
pub mod process;
