pub mod analyze;
pub mod config;
pub mod format;
pub mod utils;
