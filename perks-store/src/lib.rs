pub mod app_config;
pub mod saved;

pub use app_config::Config;
pub use saved::{JsonFileStore, MemoryStore};
