//! Application Configuration

use log::LevelFilter;

/// Settings fixed at bootstrap
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the serialized item list
    pub storage_key: String,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "data".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
