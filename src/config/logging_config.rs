use simplelog::LevelFilter;
use std::env;

use crate::constants::{DEFAULT_LOG_FILE_PATH, DEFAULT_LOG_LEVEL, DEFAULT_LOG_MODE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub mode: String,
    pub level: LevelFilter,
    pub file_path: String,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            mode: env::var("LOG_MODE")
                .unwrap_or_else(|_| DEFAULT_LOG_MODE.to_string())
                .to_lowercase(),
            level: parse_log_level(
                &env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            ),
            file_path: env::var("LOG_FILE_PATH")
                .unwrap_or_else(|_| DEFAULT_LOG_FILE_PATH.to_string()),
        }
    }

    pub fn is_file_mode(&self) -> bool {
        self.mode == "file"
    }
}

/// Unknown levels fall back to `Info`.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
