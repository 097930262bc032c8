//! Environment-driven configuration.

mod logging_config;
pub use logging_config::*;
