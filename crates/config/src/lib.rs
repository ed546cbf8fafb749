//! Configuration management for the bank chat engine
//!
//! Supports loading configuration from:
//! - TOML files
//! - Environment variables (`BANKBOT_` prefix)
//!
//! Everything has a sensible default, so an empty configuration is valid.

pub mod settings;
pub mod templates;

pub use settings::{Settings, StorageConfig};
pub use templates::ReplyTemplates;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
