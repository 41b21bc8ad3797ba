//! Error types for the Spider Web system

use spiderweb_domain::StoreError;
use thiserror::Error;

/// General Spider Web error type
#[derive(Debug, Error)]
pub enum SpiderWebError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SpiderWebError>;
