//! Error types for quarto-offcanvas

use thiserror::Error;

/// Fatal errors. Anything recoverable is reported through
/// [`WarningSink`](crate::context::WarningSink) instead.
#[derive(Error, Debug)]
pub enum OffcanvasError {
    #[error("[{extension}] invalid configuration: {message}")]
    InvalidConfig { extension: String, message: String },

    #[error("[{extension}] option '{key}' expects {expected}, found {found}")]
    InvalidOption {
        extension: String,
        key: String,
        expected: String,
        found: String,
    },

    #[error("Schema error: {0}")]
    Schema(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OffcanvasError {
    pub fn invalid_config(extension: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            extension: extension.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OffcanvasError>;
