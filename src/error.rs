//! Error types for skillmap.
//!
//! The taxonomy and search core is total and never fails; these errors
//! only come from the edges (configuration, snapshot files, CLI input).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkmError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SkmError {
    /// Stable machine-readable code for robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::Snapshot(_) => "snapshot",
            Self::InvalidKey(_) => "invalid_key",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkmError>;
