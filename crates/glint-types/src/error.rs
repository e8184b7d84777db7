//! Error types for GLINT.

use std::io;

/// Errors produced by the GLINT framework.
#[derive(Debug, thiserror::Error)]
pub enum GlintError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("bitmap error: {0}")]
    Bitmap(String),

    #[error("stylesheet error: {0}")]
    Stylesheet(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GlintError>;
