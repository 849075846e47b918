//! Error types for rendering and serialization.

use thiserror::Error;

/// Errors that can occur while rendering a registry.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the rendered output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
