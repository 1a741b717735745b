//! Error types for repoprofile-deps

use thiserror::Error;

/// Result type alias using repoprofile-deps [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from reading an individual manifest.
///
/// These never abort a run; [`crate::inspect_manifests`] converts them into
/// [`crate::ManifestSkip`] records.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
