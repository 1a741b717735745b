//! Error types for repoprofile-remote

use thiserror::Error;

/// Result type alias using [`RemoteError`].
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Errors from reference resolution and repository fetching.
///
/// All of these abort the run; nothing past a successful fetch is fatal.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The string does not match any known repository-reference pattern.
    #[error("not a recognized repository URL: {0}")]
    InvalidReference(String),

    /// The git executable is not available.
    #[error("git executable not found on PATH")]
    GitNotFound,

    /// The working-copy directory could not be created.
    #[error("failed to create working-copy directory: {0}")]
    TempDir(#[source] std::io::Error),

    /// The clone process exited non-zero.
    #[error("clone failed for {url}: {message}")]
    CloneFailed {
        /// Repository URL passed to git.
        url: String,
        /// Diagnostic text from the clone process.
        message: String,
    },
}
