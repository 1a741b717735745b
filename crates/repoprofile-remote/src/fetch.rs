//! Shallow-clone fetching into an ephemeral working copy.

use crate::{RemoteError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The ephemeral local snapshot of the repository under analysis.
///
/// Owns the temporary directory the clone landed in; dropping the value
/// removes the directory. That makes cleanup run on every exit path of a
/// profiling run: normal return, error propagation and panic unwinding.
/// One working copy per invocation, never shared.
pub struct WorkingCopy {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl WorkingCopy {
    pub(crate) fn new(temp_dir: TempDir) -> Self {
        Self {
            path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        }
    }

    /// Root of the working copy. All report paths are relative to this.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Materialize a shallow, depth-1 clone of `url` into a fresh working copy.
///
/// The temporary directory exists before the clone process runs; on clone
/// failure it is removed before the error is returned.
pub fn fetch(url: &str) -> Result<WorkingCopy> {
    check_git_available()?;

    let temp_dir = TempDir::with_prefix("repoprofile-").map_err(RemoteError::TempDir)?;
    tracing::info!(path = %temp_dir.path().display(), "cloning repository");

    execute_clone(url, temp_dir.path())?;

    Ok(WorkingCopy::new(temp_dir))
}

fn check_git_available() -> Result<()> {
    Command::new("git")
        .arg("--version")
        .output()
        .map_err(|_| RemoteError::GitNotFound)?;
    Ok(())
}

/// Run `git clone` with a shallow depth and hooks disabled.
fn execute_clone(url: &str, path: &Path) -> Result<()> {
    let mut cmd = Command::new("git");

    // Hooks from the cloned repository must never run
    cmd.env("GIT_TEMPLATE_DIR", "");
    cmd.args([
        "clone",
        "--depth",
        "1",
        "--single-branch",
        "--no-tags",
        "-c",
        "core.hooksPath=/dev/null",
        "-c",
        "advice.detachedHead=false",
    ]);
    cmd.arg(url);
    cmd.arg(path);

    let output = cmd.output().map_err(|e| RemoteError::CloneFailed {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RemoteError::CloneFailed {
            url: url.to_string(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(())
}
