//! Deterministic tree traversal shared by every scanner.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories the language classifier never descends into.
pub const LANGUAGE_EXCLUDED_DIRS: &[&str] =
    &["node_modules", "__pycache__", "venv", "dist", "build"];

/// Directories the entry-point locator never descends into.
pub const ENTRY_POINT_EXCLUDED_DIRS: &[&str] =
    &["node_modules", "__pycache__", "venv", "dist", "build", ".git"];

/// Directories the structure summarizer never descends into.
pub const STRUCTURE_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    "venv",
    ".git",
    "dist",
    "build",
    "target",
    "vendor",
];

/// Options controlling a tree walk.
///
/// Hidden directories are always skipped; whether hidden files are visited
/// varies per scanner (the language classifier counts them, the rest do not).
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Directory names never descended into.
    pub excluded_dirs: &'static [&'static str],
    /// Whether dot-prefixed files are yielded.
    pub include_hidden_files: bool,
}

/// A regular file visited during a walk.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the walk root.
    pub rel: PathBuf,
}

impl WalkedFile {
    /// Final path component as UTF-8 (lossy).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Relative path as UTF-8 (lossy).
    pub fn rel_display(&self) -> String {
        self.rel.to_string_lossy().into_owned()
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Walk all regular files under `root`, sorted by file name per directory.
///
/// The exclusion set and hidden-file policy come from `options`; entries that
/// cannot be read are skipped, never fatal. The sorted order makes every
/// downstream cap and tie-break deterministic.
pub fn walk_files(root: &Path, options: &WalkOptions) -> Vec<WalkedFile> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                !is_hidden(&name) && !options.excluded_dirs.contains(&name.as_ref())
            } else {
                options.include_hidden_files || !is_hidden(&name)
            }
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path().to_path_buf();
        let rel = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        files.push(WalkedFile { path, rel });
    }

    files
}
