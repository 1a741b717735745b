//! API surface scanning by filename keyword.

use crate::walk::{walk_files, WalkOptions};
use repoprofile_core::MAX_API_FILES;
use std::path::Path;

/// Keywords suggesting API/route/controller code.
const API_KEYWORDS: &[&str] = &["api", "route", "endpoint", "controller"];

/// Record relative paths of files whose names suggest an API surface.
///
/// Full-tree walk excluding only hidden entries; capped at
/// [`MAX_API_FILES`] in sorted traversal order.
pub fn scan_api_files(root: &Path) -> Vec<String> {
    let options = WalkOptions {
        excluded_dirs: &[],
        include_hidden_files: false,
    };

    let mut api_files = Vec::new();
    for file in walk_files(root, &options) {
        if api_files.len() >= MAX_API_FILES {
            break;
        }
        let lower = file.file_name().to_lowercase();
        if API_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            api_files.push(file.rel_display());
        }
    }

    api_files
}
