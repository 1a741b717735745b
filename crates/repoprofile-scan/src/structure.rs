//! Shallow directory-structure digest.

use crate::walk::{walk_files, WalkOptions, STRUCTURE_EXCLUDED_DIRS};
use repoprofile_core::MAX_FILES_PER_DIR;
use std::collections::BTreeMap;
use std::path::Path;

/// Source suffixes that make a filename interesting for the digest.
const INTERESTING_SUFFIXES: &[&str] = &["py", "js", "ts", "go", "rs", "java", "rb"];

/// Canonical project filenames always worth recording.
const CANONICAL_PROJECT_FILES: &[&str] = &[
    "README.md",
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
];

fn is_interesting(file_name: &str, extension: Option<&str>) -> bool {
    if CANONICAL_PROJECT_FILES.contains(&file_name) {
        return true;
    }
    extension.is_some_and(|ext| INTERESTING_SUFFIXES.contains(&ext))
}

/// Record up to [`MAX_FILES_PER_DIR`] interesting filenames per directory,
/// keyed by the directory's path relative to `root` ("root" for the top
/// level). Directories with nothing interesting produce no entry.
pub fn summarize_structure(root: &Path) -> BTreeMap<String, Vec<String>> {
    let options = WalkOptions {
        excluded_dirs: STRUCTURE_EXCLUDED_DIRS,
        include_hidden_files: false,
    };

    let mut structure: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for file in walk_files(root, &options) {
        let file_name = file.file_name();
        let extension = file.path.extension().map(|e| e.to_string_lossy().into_owned());
        if !is_interesting(&file_name, extension.as_deref()) {
            continue;
        }

        let dir_key = match file.rel.parent() {
            Some(parent) if parent.as_os_str().is_empty() => "root".to_string(),
            Some(parent) => parent.to_string_lossy().into_owned(),
            None => "root".to_string(),
        };

        let entries = structure.entry(dir_key).or_default();
        if entries.len() < MAX_FILES_PER_DIR {
            entries.push(file_name);
        }
    }

    structure
}
