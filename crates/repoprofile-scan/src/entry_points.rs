//! Entry-point, config and test file classification.

use crate::walk::{walk_files, WalkOptions, ENTRY_POINT_EXCLUDED_DIRS};
use repoprofile_core::{EntryPoints, MAX_CONFIG_FILES, MAX_MAIN_FILES, MAX_TEST_FILES};
use std::collections::BTreeSet;
use std::path::Path;

/// Keywords marking a probable executable starting point.
const MAIN_KEYWORDS: &[&str] = &["main", "app", "index", "server", "cli", "run"];

/// Extensions a main candidate must carry.
const MAIN_EXTENSIONS: &[&str] = &["py", "js", "ts", "go", "rs", "java", "rb", "sh"];

/// Keywords marking configuration files.
const CONFIG_KEYWORDS: &[&str] = &["config", "settings", ".env", "setup"];

/// Exact filenames always classified as config.
const CANONICAL_CONFIG_FILES: &[&str] = &[
    "package.json",
    "requirements.txt",
    "Cargo.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "Makefile",
    "Dockerfile",
];

/// Keywords marking test files.
const TEST_KEYWORDS: &[&str] = &["test", "spec", "__tests__"];

/// Filename suffixes marking test files.
const TEST_SUFFIXES: &[&str] = &[
    ".test.js", ".test.ts", ".spec.js", ".spec.ts", "_test.py", "_test.go",
];

fn is_main_candidate(file_name: &str, lower: &str) -> bool {
    let has_keyword = MAIN_KEYWORDS.iter().any(|kw| lower.contains(kw));
    let has_extension = MAIN_EXTENSIONS
        .iter()
        .any(|ext| file_name.rsplit_once('.').is_some_and(|(_, e)| e == *ext));
    has_keyword && has_extension
}

fn is_config_candidate(file_name: &str, lower: &str) -> bool {
    CONFIG_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || CANONICAL_CONFIG_FILES.contains(&file_name)
}

fn is_test_candidate(lower: &str) -> bool {
    TEST_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || TEST_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Deduplicated, lexicographically sorted, capped bucket.
fn into_bucket(paths: BTreeSet<String>, cap: usize) -> Vec<String> {
    paths.into_iter().take(cap).collect()
}

/// Classify every non-hidden file into main/config/test buckets by filename
/// substring and suffix heuristics. A file may land in more than one bucket;
/// buckets are deduplicated, sorted and truncated to their caps.
pub fn locate_entry_points(root: &Path) -> EntryPoints {
    let options = WalkOptions {
        excluded_dirs: ENTRY_POINT_EXCLUDED_DIRS,
        include_hidden_files: false,
    };

    let mut main = BTreeSet::new();
    let mut config = BTreeSet::new();
    let mut test = BTreeSet::new();

    for file in walk_files(root, &options) {
        let file_name = file.file_name();
        let lower = file_name.to_lowercase();
        let rel = file.rel_display();

        if is_main_candidate(&file_name, &lower) {
            main.insert(rel.clone());
        }
        if is_config_candidate(&file_name, &lower) {
            config.insert(rel.clone());
        }
        if is_test_candidate(&lower) {
            test.insert(rel);
        }
    }

    EntryPoints {
        main: into_bucket(main, MAX_MAIN_FILES),
        config: into_bucket(config, MAX_CONFIG_FILES),
        test: into_bucket(test, MAX_TEST_FILES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_main_requires_keyword_and_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.py");
        touch(temp.path(), "server.go");
        touch(temp.path(), "main.txt");
        touch(temp.path(), "helper.py");

        let entry_points = locate_entry_points(temp.path());
        assert_eq!(entry_points.main, vec!["main.py", "server.go"]);
    }

    #[test]
    fn test_config_by_keyword_or_canonical_name() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "settings.toml");
        touch(temp.path(), "Makefile");
        touch(temp.path(), "notes.md");

        let entry_points = locate_entry_points(temp.path());
        assert_eq!(entry_points.config, vec!["Makefile", "settings.toml"]);
    }

    #[test]
    fn test_test_bucket_by_keyword_and_suffix() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "tests/unit.py");
        touch(temp.path(), "src/parser_test.go");
        touch(temp.path(), "src/widget.spec.ts");
        touch(temp.path(), "src/parser.go");

        let entry_points = locate_entry_points(temp.path());
        assert_eq!(
            entry_points.test,
            vec!["src/parser_test.go", "src/widget.spec.ts", "tests/unit.py"]
        );
    }

    #[test]
    fn test_file_may_land_in_multiple_buckets() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "test_app.py");

        let entry_points = locate_entry_points(temp.path());
        assert_eq!(entry_points.main, vec!["test_app.py"]);
        assert_eq!(entry_points.test, vec!["test_app.py"]);
    }

    #[test]
    fn test_buckets_are_deduplicated_and_capped() {
        let temp = TempDir::new().unwrap();
        for i in 0..20 {
            touch(temp.path(), &format!("bin{i:02}/main.rs"));
        }

        let entry_points = locate_entry_points(temp.path());
        assert_eq!(entry_points.main.len(), MAX_MAIN_FILES);
        let unique: BTreeSet<_> = entry_points.main.iter().collect();
        assert_eq!(unique.len(), entry_points.main.len());
        // Sorted truncation keeps the lexicographically first candidates
        assert_eq!(entry_points.main[0], "bin00/main.rs");
    }

    #[test]
    fn test_hidden_files_not_classified() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), ".env");

        let entry_points = locate_entry_points(temp.path());
        assert!(entry_points.config.is_empty());
    }

    #[test]
    fn test_excluded_dirs_not_classified() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "node_modules/pkg/index.js");
        touch(temp.path(), "dist/app.js");

        let entry_points = locate_entry_points(temp.path());
        assert!(entry_points.main.is_empty());
    }
}
