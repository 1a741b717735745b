//! The profiling report and its caps.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Maximum number of characters kept from a description file.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Maximum number of dependency names taken from a single manifest.
pub const MAX_DEPENDENCIES_PER_SOURCE: usize = 20;

/// Maximum number of interesting filenames recorded per directory.
pub const MAX_FILES_PER_DIR: usize = 10;

/// Maximum number of entry-point candidates in the `main` bucket.
pub const MAX_MAIN_FILES: usize = 10;

/// Maximum number of entry-point candidates in the `config` bucket.
pub const MAX_CONFIG_FILES: usize = 15;

/// Maximum number of entry-point candidates in the `test` bucket.
pub const MAX_TEST_FILES: usize = 10;

/// Maximum number of recorded API surface files.
pub const MAX_API_FILES: usize = 15;

/// Sentinel dominant language when no file matched a known extension.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Frameworks, dependency names and build tools surfaced from manifests.
///
/// `dependencies` keeps insertion order (per-manifest order, manifests in a
/// fixed sequence) and is deduplicated across manifest sources. The sets are
/// ordered so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStack {
    /// Recognized framework and ecosystem tags (e.g. "Flask", "Cargo/Rust").
    pub frameworks: BTreeSet<String>,

    /// Declared dependency names, capped per source, deduplicated across
    /// sources.
    pub dependencies: Vec<String>,

    /// Build tools inferred from build-description files.
    pub build_tools: BTreeSet<String>,
}

/// Heuristically classified entry-point, config and test files.
///
/// Each bucket is deduplicated, sorted lexicographically and truncated to its
/// cap. A file may appear in more than one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoints {
    /// Probable executable starting points (≤ [`MAX_MAIN_FILES`]).
    pub main: Vec<String>,

    /// Configuration and project files (≤ [`MAX_CONFIG_FILES`]).
    pub config: Vec<String>,

    /// Test files (≤ [`MAX_TEST_FILES`]).
    pub test: Vec<String>,
}

/// The single output value of a profiling run.
///
/// Built once by the orchestrator from the typed values each stage returns.
/// Every path in the report is relative to the working-copy root; the working
/// copy itself is gone by the time the report is handed to a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoReport {
    /// First description file found, truncated to
    /// [`MAX_DESCRIPTION_CHARS`] characters. Empty when none was readable.
    pub description: String,

    /// File count per recognized language.
    pub languages: BTreeMap<String, usize>,

    /// Language with the highest file count, ties broken lexicographically;
    /// [`UNKNOWN_LANGUAGE`] when `languages` is empty.
    pub main_language: String,

    /// Frameworks, dependencies and build tools from manifest files.
    pub tech_stack: TechStack,

    /// Interesting filenames per directory, keyed by relative path
    /// ("root" for the top level). Sparse: directories with nothing
    /// interesting have no entry.
    pub structure: BTreeMap<String, Vec<String>>,

    /// Entry-point / config / test classification.
    pub entry_points: EntryPoints,

    /// Files whose names suggest API surfaces (≤ [`MAX_API_FILES`]).
    pub api_files: Vec<String>,
}
