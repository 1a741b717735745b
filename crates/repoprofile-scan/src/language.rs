//! Dominant-language detection from a file-extension histogram.

use crate::walk::{walk_files, WalkOptions, LANGUAGE_EXCLUDED_DIRS};
use repoprofile_core::UNKNOWN_LANGUAGE;
use std::collections::BTreeMap;
use std::path::Path;

/// Extension table, in declaration order. A file counts for the first
/// language whose extension set contains its (lowercased) extension, so the
/// ambiguous `.h` goes to C++ rather than C.
const LANGUAGE_EXTENSIONS: &[(&str, &[&str])] = &[
    ("Python", &["py"]),
    ("JavaScript", &["js", "jsx", "mjs"]),
    ("TypeScript", &["ts", "tsx"]),
    ("Java", &["java"]),
    ("Go", &["go"]),
    ("Rust", &["rs"]),
    ("C++", &["cpp", "cc", "cxx", "hpp", "h"]),
    ("C", &["c", "h"]),
    ("Ruby", &["rb"]),
    ("Swift", &["swift"]),
    ("Kotlin", &["kt", "kts"]),
    ("PHP", &["php"]),
    ("C#", &["cs"]),
    ("Scala", &["scala"]),
];

/// Histogram over recognized languages plus the dominant one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBreakdown {
    /// File count per language; empty when nothing matched.
    pub languages: BTreeMap<String, usize>,
    /// Language with the highest count, ties broken lexicographically;
    /// [`UNKNOWN_LANGUAGE`] for an empty histogram.
    pub main_language: String,
}

/// Map a lowercased extension to its language, first table entry wins.
fn language_for_extension(ext: &str) -> Option<&'static str> {
    LANGUAGE_EXTENSIONS
        .iter()
        .find(|(_, exts)| exts.contains(&ext))
        .map(|(language, _)| *language)
}

/// Build the extension histogram for the tree under `root` and pick the
/// dominant language.
pub fn classify_languages(root: &Path) -> LanguageBreakdown {
    let options = WalkOptions {
        excluded_dirs: LANGUAGE_EXCLUDED_DIRS,
        include_hidden_files: true,
    };

    let mut languages: BTreeMap<String, usize> = BTreeMap::new();
    for file in walk_files(root, &options) {
        let Some(ext) = file.path.extension().map(|e| e.to_string_lossy().to_lowercase()) else {
            continue;
        };
        if let Some(language) = language_for_extension(&ext) {
            *languages.entry(language.to_string()).or_insert(0) += 1;
        }
    }

    // Sorted iteration plus a strict comparison: ties keep the
    // lexicographically smallest name
    let main_language = languages
        .iter()
        .fold(None::<(&String, usize)>, |best, (language, &count)| {
            match best {
                Some((_, best_count)) if count <= best_count => best,
                _ => Some((language, count)),
            }
        })
        .map(|(language, _)| language.clone())
        .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string());

    LanguageBreakdown {
        languages,
        main_language,
    }
}
