//! # repoprofile-scan
//!
//! Filename-level heuristic scanners over a working copy:
//!
//! - [`description::extract_description`]: first README-style file, truncated
//! - [`language::classify_languages`]: extension histogram + dominant language
//! - [`structure::summarize_structure`]: per-directory interesting filenames
//! - [`entry_points::locate_entry_points`]: main/config/test buckets
//! - [`api::scan_api_files`]: files whose names suggest API surfaces
//!
//! All scanners share the deterministic walker in [`walk`]: sorted directory
//! entries, explicit exclusion sets, per-entry errors skipped. None of them
//! read file contents except the description extractor, and none are fatal;
//! a scanner that finds nothing contributes an empty value.

pub mod api;
pub mod description;
pub mod entry_points;
pub mod language;
pub mod structure;
pub mod walk;

pub use api::scan_api_files;
pub use description::extract_description;
pub use entry_points::locate_entry_points;
pub use language::{classify_languages, LanguageBreakdown};
pub use structure::summarize_structure;
pub use walk::{walk_files, WalkOptions, WalkedFile};
