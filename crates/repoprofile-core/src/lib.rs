//! Repoprofile Core - Report types shared by every analysis stage.
//!
//! This crate defines the single output value of a profiling run,
//! [`RepoReport`], together with the caps each stage applies to its own
//! contribution. It does no I/O; the scanners in `repoprofile-scan` and
//! `repoprofile-deps` produce the pieces and the CLI assembles them.

pub mod report;

pub use report::{EntryPoints, RepoReport, TechStack};
pub use report::{
    MAX_API_FILES, MAX_CONFIG_FILES, MAX_DEPENDENCIES_PER_SOURCE, MAX_DESCRIPTION_CHARS,
    MAX_FILES_PER_DIR, MAX_MAIN_FILES, MAX_TEST_FILES, UNKNOWN_LANGUAGE,
};
