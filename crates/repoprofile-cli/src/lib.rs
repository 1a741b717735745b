//! Repoprofile CLI library components.
//!
//! This crate provides the command-line interface for the repository
//! profiler. The main binary is in `main.rs`.

// Module declarations
pub mod analyze;
pub mod formatters;

// Re-export core types for convenience
pub use repoprofile_core::{EntryPoints, RepoReport, TechStack};
