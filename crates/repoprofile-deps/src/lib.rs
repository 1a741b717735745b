//! # repoprofile-deps
//!
//! Dependency-manifest inspection for the profiling pipeline.
//!
//! [`inspect_manifests`] reads the recognized manifest files at the
//! working-copy root and surfaces frameworks, dependency names and build
//! tools into a [`repoprofile_core::TechStack`]:
//!
//! - `package.json`: dependency names plus framework keyword matches
//! - `requirements.txt`: pinned package names plus framework keyword matches
//! - `go.mod`: require-block marker
//! - `Cargo.toml`: ecosystem tag plus `[dependencies]` keys
//! - `pom.xml` / `build.gradle`: JVM build-tool tags
//!
//! No manifest failure is fatal: an unreadable or malformed file becomes a
//! [`ManifestSkip`] on the result and the remaining manifests still
//! contribute.

pub mod error;
pub mod frameworks;
pub mod inspect;
pub mod npm;
pub mod python;

pub use error::{Error, Result};
pub use inspect::{inspect_manifests, InspectionReport, ManifestSkip};
