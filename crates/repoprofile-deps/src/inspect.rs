//! Manifest inspection over a working-copy root.

use crate::{npm, python, Error, Result};
use repoprofile_core::{TechStack, MAX_DEPENDENCIES_PER_SOURCE};
use std::collections::BTreeSet;
use std::path::Path;

/// A manifest whose contribution was skipped, and why.
///
/// Skips are explicit values rather than silently-absent data, so tests and
/// logs can tell a failed manifest from a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSkip {
    /// Manifest filename at the working-copy root.
    pub file: String,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Result of inspecting all recognized manifests.
#[derive(Debug, Clone, Default)]
pub struct InspectionReport {
    /// Aggregated frameworks, dependencies and build tools.
    pub tech_stack: TechStack,
    /// Manifests that were present but could not contribute.
    pub skipped: Vec<ManifestSkip>,
}

/// Accumulates tech-stack contributions with cross-source deduplication.
#[derive(Debug, Default)]
pub(crate) struct StackBuilder {
    stack: TechStack,
    seen: BTreeSet<String>,
}

impl StackBuilder {
    pub(crate) fn add_framework(&mut self, name: &str) {
        self.stack.frameworks.insert(name.to_string());
    }

    pub(crate) fn add_build_tool(&mut self, name: &str) {
        self.stack.build_tools.insert(name.to_string());
    }

    /// Append up to [`MAX_DEPENDENCIES_PER_SOURCE`] names from one manifest,
    /// dropping names an earlier manifest already contributed.
    pub(crate) fn add_dependencies<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names.into_iter().take(MAX_DEPENDENCIES_PER_SOURCE) {
            if self.seen.insert(name.clone()) {
                self.stack.dependencies.push(name);
            }
        }
    }

    pub(crate) fn into_stack(self) -> TechStack {
        self.stack
    }
}

/// Inspect every recognized manifest at the working-copy root.
///
/// Each manifest gets a format-specific extraction; any individual failure
/// is recorded on the report and the run continues with the remaining
/// manifests. Never fatal.
pub fn inspect_manifests(root: &Path) -> InspectionReport {
    let mut builder = StackBuilder::default();
    let mut skipped = Vec::new();

    let mut run = |file: &str, outcome: Result<()>| {
        if let Err(e) = outcome {
            tracing::warn!(manifest = file, "manifest skipped: {e}");
            skipped.push(ManifestSkip {
                file: file.to_string(),
                reason: e.to_string(),
            });
        }
    };

    let package_json = root.join("package.json");
    if package_json.is_file() {
        run("package.json", npm::inspect(&package_json, &mut builder));
    }

    let requirements = root.join("requirements.txt");
    if requirements.is_file() {
        run(
            "requirements.txt",
            python::inspect(&requirements, &mut builder),
        );
    }

    let go_mod = root.join("go.mod");
    if go_mod.is_file() {
        run("go.mod", inspect_go_mod(&go_mod, &mut builder));
    }

    let cargo_toml = root.join("Cargo.toml");
    if cargo_toml.is_file() {
        // Presence alone records the ecosystem tag; key extraction is
        // best-effort on top
        builder.add_framework("Cargo/Rust");
        run("Cargo.toml", inspect_cargo_toml(&cargo_toml, &mut builder));
    }

    if root.join("pom.xml").is_file() {
        builder.add_framework("Maven/Java");
        builder.add_build_tool("Maven");
    }

    if root.join("build.gradle").is_file() {
        builder.add_build_tool("Gradle");
    }

    InspectionReport {
        tech_stack: builder.into_stack(),
        skipped,
    }
}

/// A multi-dependency `require (` block marks use of the Go module system.
fn inspect_go_mod(path: &Path, builder: &mut StackBuilder) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    if content
        .lines()
        .any(|line| line.trim_start().starts_with("require ("))
    {
        builder.add_framework("Go Modules");
    }
    Ok(())
}

/// Surface `[dependencies]` keys from Cargo.toml.
fn inspect_cargo_toml(path: &Path, builder: &mut StackBuilder) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content).map_err(Error::Toml)?;

    if let Some(deps) = value.get("dependencies").and_then(|d| d.as_table()) {
        builder.add_dependencies(deps.keys().cloned());
    }

    Ok(())
}
