//! Analysis orchestration: fetch once, scan in sequence, clean up always.

use anyhow::Result;
use repoprofile_core::RepoReport;
use repoprofile_deps::inspect_manifests;
use repoprofile_remote::{fetch, RepoReference};
use repoprofile_scan::{
    classify_languages, extract_description, locate_entry_points, scan_api_files,
    summarize_structure,
};
use std::path::Path;

/// Profile the repository behind `url` and return the completed report.
///
/// Reference resolution and the clone are the only fatal steps; they
/// propagate to the caller. The working copy is removed on every exit path
/// because [`repoprofile_remote::WorkingCopy`] cleans up when dropped,
/// whether this function returns, errors or unwinds.
pub fn analyze(url: &str) -> Result<RepoReport> {
    // Step 1: Resolve the reference (fatal on failure)
    let reference = RepoReference::parse(url)?;
    tracing::info!(
        owner = %reference.owner,
        name = %reference.name,
        "resolved repository reference"
    );

    // Step 2: Materialize the working copy (fatal on failure)
    let working_copy = fetch(url)?;

    // Step 3: Run the scanners; nothing past this point is fatal
    let report = profile_tree(working_copy.path());

    // Step 4: Remove the working copy before handing the report out
    drop(working_copy);

    Ok(report)
}

/// Run the full scanner sequence against a directory tree.
///
/// Split out from [`analyze`] so the post-fetch pipeline can run against any
/// local tree; every path in the returned report is relative to `root`.
pub fn profile_tree(root: &Path) -> RepoReport {
    let description = extract_description(root);
    let breakdown = classify_languages(root);
    let inspection = inspect_manifests(root);
    let structure = summarize_structure(root);
    let entry_points = locate_entry_points(root);
    let api_files = scan_api_files(root);

    for skip in &inspection.skipped {
        tracing::warn!(manifest = %skip.file, reason = %skip.reason, "manifest contribution skipped");
    }

    RepoReport {
        description,
        languages: breakdown.languages,
        main_language: breakdown.main_language,
        tech_stack: inspection.tech_stack,
        structure,
        entry_points,
        api_files,
    }
}
