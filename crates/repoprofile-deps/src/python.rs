//! requirements.txt inspection

use crate::frameworks::frameworks_matching;
use crate::inspect::StackBuilder;
use crate::Result;
use std::path::Path;

/// Strip `==` / `>=` version specifiers to a bare package name.
fn bare_name(line: &str) -> &str {
    let name = line.split("==").next().unwrap_or(line);
    let name = name.split(">=").next().unwrap_or(name);
    name.trim()
}

/// Read pinned dependency names from `requirements.txt`, skipping comments
/// and blank lines. Names feed both the dependency list and the framework
/// keyword table.
pub(crate) fn inspect(path: &Path, builder: &mut StackBuilder) -> Result<()> {
    let content = std::fs::read_to_string(path)?;

    let names: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| bare_name(line).to_string())
        .collect();

    for name in &names {
        for framework in frameworks_matching(name) {
            builder.add_framework(framework);
        }
    }

    builder.add_dependencies(names);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_requirements() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        std::fs::write(&path, "flask==2.0\n# comment\n\nrequests>=2\n").unwrap();

        let mut builder = StackBuilder::default();
        inspect(&path, &mut builder).unwrap();
        let stack = builder.into_stack();

        assert_eq!(stack.dependencies, vec!["flask", "requests"]);
        assert!(stack.frameworks.contains("Flask"));
    }

    #[test]
    fn test_bare_name_strips_specifiers() {
        assert_eq!(bare_name("flask==2.0"), "flask");
        assert_eq!(bare_name("requests>=2"), "requests");
        assert_eq!(bare_name("plain"), "plain");
        assert_eq!(bare_name("  spaced == 1 "), "spaced");
    }

    #[test]
    fn test_dependency_cap() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        let lines: Vec<String> = (0..25).map(|i| format!("pkg{i:02}==1.0")).collect();
        std::fs::write(&path, lines.join("\n")).unwrap();

        let mut builder = StackBuilder::default();
        inspect(&path, &mut builder).unwrap();

        assert_eq!(
            builder.into_stack().dependencies.len(),
            repoprofile_core::MAX_DEPENDENCIES_PER_SOURCE
        );
    }
}
