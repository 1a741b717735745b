//! package.json inspection

use crate::frameworks::frameworks_matching;
use crate::inspect::StackBuilder;
use crate::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Read declared runtime and development dependency names from
/// `package.json`: both feed the framework keyword table, runtime names feed
/// the dependency list.
pub(crate) fn inspect(path: &Path, builder: &mut StackBuilder) -> Result<()> {
    let content = std::fs::read_to_string(path)?;
    let pkg: PackageJson = serde_json::from_str(&content)?;

    for name in pkg.dependencies.keys().chain(pkg.dev_dependencies.keys()) {
        for framework in frameworks_matching(name) {
            builder.add_framework(framework);
        }
    }

    builder.add_dependencies(pkg.dependencies.keys().cloned());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_package_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(
            &path,
            r#"
{
  "name": "test",
  "version": "1.0.0",
  "dependencies": {
    "react": "^18.0.0",
    "lodash": "^4.17.0"
  },
  "devDependencies": {
    "vue-loader": "^17.0.0"
  }
}
"#,
        )
        .unwrap();

        let mut builder = StackBuilder::default();
        inspect(&path, &mut builder).unwrap();
        let stack = builder.into_stack();

        assert!(stack.frameworks.contains("React"));
        assert!(stack.frameworks.contains("Vue"));
        assert_eq!(stack.dependencies, vec!["lodash", "react"]);
    }

    #[test]
    fn test_malformed_package_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut builder = StackBuilder::default();
        assert!(inspect(&path, &mut builder).is_err());
    }

    #[test]
    fn test_dependency_cap() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        let deps: Vec<String> = (0..30)
            .map(|i| format!("\"pkg{i:02}\": \"1.0.0\""))
            .collect();
        std::fs::write(
            &path,
            format!("{{\"dependencies\": {{{}}}}}", deps.join(", ")),
        )
        .unwrap();

        let mut builder = StackBuilder::default();
        inspect(&path, &mut builder).unwrap();
        let stack = builder.into_stack();

        assert_eq!(
            stack.dependencies.len(),
            repoprofile_core::MAX_DEPENDENCIES_PER_SOURCE
        );
    }
}
