//! Owner/name extraction from repository URL strings.

use crate::{RemoteError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Ordered reference patterns; the first match wins.
///
/// Each pattern captures `(owner, name)` from a
/// `host[:/]owner/name[.git][/]` tail, which covers https URLs, ssh
/// `git@host:` forms and bare `host/owner/name` strings alike.
static REFERENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"github\.com[:/]([^/\s:]+)/([^/\s:]+?)(?:\.git)?/?$",
        r"gitlab\.com[:/]([^/\s:]+)/([^/\s:]+?)(?:\.git)?/?$",
        r"bitbucket\.org[:/]([^/\s:]+)/([^/\s:]+?)(?:\.git)?/?$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("reference pattern must compile"))
    .collect()
});

/// An owner/name pair extracted from a repository URL.
///
/// Invariant: both parts are non-empty, contain no path separators, and the
/// name carries no `.git` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name, `.git` suffix stripped.
    pub name: String,
}

impl RepoReference {
    /// Resolve a raw URL string into an owner/name pair.
    ///
    /// Applies the ordered pattern list and returns the first successful
    /// match. Pure function, no I/O.
    pub fn parse(url: &str) -> Result<Self> {
        for pattern in REFERENCE_PATTERNS.iter() {
            if let Some(captures) = pattern.captures(url) {
                let owner = captures[1].to_string();
                let name = captures[2].to_string();
                if !owner.is_empty() && !name.is_empty() {
                    return Ok(Self { owner, name });
                }
            }
        }

        Err(RemoteError::InvalidReference(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let reference = RepoReference::parse("https://github.com/owner/repo").unwrap();
        assert_eq!(reference.owner, "owner");
        assert_eq!(reference.name, "repo");
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let reference = RepoReference::parse("https://github.com/owner/repo.git").unwrap();
        assert_eq!(reference.owner, "owner");
        assert_eq!(reference.name, "repo");
    }

    #[test]
    fn test_parse_https_url_with_trailing_slash() {
        let reference = RepoReference::parse("https://github.com/owner/repo/").unwrap();
        assert_eq!(reference.name, "repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let reference = RepoReference::parse("git@github.com:owner/repo.git").unwrap();
        assert_eq!(reference.owner, "owner");
        assert_eq!(reference.name, "repo");
    }

    #[test]
    fn test_parse_bare_host_path() {
        let reference = RepoReference::parse("github.com/owner/repo").unwrap();
        assert_eq!(reference.owner, "owner");
        assert_eq!(reference.name, "repo");
    }

    #[test]
    fn test_parse_name_containing_dots() {
        let reference = RepoReference::parse("https://github.com/owner/my.repo.git").unwrap();
        assert_eq!(reference.name, "my.repo");
    }

    #[test]
    fn test_parse_other_hosts() {
        let reference = RepoReference::parse("https://gitlab.com/group/project").unwrap();
        assert_eq!(reference.owner, "group");
        assert_eq!(reference.name, "project");

        let reference = RepoReference::parse("git@bitbucket.org:team/tool.git").unwrap();
        assert_eq!(reference.owner, "team");
        assert_eq!(reference.name, "tool");
    }

    #[test]
    fn test_parse_rejects_non_repository_strings() {
        assert!(matches!(
            RepoReference::parse("not-a-url"),
            Err(RemoteError::InvalidReference(_))
        ));
        assert!(matches!(
            RepoReference::parse("https://example.com/owner/repo"),
            Err(RemoteError::InvalidReference(_))
        ));
        assert!(matches!(
            RepoReference::parse("https://github.com/owner-only"),
            Err(RemoteError::InvalidReference(_))
        ));
        assert!(matches!(
            RepoReference::parse(""),
            Err(RemoteError::InvalidReference(_))
        ));
    }
}
