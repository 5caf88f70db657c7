use crate::ports::outbound::PackagesFileReader;
use crate::sbom_generation::domain::{ComponentScope, DotnetDependency};
use crate::shared::error::SbomError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

fn comment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid regex"))
}

fn packages_root_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<packages(\s[^>]*)?/?>").expect("Invalid regex"))
}

fn package_element_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<package\s([^>]*?)/?>").expect("Invalid regex"))
}

fn attribute_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid regex")
    })
}

/// PackagesConfigReader adapter reading legacy `packages.config` files
///
/// Each `<package id=".." version=".."/>` element becomes a package
/// dependency; packages marked `developmentDependency="true"` get the
/// `excluded` scope.
pub struct PackagesConfigReader;

impl PackagesConfigReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(&self, packages_path: &Path, content: &str) -> Result<HashSet<DotnetDependency>> {
        let parse_error = |details: String| SbomError::PackagesFileParseError {
            path: packages_path.to_path_buf(),
            details,
        };

        let content = comment_regex().replace_all(content, "");
        if !packages_root_regex().is_match(&content) {
            return Err(parse_error("Missing <packages> root element".to_string()).into());
        }

        let mut dependencies = HashSet::new();
        for element in package_element_regex().captures_iter(&content) {
            let attributes: HashMap<&str, String> = attribute_regex()
                .captures_iter(&element[1])
                .filter_map(|attribute| {
                    let name = attribute.get(1)?.as_str();
                    let value = attribute.get(2).or_else(|| attribute.get(3))?.as_str();
                    Some((name, unescape(value)))
                })
                .collect();

            let id = attributes
                .get("id")
                .filter(|id| !id.trim().is_empty())
                .ok_or_else(|| {
                    parse_error(format!("<package> element without id: {}", &element[0]))
                })?;
            let scope = match attributes.get("developmentDependency") {
                Some(value) if value.eq_ignore_ascii_case("true") => ComponentScope::Excluded,
                _ => ComponentScope::Required,
            };

            dependencies.insert(
                DotnetDependency::package(id.trim(), attributes.get("version").map(String::as_str))
                    .with_scope(scope),
            );
        }

        Ok(dependencies)
    }
}

impl Default for PackagesConfigReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackagesFileReader for PackagesConfigReader {
    async fn read_dependencies(&self, packages_path: &Path) -> Result<HashSet<DotnetDependency>> {
        validate_regular_file(packages_path, "packages.config", MAX_FILE_SIZE)?;
        let content = tokio::fs::read_to_string(packages_path)
            .await
            .map_err(|e| SbomError::FileReadError {
                path: packages_path.to_path_buf(),
                details: e.to_string(),
            })?;
        self.parse(packages_path, &content)
    }
}

fn unescape(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::DEFAULT_VERSION;
    use std::fs;
    use tempfile::TempDir;

    async fn read(content: &str) -> Result<HashSet<DotnetDependency>> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("packages.config");
        fs::write(&path, content).unwrap();
        PackagesConfigReader::new().read_dependencies(&path).await
    }

    fn find<'a>(set: &'a HashSet<DotnetDependency>, name: &str) -> &'a DotnetDependency {
        set.iter().find(|d| d.name() == name).unwrap()
    }

    #[tokio::test]
    async fn test_reads_packages() {
        let dependencies = read(
            r#"<?xml version="1.0" encoding="utf-8"?>
<packages>
  <package id="Newtonsoft.Json" version="12.0.3" targetFramework="net472" />
  <package targetFramework="net472" version="2.4.1" id="xunit"></package>
  <package id='log4net' version='2.0.15' />
</packages>"#,
        )
        .await
        .unwrap();

        assert_eq!(dependencies.len(), 3);
        assert_eq!(find(&dependencies, "Newtonsoft.Json").version(), "12.0.3");
        assert_eq!(find(&dependencies, "xunit").version(), "2.4.1");
        assert_eq!(find(&dependencies, "log4net").version(), "2.0.15");
        assert!(dependencies
            .iter()
            .all(|d| d.scope() == ComponentScope::Required));
    }

    #[tokio::test]
    async fn test_development_dependencies_are_excluded() {
        let dependencies = read(
            r#"<packages>
  <package id="StyleCop.Analyzers" version="1.1.118" developmentDependency="true" />
  <package id="Dapper" version="2.0.123" developmentDependency="false" />
</packages>"#,
        )
        .await
        .unwrap();

        assert_eq!(
            find(&dependencies, "StyleCop.Analyzers").scope(),
            ComponentScope::Excluded
        );
        assert_eq!(find(&dependencies, "Dapper").scope(), ComponentScope::Required);
    }

    #[tokio::test]
    async fn test_ignores_commented_packages_and_defaults_version() {
        let dependencies = read(
            r#"<packages>
  <!-- <package id="Old.Package" version="0.1.0" /> -->
  <package id="NoVersion" />
</packages>"#,
        )
        .await
        .unwrap();

        assert_eq!(dependencies.len(), 1);
        assert_eq!(find(&dependencies, "NoVersion").version(), DEFAULT_VERSION);
    }

    #[tokio::test]
    async fn test_empty_packages_element() {
        let dependencies = read("<packages />").await.unwrap();
        assert!(dependencies.is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_element() {
        let err = read("<configuration />").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::PackagesFileParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_package_without_id() {
        let err = read(r#"<packages><package version="1.0.0" /></packages>"#)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("without id"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("A&amp;B &lt;x&gt;"), "A&B <x>");
    }
}
