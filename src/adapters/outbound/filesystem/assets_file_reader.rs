use crate::ports::outbound::AssetsFileReader;
use crate::sbom_generation::domain::{ComponentScope, DotnetDependency};
use crate::shared::error::SbomError;
use crate::shared::security::read_bounded_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

const PACKAGE_LIBRARY_TYPE: &str = "package";

#[derive(Debug, Deserialize)]
struct AssetsFile {
    #[serde(default)]
    targets: BTreeMap<String, BTreeMap<String, TargetLibrary>>,
}

#[derive(Debug, Deserialize)]
struct TargetLibrary {
    #[serde(rename = "type", default)]
    library_type: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

/// ProjectAssetsFileReader adapter reading `project.assets.json` restore output
///
/// Every `package` library of every target becomes a package dependency.
/// Libraries of type `project` are left to the reference graph walk.
pub struct ProjectAssetsFileReader;

impl ProjectAssetsFileReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(
        &self,
        assets_path: &Path,
        content: &str,
        scope: ComponentScope,
    ) -> Result<HashSet<DotnetDependency>> {
        let assets: AssetsFile =
            serde_json::from_str(content).map_err(|e| SbomError::AssetsFileParseError {
                path: assets_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut dependencies = HashSet::new();
        for libraries in assets.targets.values() {
            let packages: Vec<(&str, &str, &TargetLibrary)> = libraries
                .iter()
                .filter(|(_, library)| {
                    library
                        .library_type
                        .as_deref()
                        .is_some_and(|t| t.eq_ignore_ascii_case(PACKAGE_LIBRARY_TYPE))
                })
                .filter_map(|(key, library)| {
                    key.split_once('/')
                        .map(|(name, version)| (name, version, library))
                })
                .collect();

            let resolved: HashMap<String, &str> = packages
                .iter()
                .map(|(name, version, _)| (name.to_lowercase(), *version))
                .collect();

            for (name, version, library) in packages {
                let package_dependencies = library
                    .dependencies
                    .iter()
                    .map(|(dependency, range)| {
                        let version = resolved
                            .get(&dependency.to_lowercase())
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| lower_bound(range));
                        (dependency.clone(), version)
                    })
                    .collect();

                dependencies.insert(
                    DotnetDependency::package(name, Some(version))
                        .with_dependencies(package_dependencies)
                        .with_scope(scope),
                );
            }
        }

        Ok(dependencies)
    }
}

impl Default for ProjectAssetsFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetsFileReader for ProjectAssetsFileReader {
    fn read_dependencies(
        &self,
        _project_path: &Path,
        assets_path: &Path,
        is_test_project: bool,
    ) -> Result<HashSet<DotnetDependency>> {
        let content = read_bounded_file(assets_path, "project.assets.json")?;
        let scope = if is_test_project {
            ComponentScope::Excluded
        } else {
            ComponentScope::Required
        };
        self.parse(assets_path, &content, scope)
    }
}

/// Minimum version of a NuGet version range (`[1.2.0, )` -> `1.2.0`)
fn lower_bound(range: &str) -> String {
    let inner = range.trim().trim_matches(|c| matches!(c, '[' | ']' | '(' | ')'));
    let mut bounds = inner.split(',').map(str::trim);
    let lower = bounds.next().unwrap_or_default();
    if lower.is_empty() {
        bounds.next().unwrap_or_default().to_string()
    } else {
        lower.to_string()
    }
}
