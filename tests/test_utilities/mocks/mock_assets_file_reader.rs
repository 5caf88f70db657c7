use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use dotnet_sbom::prelude::*;

/// Mock AssetsFileReader returning canned packages per assets file path
#[derive(Default)]
pub struct MockAssetsFileReader {
    pub packages: HashMap<PathBuf, Vec<DotnetDependency>>,
}

impl MockAssetsFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(mut self, assets_path: PathBuf, packages: &[(&str, &str)]) -> Self {
        self.packages.insert(
            assets_path,
            packages
                .iter()
                .map(|(name, version)| DotnetDependency::package(*name, Some(*version)))
                .collect(),
        );
        self
    }
}

impl AssetsFileReader for MockAssetsFileReader {
    fn read_dependencies(
        &self,
        _project_path: &Path,
        assets_path: &Path,
        is_test_project: bool,
    ) -> Result<HashSet<DotnetDependency>> {
        let scope = if is_test_project {
            ComponentScope::Excluded
        } else {
            ComponentScope::Required
        };
        Ok(self
            .packages
            .get(assets_path)
            .map(|packages| {
                packages
                    .iter()
                    .map(|p| p.clone().with_scope(scope))
                    .collect()
            })
            .unwrap_or_default())
    }
}
