use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use dotnet_sbom::prelude::*;

/// Mock PackagesFileReader returning canned packages per packages.config path
#[derive(Default)]
pub struct MockPackagesFileReader {
    pub packages: HashMap<PathBuf, Vec<DotnetDependency>>,
    pub should_fail: bool,
}

impl MockPackagesFileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(mut self, packages_path: PathBuf, packages: &[(&str, &str)]) -> Self {
        self.packages.insert(
            packages_path,
            packages
                .iter()
                .map(|(name, version)| DotnetDependency::package(*name, Some(*version)))
                .collect(),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PackagesFileReader for MockPackagesFileReader {
    async fn read_dependencies(&self, packages_path: &Path) -> Result<HashSet<DotnetDependency>> {
        if self.should_fail {
            anyhow::bail!("Mock packages.config read failure");
        }
        Ok(self
            .packages
            .get(packages_path)
            .map(|packages| packages.iter().cloned().collect())
            .unwrap_or_default())
    }
}
