use crate::sbom_generation::domain::DotnetDependency;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;

/// PackagesFileReader port for the legacy flat `packages.config` file
#[async_trait]
pub trait PackagesFileReader: Send + Sync {
    /// Reads every package listed in `packages_path`
    async fn read_dependencies(&self, packages_path: &Path) -> Result<HashSet<DotnetDependency>>;
}
