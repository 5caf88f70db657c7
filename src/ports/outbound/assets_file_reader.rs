use crate::sbom_generation::domain::DotnetDependency;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// AssetsFileReader port for the resolved-dependency lock artifact
/// (`project.assets.json`) written by a restore
pub trait AssetsFileReader: Send + Sync {
    /// Reads the package dependencies recorded for a project
    ///
    /// # Arguments
    /// * `project_path` - The project the artifact belongs to
    /// * `assets_path` - Location of `project.assets.json`
    /// * `is_test_project` - Whether the packages belong to a test project
    ///
    /// # Errors
    /// Returns an error if the artifact exists but cannot be parsed
    fn read_dependencies(
        &self,
        project_path: &Path,
        assets_path: &Path,
        is_test_project: bool,
    ) -> Result<HashSet<DotnetDependency>>;
}
