use super::ResolutionOptions;
use crate::ports::outbound::{
    AssetsFileReader, PackageRestorer, PackagesFileReader, ProgressReporter,
};
use crate::sbom_generation::domain::project_paths::packages_config_path;
use crate::sbom_generation::domain::DotnetDependency;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// Obtains the package dependencies of a single project.
///
/// The restore output (`project.assets.json`) is preferred; a legacy
/// `packages.config` next to the project is read only when the restore
/// output yields no package at all.
pub struct DependencySourceReconciler<R, A, P> {
    restorer: R,
    assets_reader: A,
    packages_reader: P,
}

impl<R, A, P> DependencySourceReconciler<R, A, P>
where
    R: PackageRestorer,
    A: AssetsFileReader,
    P: PackagesFileReader,
{
    pub fn new(restorer: R, assets_reader: A, packages_reader: P) -> Self {
        Self {
            restorer,
            assets_reader,
            packages_reader,
        }
    }

    /// Returns the package set of `project_path`
    ///
    /// # Errors
    /// Returns `SbomError::RestoreFailed` when restore is enabled and fails;
    /// the packages of the run can no longer be trusted after that
    pub async fn resolve(
        &self,
        project_path: &Path,
        assets_path: &Path,
        is_test_project: bool,
        options: &ResolutionOptions,
        reporter: &dyn ProgressReporter,
    ) -> Result<HashSet<DotnetDependency>> {
        if options.exclude_test_projects && is_test_project {
            reporter.report(&format!("  Skipping test project: {}", project_path.display()));
            return Ok(HashSet::new());
        }

        if !options.disable_package_restore {
            self.restore(project_path, options, reporter).await?;
        }

        let mut packages = if assets_path.is_file() {
            self.assets_reader
                .read_dependencies(project_path, assets_path, is_test_project)?
        } else {
            reporter.report_warning(&format!(
                "  File not found: \"{}\" (project \"{}\")",
                assets_path.display(),
                project_path.display()
            ));
            HashSet::new()
        };

        if packages.is_empty() {
            reporter.report("  No packages found");
            let packages_path = packages_config_path(project_path);
            if packages_path.is_file() {
                reporter.report("  Found packages.config. Will attempt to process");
                packages = self.packages_reader.read_dependencies(&packages_path).await?;
            }
        }

        Ok(packages)
    }

    async fn restore(
        &self,
        project_path: &Path,
        options: &ResolutionOptions,
        reporter: &dyn ProgressReporter,
    ) -> Result<()> {
        reporter.report("  Attempting to restore packages");
        let result = self
            .restorer
            .restore(
                project_path,
                options.framework.as_deref(),
                options.runtime.as_deref(),
            )
            .await;

        if result.success {
            reporter.report("  Packages restored");
            return Ok(());
        }

        let message = result
            .error_message
            .unwrap_or_else(|| "restore exited without an error message".to_string());
        reporter.report_error(&format!("Dotnet restore failed:\n{}", message));
        Err(SbomError::RestoreFailed {
            project: project_path.to_path_buf(),
            message,
        }
        .into())
    }
}
