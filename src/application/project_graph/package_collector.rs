use super::{ProjectGraphResolver, ResolutionOptions};
use crate::ports::outbound::{
    AssetsFileReader, ContentHasher, PackageRestorer, PackagesFileReader, ProgressReporter,
    ProjectEvaluator,
};
use crate::sbom_generation::domain::project_paths::{absolute_path, is_supported_project_type};
use crate::sbom_generation::domain::{ComponentScope, DotnetDependency};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use tokio_util::sync::CancellationToken;

impl<E, R, A, P, H, PR> ProjectGraphResolver<E, R, A, P, H, PR>
where
    E: ProjectEvaluator,
    R: PackageRestorer,
    A: AssetsFileReader,
    P: PackagesFileReader,
    H: ContentHasher,
    PR: ProgressReporter,
{
    /// Collects the union of the package dependencies of every project
    /// reachable from `project_path`.
    ///
    /// Test-project exclusion only drops the excluded project's own packages;
    /// its references are still walked.
    ///
    /// # Errors
    /// A restore or evaluation failure of any visited project aborts the whole
    /// collection; `SbomError::Cancelled` is returned if `cancel` fires first
    pub async fn recursively_get_project_dependencies(
        &self,
        project_path: &Path,
        options: &ResolutionOptions,
        cancel: &CancellationToken,
    ) -> Result<HashSet<DotnetDependency>> {
        let mut dependencies = HashSet::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([absolute_path(project_path)?]);

        while let Some(current) = queue.pop_front() {
            if cancel.is_cancelled() {
                return Err(SbomError::Cancelled.into());
            }
            if visited.contains(&current) || !is_supported_project_type(&current) {
                continue;
            }
            visited.insert(current.clone());
            self.reporter
                .report_progress(visited.len(), Some(&current.display().to_string()));

            let packages = self.get_project_dependencies(&current, options).await?;
            merge_packages(&mut dependencies, packages);

            let references = self.expand_references(&current).await?;
            queue.extend(
                references
                    .into_iter()
                    .filter(|reference| !visited.contains(reference)),
            );
        }

        Ok(dependencies)
    }
}

/// Adds `packages` to the union. A package already collected as `Excluded`
/// (reached through a test project first) becomes `Required` once a non-test
/// project brings it in as well.
fn merge_packages(dependencies: &mut HashSet<DotnetDependency>, packages: HashSet<DotnetDependency>) {
    for package in packages {
        let upgrades_scope = package.scope() == ComponentScope::Required
            && dependencies
                .get(&package)
                .is_some_and(|existing| existing.scope() != ComponentScope::Required);
        if upgrades_scope {
            dependencies.replace(package);
        } else {
            dependencies.insert(package);
        }
    }
}
