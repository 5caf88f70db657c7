use super::ProjectGraphResolver;
use crate::ports::outbound::{
    AssetsFileReader, ContentHasher, PackageRestorer, PackagesFileReader, ProgressReporter,
    ProjectEvaluator,
};
use crate::sbom_generation::domain::project_paths::{absolute_path, is_supported_project_type};
use crate::sbom_generation::domain::{DotnetDependency, ProjectRegistry};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::{BTreeMap, HashSet, VecDeque};
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
    /// Walks the `ProjectReference` graph breadth-first from `project_path`.
    ///
    /// Returns one `Project` dependency per distinct reachable project, the
    /// root included, each carrying the assembly names and versions of the
    /// projects it references directly. Output identities are recorded in
    /// `registry` once per project. Files that are not supported project
    /// types are skipped, and so are their references.
    ///
    /// # Errors
    /// Any evaluation or hashing failure aborts the walk; `SbomError::Cancelled`
    /// is returned if `cancel` fires before the queue drains
    pub async fn recursively_get_project_references(
        &self,
        project_path: &Path,
        registry: &mut ProjectRegistry,
        cancel: &CancellationToken,
    ) -> Result<HashSet<DotnetDependency>> {
        let mut projects = HashSet::new();
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

            if !current.is_file() {
                self.report_missing_project(&current);
                continue;
            }
            self.reporter
                .report_progress(visited.len(), Some(&current.display().to_string()));

            let references = self.get_project_references(&current, registry).await?;
            let assembly = self.metadata.assembly_info(&current).await?;

            let mut dependencies = BTreeMap::new();
            for reference in references.iter().filter(|r| is_supported_project_type(r)) {
                let referenced = self.metadata.assembly_info(reference).await?;
                dependencies.insert(referenced.name, referenced.version);
            }

            projects.insert(
                DotnetDependency::project(assembly.name, Some(&assembly.version), &current)
                    .with_dependencies(dependencies),
            );

            queue.extend(
                references
                    .into_iter()
                    .filter(|reference| !visited.contains(reference)),
            );
        }

        Ok(projects)
    }
}
