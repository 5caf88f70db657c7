use super::{DependencySourceReconciler, ProjectMetadataAccessor, ResolutionOptions};
use crate::ports::outbound::{
    AssetsFileReader, ContentHasher, PackageRestorer, PackagesFileReader, ProgressReporter,
    ProjectEvaluator,
};
use crate::sbom_generation::domain::project_paths::assets_file_path;
use crate::sbom_generation::domain::{DotnetDependency, ProjectIdentity, ProjectRegistry};
use crate::shared::Result;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// ProjectGraphResolver - resolves the project reference graph of a .NET
/// project and the packages reachable through it
///
/// # Type Parameters
/// * `E` - ProjectEvaluator implementation
/// * `R` - PackageRestorer implementation
/// * `A` - AssetsFileReader implementation
/// * `P` - PackagesFileReader implementation
/// * `H` - ContentHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct ProjectGraphResolver<E, R, A, P, H, PR> {
    pub(super) metadata: ProjectMetadataAccessor<E>,
    pub(super) reconciler: DependencySourceReconciler<R, A, P>,
    pub(super) hasher: H,
    pub(super) reporter: PR,
}

impl<E, R, A, P, H, PR> ProjectGraphResolver<E, R, A, P, H, PR>
where
    E: ProjectEvaluator,
    R: PackageRestorer,
    A: AssetsFileReader,
    P: PackagesFileReader,
    H: ContentHasher,
    PR: ProgressReporter,
{
    pub fn new(
        metadata: ProjectMetadataAccessor<E>,
        reconciler: DependencySourceReconciler<R, A, P>,
        hasher: H,
        reporter: PR,
    ) -> Self {
        Self {
            metadata,
            reconciler,
            hasher,
            reporter,
        }
    }

    pub fn metadata(&self) -> &ProjectMetadataAccessor<E> {
        &self.metadata
    }

    pub fn reporter(&self) -> &PR {
        &self.reporter
    }

    /// Returns the projects referenced by `project_path` and records the
    /// identity of its build output in `registry`
    ///
    /// # Errors
    /// Fails if the project cannot be evaluated, lacks `TargetPath` or
    /// `AssemblyName`, or its output cannot be hashed
    pub async fn get_project_references(
        &self,
        project_path: &Path,
        registry: &mut ProjectRegistry,
    ) -> Result<BTreeSet<PathBuf>> {
        if !project_path.is_file() {
            self.report_missing_project(project_path);
            return Ok(BTreeSet::new());
        }

        self.reporter.report("");
        self.reporter
            .report(&format!("» Analyzing: {}", project_path.display()));
        self.reporter.report("  Getting project references");

        if let Some(output) = self.metadata.output_info(project_path).await? {
            let hash = self.hasher.hash_file(&output.target_path).await?;
            let identity =
                ProjectIdentity::new(output.target_path, project_path.to_path_buf(), hash);
            if let Some(replaced) = registry.register(output.assembly_name.clone(), identity) {
                if replaced.project_path() != project_path {
                    self.reporter.report_warning(&format!(
                        "⚠️  Warning: Assembly name '{}' is produced by both \"{}\" and \"{}\"; keeping the identity of the latter",
                        output.assembly_name,
                        replaced.project_path().display(),
                        project_path.display()
                    ));
                }
            }
        }

        let references = self.expand_references(project_path).await?;
        if references.is_empty() {
            self.reporter.report("  No project references found");
        }

        Ok(references)
    }

    /// Returns the package dependencies declared by a single project
    pub async fn get_project_dependencies(
        &self,
        project_path: &Path,
        options: &ResolutionOptions,
    ) -> Result<HashSet<DotnetDependency>> {
        if !project_path.is_file() {
            self.report_missing_project(project_path);
            return Ok(HashSet::new());
        }

        let is_test_project = self.metadata.is_test_project(project_path).await?;

        self.reporter.report("");
        self.reporter
            .report(&format!("» Analyzing: {}", project_path.display()));

        let assets_path = assets_file_path(
            project_path,
            options.base_intermediate_output_path.as_deref(),
        );
        self.reconciler
            .resolve(
                project_path,
                &assets_path,
                is_test_project,
                options,
                &self.reporter,
            )
            .await
    }

    /// Neighbors of a project in the reference graph
    pub(super) async fn expand_references(&self, project_path: &Path) -> Result<BTreeSet<PathBuf>> {
        self.metadata.project_references(project_path).await
    }

    pub(super) fn report_missing_project(&self, project_path: &Path) {
        self.reporter.report_warning(&format!(
            "⚠️  Warning: Project file \"{}\" does not exist",
            project_path.display()
        ));
    }
}
