use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::project_graph::ProjectGraphResolver;
use crate::ports::outbound::{
    AssetsFileReader, ContentHasher, PackageRestorer, PackagesFileReader, ProgressReporter,
    ProjectEvaluator,
};
use crate::sbom_generation::domain::{
    Component, DependencyType, DotnetDependency, ProjectRegistry,
};
use crate::sbom_generation::services::{ComponentAssembler, SbomGenerator};
use crate::shared::Result;
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

/// Projects reachable from the root and their assembled components
type ResolvedProjects = (Vec<DotnetDependency>, Vec<Component>);

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Collects the packages reachable from a root project, optionally walks the
/// project reference graph into components, and describes the root project
/// in the document metadata.
///
/// # Type Parameters
/// * `E` - ProjectEvaluator implementation
/// * `R` - PackageRestorer implementation
/// * `A` - AssetsFileReader implementation
/// * `P` - PackagesFileReader implementation
/// * `H` - ContentHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<E, R, A, P, H, PR> {
    resolver: ProjectGraphResolver<E, R, A, P, H, PR>,
    assembler: ComponentAssembler,
}

impl<E, R, A, P, H, PR> GenerateSbomUseCase<E, R, A, P, H, PR>
where
    E: ProjectEvaluator,
    R: PackageRestorer,
    A: AssetsFileReader,
    P: PackagesFileReader,
    H: ContentHasher,
    PR: ProgressReporter,
{
    pub fn new(
        resolver: ProjectGraphResolver<E, R, A, P, H, PR>,
        assembler: ComponentAssembler,
    ) -> Self {
        Self {
            resolver,
            assembler,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Propagates every fatal resolution error; nothing is returned for a
    /// partially resolved graph
    pub async fn execute(
        &self,
        request: SbomRequest,
        cancel: &CancellationToken,
    ) -> Result<SbomResponse> {
        let reporter = self.resolver.reporter();
        reporter.report(&format!(
            "📦 Resolving package dependencies of {}",
            request.project_path.display()
        ));

        let packages = self
            .resolver
            .recursively_get_project_dependencies(&request.project_path, &request.options, cancel)
            .await?;
        reporter.report_completion(&format!("✅ Found {} package(s)", packages.len()));

        let (projects, project_components) = if request.include_project_references {
            self.resolve_projects(&request, cancel).await?
        } else {
            (Vec::new(), Vec::new())
        };

        let root = self
            .resolver
            .metadata()
            .assembly_info(&request.project_path)
            .await?;
        let metadata =
            SbomGenerator::generate_default_metadata().with_root_component(root.name, root.version);

        Ok(SbomResponse::new(
            sorted(packages),
            projects,
            project_components,
            metadata,
        ))
    }

    async fn resolve_projects(
        &self,
        request: &SbomRequest,
        cancel: &CancellationToken,
    ) -> Result<ResolvedProjects> {
        let reporter = self.resolver.reporter();
        reporter.report("");
        reporter.report("🔗 Resolving project references...");

        let mut registry = ProjectRegistry::new();
        let projects = sorted(
            self.resolver
                .recursively_get_project_references(&request.project_path, &mut registry, cancel)
                .await?,
        );

        let mut components = Vec::with_capacity(projects.len());
        for project in projects
            .iter()
            .filter(|p| p.dependency_type() == DependencyType::Project)
        {
            if let Some(component) = self.assembler.get_component(project, &registry)? {
                components.push(component);
            }
        }

        reporter.report_completion(&format!("✅ Found {} project(s)", projects.len()));
        Ok((projects, components))
    }
}

fn sorted(dependencies: HashSet<DotnetDependency>) -> Vec<DotnetDependency> {
    let mut dependencies: Vec<_> = dependencies.into_iter().collect();
    dependencies.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.version().cmp(b.version()))
    });
    dependencies
}
