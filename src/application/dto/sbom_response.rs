use crate::sbom_generation::domain::{Component, DotnetDependency, SbomMetadata};

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// This DTO contains the resolved graph, which adapters then format into
/// the appropriate output format. Lists are sorted by name and version.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// Packages reachable from the root project
    pub packages: Vec<DotnetDependency>,
    /// Reachable projects, root included (empty unless requested)
    pub projects: Vec<DotnetDependency>,
    /// Components assembled from `projects`, in the same order
    pub project_components: Vec<Component>,
    /// SBOM metadata (timestamp, tool info, serial number, root component)
    pub metadata: SbomMetadata,
}

impl SbomResponse {
    pub fn new(
        packages: Vec<DotnetDependency>,
        projects: Vec<DotnetDependency>,
        project_components: Vec<Component>,
        metadata: SbomMetadata,
    ) -> Self {
        Self {
            packages,
            projects,
            project_components,
            metadata,
        }
    }
}
