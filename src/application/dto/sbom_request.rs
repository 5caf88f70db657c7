use crate::application::project_graph::ResolutionOptions;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the root project file (.csproj, .fsproj or .vbproj)
    pub project_path: PathBuf,
    /// Whether referenced projects become components of the document
    pub include_project_references: bool,
    /// Options of the package collection
    pub options: ResolutionOptions,
}

impl SbomRequest {
    pub fn new(
        project_path: PathBuf,
        include_project_references: bool,
        options: ResolutionOptions,
    ) -> Self {
        Self {
            project_path,
            include_project_references,
            options,
        }
    }
}
