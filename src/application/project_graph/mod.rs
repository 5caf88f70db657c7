//! Dependency graph resolution engine.
//!
//! Two breadth-first traversals share the reference-edge expansion of
//! [`ProjectGraphResolver`]:
//!
//! - [`ProjectGraphResolver::recursively_get_project_references`] collects one
//!   `Project` node per reachable project and records output identities.
//! - [`ProjectGraphResolver::recursively_get_project_dependencies`] collects
//!   the union of the NuGet packages of every reachable project.

mod metadata_accessor;
mod package_collector;
mod reconciler;
mod reference_walker;
mod resolver;


pub use metadata_accessor::{
    AssemblyInfo, OutputInfo, ProjectMetadataAccessor, DEFAULT_CONFIGURATION,
    EVALUATED_ITEMS, EVALUATED_PROPERTIES, TEST_SDK_PACKAGE,
};
pub use reconciler::DependencySourceReconciler;
pub use resolver::ProjectGraphResolver;

use std::path::PathBuf;

/// Run parameters of a package collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionOptions {
    /// Overrides where restore output is looked up (`<base>/obj/<project>`)
    pub base_intermediate_output_path: Option<PathBuf>,
    /// Drop the packages of test projects
    pub exclude_test_projects: bool,
    /// Target framework passed to restore
    pub framework: Option<String>,
    /// Runtime identifier passed to restore
    pub runtime: Option<String>,
    /// Use existing restore output instead of restoring each project
    pub disable_package_restore: bool,
}
