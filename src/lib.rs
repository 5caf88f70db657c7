//! dotnet-sbom - SBOM generation tool for .NET projects
//!
//! This library resolves the dependency graph of a .NET project (the NuGet
//! packages of every project reachable through `<ProjectReference>` items and,
//! optionally, the projects themselves) into CycloneDX components. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): The graph resolution engine and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dotnet_sbom::prelude::*;
//! use std::path::PathBuf;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<()> {
//! let resolver = ProjectGraphResolver::new(
//!     ProjectMetadataAccessor::new(MsBuildEvaluator::new()),
//!     DependencySourceReconciler::new(
//!         DotnetRestorer::new(),
//!         ProjectAssetsFileReader::new(),
//!         PackagesConfigReader::new(),
//!     ),
//!     Sha256ContentHasher::new(),
//!     StderrProgressReporter::new(),
//! );
//! let use_case = GenerateSbomUseCase::new(
//!     resolver,
//!     ComponentAssembler::new(OrganizationMetadata::from_env()),
//! );
//!
//! let request = SbomRequest::new(
//!     PathBuf::from("src/Shop.Web/Shop.Web.csproj"),
//!     true,
//!     ResolutionOptions::default(),
//! );
//! let response = use_case.execute(request, &CancellationToken::new()).await?;
//!
//! let output = CycloneDxFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dotnet::{DotnetRestorer, MsBuildEvaluator};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, PackagesConfigReader, ProjectAssetsFileReader, Sha256ContentHasher,
        StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::application::dto::{SbomRequest, SbomResponse};
    pub use crate::application::project_graph::{
        DependencySourceReconciler, ProjectGraphResolver, ProjectMetadataAccessor,
        ResolutionOptions,
    };
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        AssetsFileReader, ContentHasher, EvaluatedProject, OutputPresenter, PackageRestorer,
        PackagesFileReader, ProgressReporter, ProjectEvaluator, ProjectItem, RestoreResult,
        SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Component, ComponentScope, DependencyType, DotnetDependency, OrganizationMetadata,
        ProjectIdentity, ProjectRegistry, SbomMetadata,
    };
    pub use crate::sbom_generation::services::{ComponentAssembler, SbomGenerator};
    pub use crate::shared::Result;
}
