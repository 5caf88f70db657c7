pub mod component;
pub mod cpe;
pub mod dotnet_dependency;
pub mod organization;
pub mod project_identity;
pub mod project_paths;
pub mod sbom_metadata;

pub use component::{Classification, Component, ComponentHash, HashAlgorithm, Property};
pub use cpe::Cpe;
pub use dotnet_dependency::{
    version_or_default, ComponentScope, DependencyType, DotnetDependency, DEFAULT_VERSION,
};
pub use organization::OrganizationMetadata;
pub use project_identity::{ProjectIdentity, ProjectRegistry};
pub use sbom_metadata::{RootComponent, SbomMetadata};
