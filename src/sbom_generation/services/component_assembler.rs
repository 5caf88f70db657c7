use crate::sbom_generation::domain::{
    Classification, Component, ComponentHash, ComponentScope, Cpe, DependencyType,
    DotnetDependency, HashAlgorithm, OrganizationMetadata, ProjectRegistry, Property,
};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Property recording the file name of a project's build output
pub const FILENAME_PROPERTY: &str = "filename";

/// ComponentAssembler service turning resolved project nodes into components
///
/// Pure business logic: the output identities it needs were recorded in a
/// [`ProjectRegistry`] while the reference graph was walked.
#[derive(Debug, Clone, Default)]
pub struct ComponentAssembler {
    organization: OrganizationMetadata,
}

impl ComponentAssembler {
    pub fn new(organization: OrganizationMetadata) -> Self {
        Self { organization }
    }

    pub fn organization(&self) -> &OrganizationMetadata {
        &self.organization
    }

    /// Builds the component for a project dependency
    ///
    /// # Returns
    /// `Ok(None)` for package dependencies, which are not converted here
    ///
    /// # Errors
    /// Returns `SbomError::IdentityNotRegistered` if the project's output was
    /// never hashed during traversal
    pub fn get_component(
        &self,
        dependency: &DotnetDependency,
        registry: &ProjectRegistry,
    ) -> Result<Option<Component>> {
        if dependency.dependency_type() != DependencyType::Project {
            return Ok(None);
        }

        let identity = registry
            .get(dependency.name())
            .ok_or_else(|| SbomError::IdentityNotRegistered {
                assembly_name: dependency.name().to_string(),
            })?;

        let cpe = Cpe::application()
            .with_vendor(self.organization.vendor.clone())
            .with_product(self.organization.product_name.clone())
            .with_version(self.organization.product_version.clone());

        Ok(Some(Component::new(
            dependency.name().to_string(),
            dependency.version().to_string(),
            ComponentScope::Required,
            Classification::Library,
            cpe,
            vec![Property::new(FILENAME_PROPERTY, identity.output_file_name())],
            vec![ComponentHash {
                algorithm: HashAlgorithm::Sha256,
                content: identity.hash().to_string(),
            }],
        )))
    }
}
