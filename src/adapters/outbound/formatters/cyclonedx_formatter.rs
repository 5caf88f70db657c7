use crate::application::dto::SbomResponse;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{
    Component as ProjectComponent, DotnetDependency, SbomMetadata,
};
use crate::shared::Result;
use serde::Serialize;
use std::collections::HashSet;

const SPEC_VERSION: &str = "1.6";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom {
    bom_format: &'static str,
    spec_version: &'static str,
    version: u32,
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Tools,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<Component>,
}

#[derive(Debug, Serialize)]
struct Tools {
    components: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<Hash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Hash {
    alg: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn")]
    depends_on: Vec<String>,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.6 JSON format
///
/// Packages become `library` components identified by a NuGet purl; project
/// components carry their CPE, output file name and SHA-256 hash. The root
/// project is described in `metadata.component` rather than in `components`.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, response: &SbomResponse) -> Result<String> {
        let root_ref = response
            .metadata
            .root_component()
            .map(|root| format!("{}@{}", root.name, root.version));

        let root_component = root_ref.as_ref().map(|root_ref| {
            response
                .project_components
                .iter()
                .find(|c| c.bom_ref() == root_ref)
                .map(build_project_component)
                .unwrap_or_else(|| self.build_root_component(&response.metadata))
        });

        let mut components: Vec<Component> = response
            .packages
            .iter()
            .map(build_package_component)
            .collect();
        components.extend(
            response
                .project_components
                .iter()
                .filter(|c| Some(c.bom_ref()) != root_ref.as_deref())
                .map(build_project_component),
        );

        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: SPEC_VERSION,
            version: 1,
            serial_number: response.metadata.serial_number().to_string(),
            metadata: Metadata {
                timestamp: response.metadata.timestamp().to_string(),
                tools: Tools {
                    components: vec![Tool {
                        component_type: "application",
                        name: response.metadata.tool_name().to_string(),
                        version: response.metadata.tool_version().to_string(),
                    }],
                },
                component: root_component,
            },
            dependencies: self.build_dependencies(response, &components, root_ref.as_deref()),
            components,
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    /// Root component when project references were not resolved
    fn build_root_component(&self, metadata: &SbomMetadata) -> Component {
        let (name, version) = metadata
            .root_component()
            .map(|root| (root.name.clone(), root.version.clone()))
            .unwrap_or_default();
        Component {
            component_type: "application",
            bom_ref: format!("{}@{}", name, version),
            name,
            version,
            scope: None,
            hashes: Vec::new(),
            cpe: None,
            purl: None,
            properties: Vec::new(),
        }
    }

    /// One entry per node with dependencies, pointing only at components
    /// present in the document
    fn build_dependencies(
        &self,
        response: &SbomResponse,
        components: &[Component],
        root_ref: Option<&str>,
    ) -> Vec<Dependency> {
        let known: HashSet<&str> = components
            .iter()
            .map(|c| c.bom_ref.as_str())
            .chain(root_ref)
            .collect();

        response
            .projects
            .iter()
            .chain(response.packages.iter())
            .filter_map(|node| {
                let depends_on: Vec<String> = node
                    .dependencies()
                    .iter()
                    .map(|(name, version)| format!("{}@{}", name, version))
                    .filter(|bom_ref| known.contains(bom_ref.as_str()))
                    .collect();
                (!depends_on.is_empty()).then(|| Dependency {
                    bom_ref: node.bom_ref(),
                    depends_on,
                })
            })
            .collect()
    }
}

fn build_package_component(package: &DotnetDependency) -> Component {
    Component {
        component_type: "library",
        bom_ref: package.bom_ref(),
        name: package.name().to_string(),
        version: package.version().to_string(),
        scope: Some(package.scope().as_str()),
        hashes: Vec::new(),
        cpe: None,
        purl: Some(format!("pkg:nuget/{}@{}", package.name(), package.version())),
        properties: Vec::new(),
    }
}

fn build_project_component(component: &ProjectComponent) -> Component {
    Component {
        component_type: component.classification().as_str(),
        bom_ref: component.bom_ref().to_string(),
        name: component.name().to_string(),
        version: component.version().to_string(),
        scope: Some(component.scope().as_str()),
        hashes: component
            .hashes()
            .iter()
            .map(|hash| Hash {
                alg: hash.algorithm.as_str(),
                content: hash.content.clone(),
            })
            .collect(),
        cpe: Some(component.cpe().render()),
        purl: None,
        properties: component
            .properties()
            .iter()
            .map(|p| Property {
                name: p.name.clone(),
                value: p.value.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::domain::{
        Classification, ComponentHash, ComponentScope, Cpe, HashAlgorithm,
        Property as ComponentProperty,
    };
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::path::Path;

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "dotnet-sbom".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345678-1234-1234-1234-123456789012".to_string(),
        )
        .with_root_component("Shop.Web".to_string(), "2.1.0".to_string())
    }

    fn packages() -> Vec<DotnetDependency> {
        vec![
            DotnetDependency::package("Microsoft.Extensions.Logging", Some("8.0.0"))
                .with_dependencies(BTreeMap::from([(
                    "Microsoft.Extensions.Logging.Abstractions".to_string(),
                    "8.0.0".to_string(),
                )])),
            DotnetDependency::package("Microsoft.Extensions.Logging.Abstractions", Some("8.0.0")),
            DotnetDependency::package("xunit", Some("2.9.0")).with_scope(ComponentScope::Excluded),
        ]
    }

    fn project_component(name: &str, version: &str) -> ProjectComponent {
        ProjectComponent::new(
            name.to_string(),
            version.to_string(),
            ComponentScope::Required,
            Classification::Library,
            Cpe::application().with_vendor(Some("Contoso".to_string())),
            vec![ComponentProperty::new("filename", format!("{}.dll", name))],
            vec![ComponentHash {
                algorithm: HashAlgorithm::Sha256,
                content: "abc123".to_string(),
            }],
        )
    }

    fn format(response: &SbomResponse) -> Value {
        let json = CycloneDxFormatter::new().format(response).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_format_packages() {
        let response = SbomResponse::new(packages(), Vec::new(), Vec::new(), metadata());
        let bom = format(&response);

        assert_eq!(bom["bomFormat"], "CycloneDX");
        assert_eq!(bom["specVersion"], "1.6");
        assert_eq!(bom["serialNumber"], "urn:uuid:12345678-1234-1234-1234-123456789012");
        assert_eq!(bom["metadata"]["tools"]["components"][0]["name"], "dotnet-sbom");
        assert_eq!(bom["metadata"]["component"]["bom-ref"], "Shop.Web@2.1.0");
        assert_eq!(bom["metadata"]["component"]["type"], "application");

        let components = bom["components"].as_array().unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0]["type"], "library");
        assert_eq!(
            components[0]["purl"],
            "pkg:nuget/Microsoft.Extensions.Logging@8.0.0"
        );
        assert_eq!(components[0]["scope"], "required");
        assert_eq!(components[2]["scope"], "excluded");
        assert!(components[0].get("cpe").is_none());
    }

    #[test]
    fn test_format_dependencies() {
        let response = SbomResponse::new(packages(), Vec::new(), Vec::new(), metadata());
        let bom = format(&response);

        let dependencies = bom["dependencies"].as_array().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0]["ref"], "Microsoft.Extensions.Logging@8.0.0");
        assert_eq!(
            dependencies[0]["dependsOn"][0],
            "Microsoft.Extensions.Logging.Abstractions@8.0.0"
        );
    }

    #[test]
    fn test_format_project_components() {
        let root = DotnetDependency::project("Shop.Web", Some("2.1.0"), Path::new("/src/Shop.Web.csproj"))
            .with_dependencies(BTreeMap::from([("Shop.Core".to_string(), "1.0.0".to_string())]));
        let core = DotnetDependency::project("Shop.Core", None, Path::new("/src/Shop.Core.csproj"));
        let response = SbomResponse::new(
            Vec::new(),
            vec![core, root],
            vec![
                project_component("Shop.Core", "1.0.0"),
                project_component("Shop.Web", "2.1.0"),
            ],
            metadata(),
        );
        let bom = format(&response);

        let root = &bom["metadata"]["component"];
        assert_eq!(root["bom-ref"], "Shop.Web@2.1.0");
        assert_eq!(root["hashes"][0]["alg"], "SHA-256");

        let components = bom["components"].as_array().unwrap();
        assert_eq!(components.len(), 1);
        let core = &components[0];
        assert_eq!(core["bom-ref"], "Shop.Core@1.0.0");
        assert_eq!(core["cpe"], "cpe:2.3:a:Contoso:*:*:*:*:*:*:*:*:*");
        assert_eq!(core["hashes"][0]["content"], "abc123");
        assert_eq!(core["properties"][0]["name"], "filename");
        assert_eq!(core["properties"][0]["value"], "Shop.Core.dll");
        assert!(core.get("purl").is_none());

        let dependencies = bom["dependencies"].as_array().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert_eq!(dependencies[0]["ref"], "Shop.Web@2.1.0");
        assert_eq!(dependencies[0]["dependsOn"][0], "Shop.Core@1.0.0");
    }

    #[test]
    fn test_format_drops_dangling_dependency_refs() {
        let package = DotnetDependency::package("Serilog", Some("3.1.1")).with_dependencies(
            BTreeMap::from([("System.Memory".to_string(), "4.5.5".to_string())]),
        );
        let response = SbomResponse::new(vec![package], Vec::new(), Vec::new(), metadata());
        let bom = format(&response);

        assert!(bom.get("dependencies").is_none());
    }
}
