use crate::ports::outbound::{EvaluatedProject, ProjectEvaluator};
use crate::sbom_generation::domain::project_paths::{
    project_base_name, project_directory, resolve_reference,
};
use crate::sbom_generation::domain::version_or_default;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Package whose reference marks a project as a test project
pub const TEST_SDK_PACKAGE: &str = "Microsoft.NET.Test.Sdk";

/// Build configuration used when none is configured
pub const DEFAULT_CONFIGURATION: &str = "Release";

const ASSEMBLY_NAME_PROPERTY: &str = "AssemblyName";
const VERSION_PROPERTY: &str = "Version";
const TARGET_PATH_PROPERTY: &str = "TargetPath";
const IS_TEST_PROJECT_PROPERTY: &str = "IsTestProject";
const PROJECT_REFERENCE_ITEM: &str = "ProjectReference";
const PACKAGE_REFERENCE_ITEM: &str = "PackageReference";

/// Properties the accessor reads from an evaluated project
pub const EVALUATED_PROPERTIES: &[&str] = &[
    ASSEMBLY_NAME_PROPERTY,
    VERSION_PROPERTY,
    TARGET_PATH_PROPERTY,
    IS_TEST_PROJECT_PROPERTY,
];

/// Item types the accessor reads from an evaluated project
pub const EVALUATED_ITEMS: &[&str] = &[PROJECT_REFERENCE_ITEM, PACKAGE_REFERENCE_ITEM];

/// Assembly name and declared version of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyInfo {
    pub name: String,
    pub version: String,
}

/// Build output of a project, needed to hash it and key the identity registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    pub assembly_name: String,
    pub target_path: PathBuf,
}

/// Read-only view of a project's build metadata.
///
/// Every accessor returns a default result for a project file that does not
/// exist; callers check existence up front and report the absence. Each project
/// is evaluated once per accessor and the evaluation is reused afterwards.
pub struct ProjectMetadataAccessor<E> {
    evaluator: E,
    global_properties: BTreeMap<String, String>,
    evaluations: Mutex<HashMap<PathBuf, Arc<EvaluatedProject>>>,
}

impl<E> ProjectMetadataAccessor<E>
where
    E: ProjectEvaluator,
{
    /// Creates an accessor evaluating projects with `Configuration=Release`
    pub fn new(evaluator: E) -> Self {
        let mut global_properties = BTreeMap::new();
        global_properties.insert(
            "Configuration".to_string(),
            DEFAULT_CONFIGURATION.to_string(),
        );
        Self {
            evaluator,
            global_properties,
            evaluations: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_global_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_properties.insert(name.into(), value.into());
        self
    }

    pub fn global_properties(&self) -> &BTreeMap<String, String> {
        &self.global_properties
    }

    /// Whether the project references the test SDK or sets `IsTestProject=true`
    pub async fn is_test_project(&self, project_path: &Path) -> Result<bool> {
        let Some(project) = self.evaluate(project_path).await? else {
            return Ok(false);
        };

        let has_test_sdk_reference = project
            .items_of_type(PACKAGE_REFERENCE_ITEM)
            .any(|item| item.evaluated_include.eq_ignore_ascii_case(TEST_SDK_PACKAGE));
        let is_test_project_property = project
            .property(IS_TEST_PROJECT_PROPERTY)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(has_test_sdk_reference || is_test_project_property)
    }

    /// Assembly name (falls back to the file's base name) and version
    /// (falls back to `1.0.0`)
    pub async fn assembly_info(&self, project_path: &Path) -> Result<AssemblyInfo> {
        let project = self.evaluate(project_path).await?;
        let name = project
            .as_deref()
            .and_then(|p| p.property(ASSEMBLY_NAME_PROPERTY))
            .map(str::to_string)
            .unwrap_or_else(|| project_base_name(project_path));
        let version = version_or_default(project.as_deref().and_then(|p| p.property(VERSION_PROPERTY)));

        Ok(AssemblyInfo { name, version })
    }

    /// Output artifact and assembly name of the project
    ///
    /// # Errors
    /// Returns `SbomError::MissingProjectProperty` if the project does not
    /// define `TargetPath` or `AssemblyName`
    pub async fn output_info(&self, project_path: &Path) -> Result<Option<OutputInfo>> {
        let Some(project) = self.evaluate(project_path).await? else {
            return Ok(None);
        };

        let require = |property: &str| {
            project
                .property(property)
                .map(str::to_string)
                .ok_or_else(|| SbomError::MissingProjectProperty {
                    project: project_path.to_path_buf(),
                    property: property.to_string(),
                })
        };
        let target_path = PathBuf::from(require(TARGET_PATH_PROPERTY)?);
        let assembly_name = require(ASSEMBLY_NAME_PROPERTY)?;

        let target_path = if target_path.is_absolute() {
            target_path
        } else {
            project_directory(project_path).join(target_path)
        };

        Ok(Some(OutputInfo {
            assembly_name,
            target_path,
        }))
    }

    /// Absolute paths of the projects referenced with `<ProjectReference>`
    pub async fn project_references(&self, project_path: &Path) -> Result<BTreeSet<PathBuf>> {
        let Some(project) = self.evaluate(project_path).await? else {
            return Ok(BTreeSet::new());
        };

        let references = project
            .items_of_type(PROJECT_REFERENCE_ITEM)
            .map(|item| resolve_reference(project_path, &item.evaluated_include))
            .collect::<std::io::Result<BTreeSet<PathBuf>>>()?;
        Ok(references)
    }

    /// Package ids declared with `<PackageReference>`
    pub async fn package_references(&self, project_path: &Path) -> Result<Vec<String>> {
        let Some(project) = self.evaluate(project_path).await? else {
            return Ok(Vec::new());
        };

        Ok(project
            .items_of_type(PACKAGE_REFERENCE_ITEM)
            .map(|item| item.evaluated_include.clone())
            .collect())
    }

    async fn evaluate(&self, project_path: &Path) -> Result<Option<Arc<EvaluatedProject>>> {
        if !project_path.is_file() {
            return Ok(None);
        }

        if let Some(project) = self.cached(project_path) {
            return Ok(Some(project));
        }

        let project = Arc::new(
            self.evaluator
                .evaluate(project_path, &self.global_properties)
                .await?,
        );
        self.evaluations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(project_path.to_path_buf(), Arc::clone(&project));

        Ok(Some(project))
    }

    fn cached(&self, project_path: &Path) -> Option<Arc<EvaluatedProject>> {
        self.evaluations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(project_path)
            .cloned()
    }
}
