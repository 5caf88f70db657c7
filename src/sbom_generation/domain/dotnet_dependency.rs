use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Version assigned to a project or package that does not declare one
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Returns the declared version, or [`DEFAULT_VERSION`] when it is missing or blank
pub fn version_or_default(version: Option<&str>) -> String {
    match version.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VERSION.to_string(),
    }
}

/// Where a dependency comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyType {
    /// An externally published NuGet package
    Package,
    /// Another project of the same workspace
    Project,
}

/// CycloneDX component scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentScope {
    Required,
    Optional,
    Excluded,
}

impl ComponentScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentScope::Required => "required",
            ComponentScope::Optional => "optional",
            ComponentScope::Excluded => "excluded",
        }
    }
}

impl fmt::Display for ComponentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved dependency of a .NET project: either a NuGet package or a
/// referenced project.
///
/// Identity (equality and hashing) is `name + version + dependency_type`, so
/// collecting records into a `HashSet` deduplicates the same package reached
/// through several projects even when their dependency maps differ.
#[derive(Debug, Clone)]
pub struct DotnetDependency {
    name: String,
    version: String,
    path: Option<PathBuf>,
    dependencies: BTreeMap<String, String>,
    scope: ComponentScope,
    dependency_type: DependencyType,
}

impl DotnetDependency {
    /// Creates a package dependency with `Required` scope
    pub fn package(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version_or_default(version),
            path: None,
            dependencies: BTreeMap::new(),
            scope: ComponentScope::Required,
            dependency_type: DependencyType::Package,
        }
    }

    /// Creates a project dependency located at `project_path`
    pub fn project(name: impl Into<String>, version: Option<&str>, project_path: &Path) -> Self {
        Self {
            name: name.into(),
            version: version_or_default(version),
            path: Some(project_path.to_path_buf()),
            dependencies: BTreeMap::new(),
            scope: ComponentScope::Required,
            dependency_type: DependencyType::Project,
        }
    }

    pub fn with_dependencies(mut self, dependencies: BTreeMap<String, String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_scope(mut self, scope: ComponentScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Project file path; only set for `DependencyType::Project`
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Direct dependencies, name to version
    pub fn dependencies(&self) -> &BTreeMap<String, String> {
        &self.dependencies
    }

    pub fn scope(&self) -> ComponentScope {
        self.scope
    }

    pub fn dependency_type(&self) -> DependencyType {
        self.dependency_type
    }

    /// `name@version`, the reference used for this dependency in a BOM
    pub fn bom_ref(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

impl PartialEq for DotnetDependency {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.dependency_type == other.dependency_type
    }
}

impl Eq for DotnetDependency {}

impl Hash for DotnetDependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.version.hash(state);
        self.dependency_type.hash(state);
    }
}
