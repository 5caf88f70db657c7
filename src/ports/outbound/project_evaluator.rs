use crate::shared::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// An evaluated item of a project (`<ProjectReference Include="..." />`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub item_type: String,
    pub evaluated_include: String,
}

impl ProjectItem {
    pub fn new(item_type: impl Into<String>, evaluated_include: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            evaluated_include: evaluated_include.into(),
        }
    }
}

/// Result of evaluating a project file: its properties and items after
/// imports, SDK targets and property expressions were applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatedProject {
    properties: HashMap<String, String>,
    items: Vec<ProjectItem>,
}

impl EvaluatedProject {
    pub fn new(properties: HashMap<String, String>, items: Vec<ProjectItem>) -> Self {
        Self { properties, items }
    }

    /// Evaluated value of a property; empty values are reported as unset
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn items(&self) -> &[ProjectItem] {
        &self.items
    }

    pub fn items_of_type<'a>(&'a self, item_type: &'a str) -> impl Iterator<Item = &'a ProjectItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.item_type == item_type)
    }
}

/// ProjectEvaluator port for the build-system evaluator
///
/// Implementations resolve imports, SDK targets and property expressions of a
/// project file. The evaluator never modifies the project.
#[async_trait]
pub trait ProjectEvaluator: Send + Sync {
    /// Evaluates `project_path` with the given global properties
    ///
    /// # Errors
    /// Returns `SbomError::ProjectEvaluationError` if evaluation fails
    async fn evaluate(
        &self,
        project_path: &Path,
        global_properties: &BTreeMap<String, String>,
    ) -> Result<EvaluatedProject>;
}
