use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use dotnet_sbom::prelude::*;

/// Mock ProjectEvaluator returning canned evaluations per project path
#[derive(Default)]
pub struct MockProjectEvaluator {
    pub projects: HashMap<PathBuf, EvaluatedProject>,
    pub evaluated: Arc<Mutex<Vec<PathBuf>>>,
    pub global_properties: Arc<Mutex<Vec<BTreeMap<String, String>>>>,
}

impl MockProjectEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, path: PathBuf, project: EvaluatedProject) -> Self {
        self.projects.insert(path, project);
        self
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluated.lock().unwrap().len()
    }
}

#[async_trait]
impl ProjectEvaluator for MockProjectEvaluator {
    async fn evaluate(
        &self,
        project_path: &Path,
        global_properties: &BTreeMap<String, String>,
    ) -> Result<EvaluatedProject> {
        self.evaluated
            .lock()
            .unwrap()
            .push(project_path.to_path_buf());
        self.global_properties
            .lock()
            .unwrap()
            .push(global_properties.clone());

        match self.projects.get(project_path) {
            Some(project) => Ok(project.clone()),
            None => anyhow::bail!("Mock evaluation failure: {}", project_path.display()),
        }
    }
}
