use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use dotnet_sbom::prelude::*;

/// A restore request as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreCall {
    pub project_path: PathBuf,
    pub framework: Option<String>,
    pub runtime: Option<String>,
}

/// Mock PackageRestorer recording every restore request
#[derive(Default)]
pub struct MockPackageRestorer {
    pub failing: HashSet<PathBuf>,
    pub calls: Arc<Mutex<Vec<RestoreCall>>>,
}

impl MockPackageRestorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(mut self, project_path: PathBuf) -> Self {
        self.failing.insert(project_path);
        self
    }
}

#[async_trait]
impl PackageRestorer for MockPackageRestorer {
    async fn restore(
        &self,
        project_path: &Path,
        framework: Option<&str>,
        runtime: Option<&str>,
    ) -> RestoreResult {
        self.calls.lock().unwrap().push(RestoreCall {
            project_path: project_path.to_path_buf(),
            framework: framework.map(str::to_string),
            runtime: runtime.map(str::to_string),
        });

        if self.failing.contains(project_path) {
            RestoreResult::failed("Mock restore failure")
        } else {
            RestoreResult::succeeded()
        }
    }
}
