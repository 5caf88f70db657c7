use async_trait::async_trait;
use std::path::Path;

/// Outcome of a package restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreResult {
    pub success: bool,
    pub error_message: Option<String>,
}

impl RestoreResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    pub fn failed(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(error_message.into()),
        }
    }
}

/// PackageRestorer port for the external restore step
///
/// A restore (re)generates `project.assets.json` for a project. Failures are
/// reported in the returned [`RestoreResult`], never as a panic.
#[async_trait]
pub trait PackageRestorer: Send + Sync {
    async fn restore(
        &self,
        project_path: &Path,
        framework: Option<&str>,
        runtime: Option<&str>,
    ) -> RestoreResult;
}
