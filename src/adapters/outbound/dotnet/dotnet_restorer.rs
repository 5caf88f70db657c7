use super::DOTNET_EXECUTABLE;
use crate::ports::outbound::{PackageRestorer, RestoreResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// DotnetRestorer adapter running `dotnet restore` on a single project
pub struct DotnetRestorer {
    executable: PathBuf,
}

impl DotnetRestorer {
    pub fn new() -> Self {
        Self::with_executable(DOTNET_EXECUTABLE)
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn arguments(project_path: &Path, framework: Option<&str>, runtime: Option<&str>) -> Vec<String> {
        let mut arguments = vec!["restore".to_string(), project_path.display().to_string()];
        if let Some(runtime) = runtime.filter(|r| !r.trim().is_empty()) {
            arguments.push("--runtime".to_string());
            arguments.push(runtime.to_string());
        }
        if let Some(framework) = framework.filter(|f| !f.trim().is_empty()) {
            arguments.push(format!("-p:TargetFramework={}", framework));
        }
        arguments
    }
}

impl Default for DotnetRestorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageRestorer for DotnetRestorer {
    async fn restore(
        &self,
        project_path: &Path,
        framework: Option<&str>,
        runtime: Option<&str>,
    ) -> RestoreResult {
        let output = Command::new(&self.executable)
            .args(Self::arguments(project_path, framework, runtime))
            .env("DOTNET_NOLOGO", "1")
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => RestoreResult::succeeded(),
            Ok(output) => {
                // restore reports its errors on stdout
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let errors: Vec<&str> = stdout
                    .lines()
                    .chain(stderr.lines())
                    .map(str::trim)
                    .filter(|line| line.contains("error"))
                    .collect();
                let message = if errors.is_empty() {
                    format!("dotnet restore exited with {}", output.status)
                } else {
                    errors.join("\n")
                };
                RestoreResult::failed(message)
            }
            Err(e) => RestoreResult::failed(format!(
                "Failed to run {}: {}",
                self.executable.display(),
                e
            )),
        }
    }
}
