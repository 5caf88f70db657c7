use crate::application::project_graph::{EVALUATED_ITEMS, EVALUATED_PROPERTIES};
use crate::ports::outbound::{EvaluatedProject, ProjectEvaluator, ProjectItem};
use crate::shared::error::SbomError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Executable used when none is configured
pub const DOTNET_EXECUTABLE: &str = "dotnet";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EvaluationOutput {
    #[serde(default)]
    properties: HashMap<String, String>,
    #[serde(default)]
    items: HashMap<String, Vec<EvaluatedItem>>,
}

#[derive(Debug, Deserialize)]
struct EvaluatedItem {
    #[serde(rename = "Identity")]
    identity: String,
}

/// MsBuildEvaluator adapter evaluating projects with `dotnet msbuild`
///
/// Only the properties and items the metadata accessor reads are requested;
/// MSBuild prints them as a JSON document.
pub struct MsBuildEvaluator {
    executable: PathBuf,
}

impl MsBuildEvaluator {
    pub fn new() -> Self {
        Self::with_executable(DOTNET_EXECUTABLE)
    }

    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    fn arguments(project_path: &Path, global_properties: &BTreeMap<String, String>) -> Vec<String> {
        let mut arguments = vec![
            "msbuild".to_string(),
            project_path.display().to_string(),
            "-nologo".to_string(),
        ];
        arguments.extend(
            EVALUATED_PROPERTIES
                .iter()
                .map(|property| format!("-getProperty:{}", property)),
        );
        arguments.extend(EVALUATED_ITEMS.iter().map(|item| format!("-getItem:{}", item)));
        arguments.extend(
            global_properties
                .iter()
                .map(|(name, value)| format!("-p:{}={}", name, value)),
        );
        arguments
    }
}

impl Default for MsBuildEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectEvaluator for MsBuildEvaluator {
    async fn evaluate(
        &self,
        project_path: &Path,
        global_properties: &BTreeMap<String, String>,
    ) -> Result<EvaluatedProject> {
        let evaluation_error = |details: String| SbomError::ProjectEvaluationError {
            path: project_path.to_path_buf(),
            details,
        };

        let output = Command::new(&self.executable)
            .args(Self::arguments(project_path, global_properties))
            .env("DOTNET_NOLOGO", "1")
            .output()
            .await
            .map_err(|e| {
                evaluation_error(format!(
                    "Failed to run {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(evaluation_error(format!(
                "{} exited with {}\n{}{}",
                self.executable.display(),
                output.status,
                stdout.trim(),
                stderr.trim()
            ))
            .into());
        }

        parse_evaluation(&stdout).map_err(|details| evaluation_error(details).into())
    }
}

/// Parses the JSON document printed by `-getProperty`/`-getItem`.
///
/// Anything MSBuild prints before the document (SDK notices and the like)
/// is skipped.
fn parse_evaluation(output: &str) -> std::result::Result<EvaluatedProject, String> {
    let start = output
        .find('{')
        .ok_or_else(|| format!("No evaluation output: {}", output.trim()))?;
    let evaluation: EvaluationOutput =
        serde_json::from_str(output[start..].trim_end()).map_err(|e| e.to_string())?;

    let items = evaluation
        .items
        .into_iter()
        .flat_map(|(item_type, items)| {
            items
                .into_iter()
                .map(move |item| ProjectItem::new(item_type.clone(), item.identity))
        })
        .collect();

    Ok(EvaluatedProject::new(evaluation.properties, items))
}
