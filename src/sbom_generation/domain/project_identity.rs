use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Identity of a project's build output, recorded when the output is hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    output_path: PathBuf,
    project_path: PathBuf,
    hash: String,
}

impl ProjectIdentity {
    pub fn new(output_path: PathBuf, project_path: PathBuf, hash: String) -> Self {
        Self {
            output_path,
            project_path,
            hash,
        }
    }

    /// The compiled artifact (e.g. `bin/Release/net8.0/App.dll`)
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Lowercase hex digest of the output artifact
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// File name of the output artifact
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Registry of output identities keyed by assembly name.
///
/// Owned by one resolution run. Assembly names are assumed to be unique within
/// a run; when two projects emit the same assembly name the later registration
/// replaces the earlier one and the replaced entry is handed back to the caller.
#[derive(Debug, Default, Clone)]
pub struct ProjectRegistry {
    entries: HashMap<String, ProjectIdentity>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `identity` under `assembly_name`, returning any identity it replaced
    pub fn register(
        &mut self,
        assembly_name: impl Into<String>,
        identity: ProjectIdentity,
    ) -> Option<ProjectIdentity> {
        self.entries.insert(assembly_name.into(), identity)
    }

    pub fn get(&self, assembly_name: &str) -> Option<&ProjectIdentity> {
        self.entries.get(assembly_name)
    }

    pub fn contains(&self, assembly_name: &str) -> bool {
        self.entries.contains_key(assembly_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
