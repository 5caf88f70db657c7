use dotnet_sbom::prelude::*;
use dotnet_sbom::sbom_generation::domain::project_paths::{assets_file_path, packages_config_path};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway source tree with one directory per project
///
/// Only the files whose presence the resolver checks are created; their
/// contents come from the mocks.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// `<root>/<name>/<name>.csproj`
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name).join(format!("{}.csproj", name))
    }

    /// `<root>/<name>/bin/Release/net8.0/<name>.dll`
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir
            .path()
            .join(name)
            .join("bin")
            .join("Release")
            .join("net8.0")
            .join(format!("{}.dll", name))
    }

    pub fn create_project(&self, name: &str) -> PathBuf {
        let path = self.project_path(name);
        write_placeholder(&path, "<Project Sdk=\"Microsoft.NET.Sdk\" />");
        path
    }

    /// Creates `obj/project.assets.json` next to the project
    pub fn create_assets_file(&self, name: &str) -> PathBuf {
        let path = assets_file_path(&self.project_path(name), None);
        write_placeholder(&path, "{}");
        path
    }

    pub fn create_packages_config(&self, name: &str) -> PathBuf {
        let path = packages_config_path(&self.project_path(name));
        write_placeholder(&path, "<packages />");
        path
    }

    /// Evaluation of project `name` referencing `references` by sibling
    /// directory, with `package_references` declared as `<PackageReference>`
    pub fn evaluated(
        &self,
        name: &str,
        version: &str,
        references: &[&str],
        package_references: &[&str],
    ) -> EvaluatedProject {
        let properties = HashMap::from([
            ("AssemblyName".to_string(), name.to_string()),
            ("Version".to_string(), version.to_string()),
            (
                "TargetPath".to_string(),
                self.output_path(name).display().to_string(),
            ),
        ]);
        let items = references
            .iter()
            .map(|r| ProjectItem::new("ProjectReference", format!("../{0}/{0}.csproj", r)))
            .chain(
                package_references
                    .iter()
                    .map(|p| ProjectItem::new("PackageReference", *p)),
            )
            .collect();
        EvaluatedProject::new(properties, items)
    }
}

fn write_placeholder(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
