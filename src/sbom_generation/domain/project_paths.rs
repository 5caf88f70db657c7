//! Path conventions of .NET projects: which files are projects, where restore
//! writes its output, and how reference items resolve to absolute paths.

use std::path::{Component, Path, PathBuf};

/// Project file extensions the graph walkers traverse
pub const SUPPORTED_PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

/// File written by restore into the intermediate output directory
pub const ASSETS_FILE_NAME: &str = "project.assets.json";

/// Legacy package list kept next to the project file
pub const PACKAGES_CONFIG_FILE_NAME: &str = "packages.config";

pub fn is_supported_project_type(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_PROJECT_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Intermediate output (`obj`) directory of a project.
///
/// Without an override this is `<projectDir>/obj`. With a base intermediate
/// output path it is `<base>/obj/<projectFileBaseName>`.
pub fn intermediate_output_dir(project_path: &Path, base_intermediate_output_path: Option<&Path>) -> PathBuf {
    match base_intermediate_output_path.filter(|base| !base.as_os_str().is_empty()) {
        Some(base) => {
            let project_name = project_path.file_stem().unwrap_or_default();
            base.join("obj").join(project_name)
        }
        None => project_directory(project_path).join("obj"),
    }
}

/// Location of `project.assets.json` for a project
pub fn assets_file_path(project_path: &Path, base_intermediate_output_path: Option<&Path>) -> PathBuf {
    intermediate_output_dir(project_path, base_intermediate_output_path).join(ASSETS_FILE_NAME)
}

/// Location of the legacy `packages.config` for a project
pub fn packages_config_path(project_path: &Path) -> PathBuf {
    project_directory(project_path).join(PACKAGES_CONFIG_FILE_NAME)
}

pub fn project_directory(project_path: &Path) -> &Path {
    project_path.parent().unwrap_or_else(|| Path::new(""))
}

/// File name without extension, used as the fallback assembly name
pub fn project_base_name(project_path: &Path) -> String {
    project_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_path.to_string_lossy().into_owned())
}

/// Resolves a `ProjectReference` include relative to the referencing project.
///
/// The result is absolute even when `project_path` is relative. Includes
/// written with Windows separators are accepted on every platform.
pub fn resolve_reference(project_path: &Path, include: &str) -> std::io::Result<PathBuf> {
    let include = if cfg!(windows) {
        include.to_string()
    } else {
        include.replace('\\', "/")
    };
    absolute_path(&project_directory(project_path).join(include))
}

/// Makes `path` absolute against the current directory and normalizes it
pub fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

/// Removes `.` and `..` components without touching the file system
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` of the root is the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
