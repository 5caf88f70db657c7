//! Configuration file support for dotnet-sbom.
//!
//! Provides YAML-based configuration through `dotnet-sbom.config.yml` files
//! and merges it with command-line arguments and environment variables.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::project_graph::{ResolutionOptions, DEFAULT_CONFIGURATION};
use crate::cli::Args;
use crate::sbom_generation::domain::OrganizationMetadata;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dotnet-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub exclude_test_projects: Option<bool>,
    pub disable_package_restore: Option<bool>,
    pub include_project_references: Option<bool>,
    pub base_intermediate_output_path: Option<PathBuf>,
    pub framework: Option<String>,
    pub runtime: Option<String>,
    pub configuration: Option<String>,
    pub organization: Option<OrganizationConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Organization stamped into the CPE of project components.
#[derive(Debug, Deserialize, Default)]
pub struct OrganizationConfig {
    pub vendor: Option<String>,
    pub product_name: Option<String>,
    pub product_version: Option<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    let named_values = [
        ("framework", &config.framework, "net8.0"),
        ("runtime", &config.runtime, "linux-x64"),
        ("configuration", &config.configuration, "Release"),
    ];
    for (field, value, example) in named_values {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default, or set a value such as \"{}\".",
                field,
                example
            );
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of a run.
///
/// Command-line arguments take precedence over the config file; organization
/// metadata from the config file takes precedence over the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_path: PathBuf,
    pub output: Option<PathBuf>,
    pub include_project_references: bool,
    pub configuration: String,
    pub options: ResolutionOptions,
    pub organization: OrganizationMetadata,
}

impl Settings {
    pub fn resolve(
        args: &Args,
        config: Option<ConfigFile>,
        environment: OrganizationMetadata,
    ) -> Self {
        let config = config.unwrap_or_default();
        let organization = match config.organization {
            Some(org) => environment.merged_with(OrganizationMetadata::new(
                org.vendor,
                org.product_name,
                org.product_version,
            )),
            None => environment,
        };

        Self {
            project_path: args.path.clone(),
            output: args.output.clone(),
            include_project_references: args.include_project_references
                || config.include_project_references.unwrap_or(false),
            configuration: args
                .configuration
                .clone()
                .or(config.configuration)
                .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string()),
            options: ResolutionOptions {
                base_intermediate_output_path: args
                    .base_intermediate_output_path
                    .clone()
                    .or(config.base_intermediate_output_path),
                exclude_test_projects: args.exclude_test_projects
                    || config.exclude_test_projects.unwrap_or(false),
                framework: args.framework.clone().or(config.framework),
                runtime: args.runtime.clone().or(config.runtime),
                disable_package_restore: args.disable_package_restore
                    || config.disable_package_restore.unwrap_or(false),
            },
            organization,
        }
    }
}
