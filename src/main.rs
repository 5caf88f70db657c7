mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_generation;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::dotnet::{DotnetRestorer, MsBuildEvaluator};
use adapters::outbound::filesystem::{
    PackagesConfigReader, ProjectAssetsFileReader, Sha256ContentHasher,
};
use adapters::outbound::formatters::CycloneDxFormatter;
use application::dto::SbomRequest;
use application::factories::{PresenterFactory, PresenterType};
use application::project_graph::{
    DependencySourceReconciler, ProjectGraphResolver, ProjectMetadataAccessor,
};
use application::use_cases::GenerateSbomUseCase;
use cli::Args;
use config::Settings;
use ports::outbound::SbomFormatter;
use sbom_generation::domain::project_paths::{is_supported_project_type, project_directory};
use sbom_generation::domain::OrganizationMetadata;
use sbom_generation::services::ComponentAssembler;
use shared::error::{ExitCode, SbomError};
use shared::Result;
use std::path::Path;
use std::process;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<()> {
    validate_project_path(&args.path)?;

    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(project_directory(&args.path))?,
    };
    let settings = Settings::resolve(&args, config, OrganizationMetadata::from_env());

    // Create adapters (Dependency Injection)
    let metadata = ProjectMetadataAccessor::new(MsBuildEvaluator::new())
        .with_global_property("Configuration", settings.configuration.clone());
    let reconciler = DependencySourceReconciler::new(
        DotnetRestorer::new(),
        ProjectAssetsFileReader::new(),
        PackagesConfigReader::new(),
    );
    let resolver = ProjectGraphResolver::new(
        metadata,
        reconciler,
        Sha256ContentHasher::new(),
        StderrProgressReporter::new(),
    );
    let use_case =
        GenerateSbomUseCase::new(resolver, ComponentAssembler::new(settings.organization));

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let request = SbomRequest::new(
        settings.project_path,
        settings.include_project_references,
        settings.options,
    );
    let response = use_case.execute(request, &cancel).await?;

    eprintln!("📝 Generating CycloneDX JSON format output...");
    let document = CycloneDxFormatter::new().format(&response)?;

    PresenterFactory::create(PresenterType::from_output(settings.output)).present(&document)
}

fn validate_project_path(path: &Path) -> Result<()> {
    let invalid = |reason: &str| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    // Get metadata without following symlinks
    let metadata = std::fs::symlink_metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => invalid("File does not exist"),
        _ => invalid(&format!("Failed to read path metadata: {}", e)),
    })?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.",
        )
        .into());
    }

    if !metadata.is_file() {
        return Err(invalid("Not a file").into());
    }

    if !is_supported_project_type(path) {
        return Err(invalid("Unsupported project type").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_project() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("App.fsproj");
        fs::write(&project, "<Project />").unwrap();

        assert!(validate_project_path(&project).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let err = validate_project_path(&PathBuf::from("/nonexistent/App/App.csproj")).unwrap_err();
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn test_validate_project_path_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = validate_project_path(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Not a file"));
    }

    #[test]
    fn test_validate_project_path_unsupported_type() {
        let temp_dir = TempDir::new().unwrap();
        let solution = temp_dir.path().join("Shop.sln");
        fs::write(&solution, "").unwrap();

        let err = validate_project_path(&solution).unwrap_err();
        assert!(err.to_string().contains("Unsupported project type"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("App.csproj");
        fs::write(&project, "<Project />").unwrap();
        let link = temp_dir.path().join("Link.csproj");
        std::os::unix::fs::symlink(&project, &link).unwrap();

        let err = validate_project_path(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
