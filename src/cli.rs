use clap::Parser;
use std::path::PathBuf;

/// Generate CycloneDX SBOMs for .NET projects
#[derive(Parser, Debug)]
#[command(name = "dotnet-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for .NET projects from their NuGet packages and project references",
    long_about = None
)]
pub struct Args {
    /// Path to the root project file (.csproj, .fsproj or .vbproj)
    #[arg(short, long, value_name = "PROJECT_FILE")]
    pub path: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Leave out the packages of test projects
    #[arg(short = 't', long)]
    pub exclude_test_projects: bool,

    /// Use existing restore output instead of running `dotnet restore`
    #[arg(long)]
    pub disable_package_restore: bool,

    /// Add referenced projects as components, with their output hashes
    #[arg(long)]
    pub include_project_references: bool,

    /// Directory holding restore output when it is not next to each project
    #[arg(long, value_name = "DIR")]
    pub base_intermediate_output_path: Option<PathBuf>,

    /// Target framework to restore (e.g. net8.0)
    #[arg(long, value_name = "TFM")]
    pub framework: Option<String>,

    /// Runtime identifier to restore (e.g. linux-x64)
    #[arg(long, value_name = "RID")]
    pub runtime: Option<String>,

    /// Build configuration used to evaluate projects [default: Release]
    #[arg(long, value_name = "NAME")]
    pub configuration: Option<String>,

    /// Configuration file (defaults to dotnet-sbom.config.yml next to the project)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
