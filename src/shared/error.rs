use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// SBOM generated successfully
    Success = 0,
    /// Package restore failed for one of the visited projects
    RestoreFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (evaluation error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies a top-level error into the exit code reported to the shell
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SbomError>() {
            Some(SbomError::RestoreFailed { .. }) => ExitCode::RestoreFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RestoreFailed => write!(f, "Restore Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Fatal conditions of a resolution run are represented here so that callers
/// can classify them with `downcast_ref` after they travel through `anyhow`.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Package restore failed for project: {project}\nDetails: {message}\n\n💡 Hint: Run `dotnet restore` manually to inspect the failure, or pass --disable-package-restore to use existing restore output")]
    RestoreFailed { project: PathBuf, message: String },

    #[error("Project {project} does not define the '{property}' property\n\n💡 Hint: Verify that the project can be evaluated with `dotnet msbuild -getProperty:{property}`")]
    MissingProjectProperty { project: PathBuf, property: String },

    #[error("No output identity registered for assembly '{assembly_name}'\n\n💡 Hint: Project components can only be assembled after the project reference graph has been walked")]
    IdentityNotRegistered { assembly_name: String },

    #[error("Failed to evaluate project: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the .NET SDK is installed and the project file is valid")]
    ProjectEvaluationError { path: PathBuf, details: String },

    #[error("Failed to parse project.assets.json: {path}\nDetails: {details}\n\n💡 Hint: Delete the obj directory and restore the project again")]
    AssetsFileParseError { path: PathBuf, details: String },

    #[error("Failed to parse packages.config: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the packages.config file is well formed")]
    PackagesFileParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing .csproj, .fsproj or .vbproj file")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Dependency resolution was cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::RestoreFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::RestoreFailed), "Restore Failed (1)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_for_restore_failure() {
        let error: anyhow::Error = SbomError::RestoreFailed {
            project: PathBuf::from("/src/App/App.csproj"),
            message: "NU1101: Unable to find package".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::RestoreFailed);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let error: anyhow::Error = SbomError::IdentityNotRegistered {
            assembly_name: "App".to_string(),
        }
        .into();
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);

        let error = anyhow::anyhow!("plain failure");
        assert_eq!(ExitCode::for_error(&error), ExitCode::ApplicationError);
    }

    #[test]
    fn test_exit_code_for_wrapped_restore_failure() {
        let error = anyhow::Error::from(SbomError::RestoreFailed {
            project: PathBuf::from("/src/App/App.csproj"),
            message: "failed".to_string(),
        })
        .context("while collecting packages");
        assert_eq!(ExitCode::for_error(&error), ExitCode::RestoreFailed);
    }

    #[test]
    fn test_restore_failed_display() {
        let error = SbomError::RestoreFailed {
            project: PathBuf::from("/src/App/App.csproj"),
            message: "NU1101: Unable to find package Foo".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package restore failed"));
        assert!(display.contains("/src/App/App.csproj"));
        assert!(display.contains("NU1101"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_project_property_display() {
        let error = SbomError::MissingProjectProperty {
            project: PathBuf::from("/src/Lib/Lib.csproj"),
            property: "TargetPath".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("/src/Lib/Lib.csproj"));
        assert!(display.contains("'TargetPath'"));
        assert!(display.contains("-getProperty:TargetPath"));
    }

    #[test]
    fn test_identity_not_registered_display() {
        let error = SbomError::IdentityNotRegistered {
            assembly_name: "Contoso.Core".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'Contoso.Core'"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = SbomError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "File does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("File does not exist"));
    }

    #[test]
    fn test_security_error_display() {
        let error = SbomError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_cancelled_display() {
        assert_eq!(
            SbomError::Cancelled.to_string(),
            "Dependency resolution was cancelled"
        );
    }
}
