use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a restore output or packages file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is an existing regular file that may be read.
///
/// Symbolic links are rejected, as are directories and files larger than
/// `max_size` bytes.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "project.assets.json")
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the tool at the real file instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum is {} bytes)",
                file_description,
                metadata.len(),
                max_size
            ),
            hint: "Check that the file was generated by a .NET restore".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a text file after [`validate_regular_file`] accepts it
pub fn read_bounded_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        SbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("Failed to read {}: {}", file_description, e),
        }
        .into()
    })
}
