use crate::shared::error::DepsCheckError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum report file size (100 MB)
///
/// dependency-check reports embed evidence for every scanned artifact and grow
/// quickly on large projects, but anything past this is not a report we produced.
pub const MAX_REPORT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DepsCheckError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata for {} operation: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(DepsCheckError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that a report path is a regular file within the size limit
///
/// # Returns
/// The file size in bytes
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn inspect_report_file(path: &Path, max_size: u64) -> Result<u64> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| DepsCheckError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(DepsCheckError::FileReadError {
            path: path.to_path_buf(),
            details: "Not a regular file".to_string(),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(DepsCheckError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Report is too large ({} bytes). Maximum allowed size is {} bytes.",
                size, max_size
            ),
            hint: "Check that the file is really an analysis report".to_string(),
        }
        .into());
    }

    Ok(size)
}
