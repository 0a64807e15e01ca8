use crate::ports::outbound::ReportReader;
use crate::shared::error::DepsCheckError;
use crate::shared::security::{inspect_report_file, MAX_REPORT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading report files from the file system
///
/// Every read goes through the report file checks first: symbolic links,
/// non-regular files and oversized files are rejected before any content
/// is loaded.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_REPORT_FILE_SIZE,
        }
    }

    /// Creates a reader with a custom size limit in bytes
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        inspect_report_file(path, self.max_file_size)?;

        fs::read_to_string(path).map_err(|e| {
            DepsCheckError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
