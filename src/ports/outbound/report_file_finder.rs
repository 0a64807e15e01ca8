use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportFileFinder port for locating analysis reports on disk
///
/// Multi-module builds write one report per module, so a single report name
/// may resolve to several files.
pub trait ReportFileFinder {
    /// Finds every file named `file_name` below `root_dir`
    ///
    /// # Returns
    /// Matching paths; an empty list when nothing is found
    ///
    /// # Errors
    /// Returns an error if the directory tree cannot be traversed
    fn find_files(&self, root_dir: &Path, file_name: &str) -> Result<Vec<PathBuf>>;
}
