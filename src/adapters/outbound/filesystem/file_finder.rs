use crate::ports::outbound::ReportFileFinder;
use crate::shared::error::DepsCheckError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Directory levels searched below the project root
///
/// Multi-module Gradle builds keep reports at `<module>/build/...`, a few
/// levels deep; anything further down is not a build output.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// WalkDirFileFinder adapter locating report files by exact file name
///
/// Symbolic links are not followed. Results are sorted so the order of
/// merged reports does not depend on directory iteration order.
pub struct WalkDirFileFinder {
    max_depth: usize,
}

impl WalkDirFileFinder {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for WalkDirFileFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFileFinder for WalkDirFileFinder {
    fn find_files(&self, root_dir: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
        if !root_dir.is_dir() {
            return Err(DepsCheckError::InvalidProjectPath {
                path: root_dir.to_path_buf(),
                reason: "Search root is not a directory".to_string(),
            }
            .into());
        }

        let mut files: Vec<PathBuf> = WalkDir::new(root_dir)
            .follow_links(false)
            .max_depth(self.max_depth)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() == file_name)
            .map(|entry| entry.into_path())
            .collect();

        files.sort();

        debug!(
            root = %root_dir.display(),
            file_name,
            found = files.len(),
            "Searched for report files"
        );
        Ok(files)
    }
}
