use deps_check::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Report files kept in memory, serving as both finder and reader
#[derive(Default, Clone)]
pub struct InMemoryReports {
    files: Arc<Vec<(PathBuf, String)>>,
}

impl InMemoryReports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: impl Into<String>) -> Self {
        let mut files = (*self.files).clone();
        files.push((PathBuf::from(path), content.into()));
        Self {
            files: Arc::new(files),
        }
    }
}

impl ReportFileFinder for InMemoryReports {
    fn find_files(&self, root_dir: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .iter()
            .map(|(path, _)| root_dir.join(path))
            .filter(|path| path.file_name().and_then(|n| n.to_str()) == Some(file_name))
            .collect())
    }
}

impl ReportReader for InMemoryReports {
    fn read_report(&self, path: &Path) -> Result<String> {
        self.files
            .iter()
            .find(|(relative, _)| path.ends_with(relative))
            .map(|(_, content)| content.clone())
            .ok_or_else(|| {
                DepsCheckError::FileReadError {
                    path: path.to_path_buf(),
                    details: "No such file".to_string(),
                }
                .into()
            })
    }
}
