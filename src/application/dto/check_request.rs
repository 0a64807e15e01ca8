use crate::config::Config;
use std::path::PathBuf;

/// CheckRequest - Internal request DTO for the dependency check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Project root; tasks run here and reports are searched below it
    pub project_path: PathBuf,
    /// Validated configuration (tasks, report names, suppressions)
    pub config: Config,
    /// Use the reports already on disk instead of running the Gradle tasks
    pub skip_tasks: bool,
}

impl CheckRequest {
    pub fn new(project_path: PathBuf, config: Config, skip_tasks: bool) -> Self {
        Self {
            project_path,
            config,
            skip_tasks,
        }
    }
}
