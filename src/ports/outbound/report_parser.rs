use crate::dependency_check::domain::{DependenciesUpdateReport, VulnerabilitiesReport};
use crate::shared::Result;
use std::path::PathBuf;

/// Raw report content together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSource {
    pub path: PathBuf,
    pub content: String,
}

impl ReportSource {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// ReportParser port turning raw reports into normalized domain reports
///
/// Both operations accept any number of sources (including none) and merge
/// them into one deduplicated report. Parsing is fail-fast: the first
/// malformed source aborts with an error and no partial report is returned.
pub trait ReportParser {
    fn parse_updates(&self, sources: &[ReportSource]) -> Result<DependenciesUpdateReport>;

    fn parse_vulnerabilities(&self, sources: &[ReportSource]) -> Result<VulnerabilitiesReport>;
}
