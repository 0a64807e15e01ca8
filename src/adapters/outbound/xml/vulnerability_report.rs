//! Schema of the OWASP dependency-check XML report.
//!
//! The report does not carry Maven coordinates in a stable place, so the
//! identity of a dependency is taken from its location in the Gradle cache:
//! `.../files-2.1/<group>/<artifact>/<version>/<hash>/<fileName>`.

use crate::dependency_check::domain::{DependencyName, Vulnerability, VulnerableDependency};
use crate::shared::error::DepsCheckError;
use serde::Deserialize;
use std::path::Path;

/// Trailing path segments that make up a Gradle cache location
const GRADLE_CACHE_SEGMENTS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct XmlVulnerabilitiesReport {
    #[serde(default)]
    pub dependencies: XmlReportDependencyList,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlReportDependencyList {
    #[serde(rename = "dependency", default)]
    pub entries: Vec<XmlReportDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlReportDependency {
    #[serde(rename = "fileName", default)]
    pub file_name: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(default)]
    pub vulnerabilities: XmlVulnerabilityList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XmlVulnerabilityList {
    #[serde(rename = "vulnerability", default)]
    pub entries: Vec<XmlVulnerability>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlVulnerability {
    pub name: String,
}

impl XmlVulnerabilitiesReport {
    /// Converts every dependency that carries at least one vulnerability
    ///
    /// Clean dependencies are skipped before their identity is derived, so
    /// project-local jars outside the Gradle cache never cause an error.
    ///
    /// # Errors
    /// Returns `ReportParseError` when a vulnerable dependency's path does not
    /// follow the Gradle cache layout.
    pub fn into_vulnerable_dependencies(
        self,
        report_path: &Path,
    ) -> Result<Vec<VulnerableDependency>, DepsCheckError> {
        self.dependencies
            .entries
            .into_iter()
            .filter(|dependency| !dependency.vulnerabilities.entries.is_empty())
            .map(|dependency| dependency.into_vulnerable_dependency(report_path))
            .collect()
    }
}

impl XmlReportDependency {
    fn into_vulnerable_dependency(
        self,
        report_path: &Path,
    ) -> Result<VulnerableDependency, DepsCheckError> {
        let name = dependency_name_from_cache_path(&self.file_path).ok_or_else(|| {
            DepsCheckError::ReportParseError {
                path: report_path.to_path_buf(),
                details: format!(
                    "Cannot derive group, artifact and version of '{}' from path '{}'",
                    self.file_name, self.file_path
                ),
            }
        })?;

        Ok(VulnerableDependency::new(
            name,
            self.vulnerabilities
                .entries
                .into_iter()
                .map(|v| Vulnerability::new(v.name))
                .collect(),
        ))
    }
}

/// Reads group, artifact and version out of a Gradle cache file path
///
/// Both `/` and `\` are accepted as separators.
pub fn dependency_name_from_cache_path(file_path: &str) -> Option<DependencyName> {
    let segments: Vec<&str> = file_path
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() < GRADLE_CACHE_SEGMENTS {
        return None;
    }

    let tail = &segments[segments.len() - GRADLE_CACHE_SEGMENTS..];
    Some(DependencyName::from_parts(tail[0], tail[1], tail[2]))
}
