use super::vulnerability::Vulnerability;
use crate::shared::error::DepsCheckError;

/// Silences specific vulnerabilities of a dependency identified by `groupId:artifactId`
///
/// The suppression applies to every version of the dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilitySuppression {
    fully_qualified_name: String,
    vulnerabilities: Vec<Vulnerability>,
}

impl VulnerabilitySuppression {
    /// # Errors
    /// Returns `ConfigError` when `vulnerabilities` is empty
    pub fn new(
        fully_qualified_name: impl Into<String>,
        vulnerabilities: Vec<Vulnerability>,
    ) -> Result<Self, DepsCheckError> {
        let fully_qualified_name = fully_qualified_name.into();
        if vulnerabilities.is_empty() {
            return Err(DepsCheckError::config(format!(
                "Vulnerabilities must not be empty (suppression for {})",
                fully_qualified_name
            )));
        }
        Ok(Self {
            fully_qualified_name,
            vulnerabilities,
        })
    }

    pub fn for_dependency(
        group_id: &str,
        artifact_id: &str,
        vulnerabilities: Vec<String>,
    ) -> Result<Self, DepsCheckError> {
        Self::new(
            format!("{}:{}", group_id, artifact_id),
            vulnerabilities.into_iter().map(Vulnerability::new).collect(),
        )
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }
}

/// Silences the outdated report of one exact dependency version,
/// e.g. `com.squareup.retrofit2:retrofit:2.8.2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedDependencySuppression {
    fully_qualified_name_with_version: String,
}

impl OutdatedDependencySuppression {
    pub fn new(fully_qualified_name_with_version: impl Into<String>) -> Self {
        Self {
            fully_qualified_name_with_version: fully_qualified_name_with_version.into(),
        }
    }

    pub fn fully_qualified_name_with_version(&self) -> &str {
        &self.fully_qualified_name_with_version
    }
}

/// A vulnerability listed in a suppression but absent from the matched dependency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnusedVulnerabilitySuppression {
    pub fully_qualified_name: String,
    pub vulnerability: Vulnerability,
}

impl UnusedVulnerabilitySuppression {
    pub fn message(&self) -> String {
        format!(
            "Unused vulnerability suppression {} for dependency {}",
            self.vulnerability, self.fully_qualified_name
        )
    }
}

/// An outdated dependency suppression that matched no outdated dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedOutdatedDependencySuppression(pub OutdatedDependencySuppression);

impl UnusedOutdatedDependencySuppression {
    pub fn message(&self) -> String {
        format!(
            "Unused outdated dependency suppression {}",
            self.0.fully_qualified_name_with_version()
        )
    }
}

/// Result of reconciling a report against its suppressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionOutcome<R, U> {
    pub filtered: R,
    pub unused: Vec<U>,
}
