use super::dependency_name::DependencyName;
use super::update_report::distinct;
use std::fmt;

/// Identifier of a known vulnerability, e.g. `CVE-2023-3635`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vulnerability(String);

impl Vulnerability {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dependency (direct or transitive) with known vulnerabilities
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VulnerableDependency {
    pub name: DependencyName,
    pub vulnerabilities: Vec<Vulnerability>,
}

impl VulnerableDependency {
    pub fn new(name: DependencyName, vulnerabilities: Vec<Vulnerability>) -> Self {
        Self {
            name,
            vulnerabilities,
        }
    }

    /// Copy of this dependency carrying a different vulnerability list
    pub fn with_vulnerabilities(&self, vulnerabilities: Vec<Vulnerability>) -> Self {
        Self {
            name: self.name.clone(),
            vulnerabilities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VulnerabilitiesReport {
    pub dependencies: Vec<VulnerableDependency>,
}

impl VulnerabilitiesReport {
    pub fn new(dependencies: Vec<VulnerableDependency>) -> Self {
        Self { dependencies }
    }

    /// Builds a normalized report: entries without vulnerabilities are dropped
    /// and identical entries are collapsed, first occurrence first.
    pub fn normalized(dependencies: Vec<VulnerableDependency>) -> Self {
        let with_findings = dependencies
            .into_iter()
            .filter(|d| !d.vulnerabilities.is_empty())
            .collect();
        Self {
            dependencies: distinct(with_findings),
        }
    }

    /// Total number of vulnerabilities across all dependencies
    pub fn vulnerability_count(&self) -> usize {
        self.dependencies
            .iter()
            .map(|d| d.vulnerabilities.len())
            .sum()
    }
}
