pub mod dependency_name;
pub mod finding;
pub mod suppression;
pub mod update_report;
pub mod vulnerability;

pub use dependency_name::{ArtifactId, DependencyName, FullyQualifiedName, GroupId, Version};
pub use finding::{Finding, Severity};
pub use suppression::{
    OutdatedDependencySuppression, SuppressionOutcome, UnusedOutdatedDependencySuppression,
    UnusedVulnerabilitySuppression, VulnerabilitySuppression,
};
pub use update_report::{DependenciesUpdateReport, OutdatedDependency, UpToDateDependency};
pub use vulnerability::{VulnerabilitiesReport, Vulnerability, VulnerableDependency};
