use super::messages;
use crate::dependency_check::domain::{
    DependenciesUpdateReport, Finding, OutdatedDependency, Version, VulnerableDependency,
};

/// Update status of a vulnerable dependency, looked up in the update report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VulnerabilityStatus<'a> {
    /// Not in the update report at all; only direct dependencies are listed there
    TransitiveUnknown,
    /// Listed as up to date
    NoUpdateAvailable,
    /// Listed as outdated; the fix is the newest available version
    UpdateAvailable(&'a Version),
}

/// Reporter - Turns reports into review findings
pub struct Reporter;

impl Reporter {
    /// One warning per outdated dependency
    pub fn report_outdated(outdated_dependencies: &[OutdatedDependency]) -> Vec<Finding> {
        outdated_dependencies
            .iter()
            .map(|d| Finding::warn(messages::outdated_dependency(d)))
            .collect()
    }

    /// One finding per vulnerable dependency
    ///
    /// A vulnerable dependency with an available update fails the review.
    /// Without an update, or when its update status is unknown because it is
    /// transitive, it is reported as a warning.
    pub fn report_vulnerable(
        vulnerable_dependencies: &[VulnerableDependency],
        dependencies_update_report: &DependenciesUpdateReport,
    ) -> Vec<Finding> {
        vulnerable_dependencies
            .iter()
            .map(
                |dependency| match Self::classify(dependency, dependencies_update_report) {
                    VulnerabilityStatus::TransitiveUnknown => {
                        Finding::warn(messages::vulnerable_transitive_dependency(dependency))
                    }
                    VulnerabilityStatus::NoUpdateAvailable => {
                        Finding::warn(messages::vulnerable_dependency_without_update(dependency))
                    }
                    VulnerabilityStatus::UpdateAvailable(newest) => Finding::fail(
                        messages::vulnerable_dependency_with_update(dependency, newest),
                    ),
                },
            )
            .collect()
    }

    /// Matches on the exact name including version, outdated entries first
    pub fn classify<'a>(
        dependency: &VulnerableDependency,
        report: &'a DependenciesUpdateReport,
    ) -> VulnerabilityStatus<'a> {
        if let Some(outdated) = report.find_outdated(&dependency.name) {
            VulnerabilityStatus::UpdateAvailable(&outdated.newest_available_version)
        } else if report.find_up_to_date(&dependency.name).is_some() {
            VulnerabilityStatus::NoUpdateAvailable
        } else {
            VulnerabilityStatus::TransitiveUnknown
        }
    }
}
