use crate::dependency_check::domain::{
    DependenciesUpdateReport, OutdatedDependencySuppression, SuppressionOutcome,
    UnusedOutdatedDependencySuppression, UnusedVulnerabilitySuppression, VulnerabilitiesReport,
    Vulnerability, VulnerabilitySuppression, VulnerableDependency,
};
use std::collections::HashSet;

/// Suppressor - Reconciles reports against configured suppressions
///
/// Both passes filter the whole report first and only then collect the
/// suppressions that went unused, so the unused list reflects the complete
/// reconciliation.
pub struct Suppressor;

impl Suppressor {
    /// Removes suppressed vulnerabilities from the report
    ///
    /// A dependency matches the first suppression with the same `groupId:artifactId`.
    /// It keeps only the vulnerabilities the suppression does not name, and is
    /// dropped when none remain. A suppressed id is unused when no matched
    /// version of the dependency carries it; each one is returned once, in
    /// suppression order.
    pub fn suppress_vulnerable_dependencies(
        report: &VulnerabilitiesReport,
        suppressions: &[VulnerabilitySuppression],
    ) -> SuppressionOutcome<VulnerabilitiesReport, UnusedVulnerabilitySuppression> {
        // Per suppression: ids seen on any matched version, None while unmatched
        let mut present: Vec<Option<HashSet<&Vulnerability>>> = vec![None; suppressions.len()];

        let filtered = report
            .dependencies
            .iter()
            .filter_map(|dependency| {
                let fully_qualified_name = dependency.name.fully_qualified_name().value();
                match suppressions
                    .iter()
                    .position(|s| s.fully_qualified_name() == fully_qualified_name)
                {
                    None => Some(dependency.clone()),
                    Some(index) => {
                        present[index]
                            .get_or_insert_with(HashSet::new)
                            .extend(dependency.vulnerabilities.iter());
                        remaining_vulnerabilities(dependency, &suppressions[index])
                    }
                }
            })
            .collect();

        let mut seen_unused = HashSet::new();
        let unused = suppressions
            .iter()
            .zip(&present)
            .filter_map(|(suppression, present)| present.as_ref().map(|p| (suppression, p)))
            .flat_map(|(suppression, present)| {
                suppression
                    .vulnerabilities()
                    .iter()
                    .filter(move |v| !present.contains(v))
                    .map(move |v| UnusedVulnerabilitySuppression {
                        fully_qualified_name: suppression.fully_qualified_name().to_string(),
                        vulnerability: v.clone(),
                    })
            })
            .filter(|entry| seen_unused.insert(entry.clone()))
            .collect();

        SuppressionOutcome {
            filtered: VulnerabilitiesReport::new(filtered),
            unused,
        }
    }

    /// Removes suppressed outdated dependencies from the report
    ///
    /// Matching is by exact `groupId:artifactId:version`. Up-to-date
    /// dependencies are never suppressed.
    pub fn suppress_outdated_dependencies(
        report: &DependenciesUpdateReport,
        suppressions: &[OutdatedDependencySuppression],
    ) -> SuppressionOutcome<DependenciesUpdateReport, UnusedOutdatedDependencySuppression> {
        let mut used = vec![false; suppressions.len()];

        let outdated_dependencies = report
            .outdated_dependencies
            .iter()
            .filter(|dependency| {
                let coordinates = dependency.name.fully_qualified_name_with_version();
                match suppressions
                    .iter()
                    .position(|s| s.fully_qualified_name_with_version() == coordinates)
                {
                    Some(index) => {
                        used[index] = true;
                        false
                    }
                    None => true,
                }
            })
            .cloned()
            .collect();

        let unused = suppressions
            .iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(suppression, _)| UnusedOutdatedDependencySuppression(suppression.clone()))
            .collect();

        SuppressionOutcome {
            filtered: DependenciesUpdateReport::new(
                outdated_dependencies,
                report.up_to_date_dependencies.clone(),
            ),
            unused,
        }
    }
}

/// `dependency − suppression`, `None` when nothing is left
fn remaining_vulnerabilities(
    dependency: &VulnerableDependency,
    suppression: &VulnerabilitySuppression,
) -> Option<VulnerableDependency> {
    let suppressed: HashSet<_> = suppression.vulnerabilities().iter().collect();
    let remaining: Vec<_> = dependency
        .vulnerabilities
        .iter()
        .filter(|v| !suppressed.contains(v))
        .cloned()
        .collect();

    if remaining.is_empty() {
        None
    } else {
        Some(dependency.with_vulnerabilities(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_check::domain::{
        DependencyName, OutdatedDependency, UpToDateDependency, Version,
    };

    fn vulnerabilities(ids: &[&str]) -> Vec<Vulnerability> {
        ids.iter().map(|id| Vulnerability::new(*id)).collect()
    }

    fn vulnerability_suppression(name: &str, ids: &[&str]) -> VulnerabilitySuppression {
        VulnerabilitySuppression::new(name, vulnerabilities(ids)).unwrap()
    }

    fn retrofit(ids: &[&str]) -> VulnerableDependency {
        VulnerableDependency::new(
            DependencyName::from_parts("com.squareup.retrofit2", "retrofit", "2.4.0"),
            vulnerabilities(ids),
        )
    }

    fn datastore_core(ids: &[&str]) -> VulnerableDependency {
        VulnerableDependency::new(
            DependencyName::from_parts("androidx.datastore", "datastore-preferences-core", "1.0.0"),
            vulnerabilities(ids),
        )
    }

    // ========== vulnerabilities ==========

    #[test]
    fn test_suppress_all_vulnerabilities_from_multiple_dependencies() {
        let suppressions = vec![
            vulnerability_suppression(
                "com.squareup.retrofit2:retrofit",
                &["CVE-2018-1000844", "CVE-2018-1000850"],
            ),
            vulnerability_suppression(
                "androidx.datastore:datastore-preferences-core",
                &["CVE-2022-3171", "CVE-2022-3510"],
            ),
        ];
        let report = VulnerabilitiesReport::new(vec![
            retrofit(&["CVE-2018-1000844", "CVE-2018-1000850"]),
            datastore_core(&["CVE-2022-3171", "CVE-2022-3510"]),
        ]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert!(outcome.filtered.dependencies.is_empty());
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_suppress_some_vulnerabilities_from_multiple_dependencies() {
        let suppressions = vec![
            vulnerability_suppression("com.squareup.retrofit2:retrofit", &["CVE-2018-1000844"]),
            vulnerability_suppression(
                "androidx.datastore:datastore-preferences-core",
                &["CVE-2022-3171"],
            ),
        ];
        let datastore_preferences = VulnerableDependency::new(
            DependencyName::from_parts("androidx.datastore", "datastore-preferences", "1.0.0"),
            vulnerabilities(&["CVE-2022-3171"]),
        );
        let report = VulnerabilitiesReport::new(vec![
            retrofit(&["CVE-2018-1000844", "CVE-2018-1000850"]),
            datastore_core(&["CVE-2022-3171", "CVE-2022-3510"]),
            datastore_preferences.clone(),
        ]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert_eq!(
            outcome.filtered.dependencies,
            vec![
                retrofit(&["CVE-2018-1000850"]),
                datastore_core(&["CVE-2022-3510"]),
                datastore_preferences,
            ]
        );
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_no_suppressions_keeps_report() {
        let report = VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844"])]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &[]);

        assert_eq!(outcome.filtered, report);
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_unused_vulnerability_suppressions_are_reported() {
        let suppressions = vec![
            vulnerability_suppression(
                "com.squareup.retrofit2:retrofit",
                &["CVE-2018-1000844", "CVE-2018-1000850"],
            ),
            vulnerability_suppression(
                "androidx.datastore:datastore-preferences-core",
                &["CVE-2022-3171", "CVE-2022-3510"],
            ),
        ];
        let report = VulnerabilitiesReport::new(vec![
            retrofit(&["CVE-2018-1000844"]),
            datastore_core(&["CVE-2022-3171"]),
        ]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        let messages: Vec<String> = outcome.unused.iter().map(|u| u.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Unused vulnerability suppression CVE-2018-1000850 for dependency com.squareup.retrofit2:retrofit",
                "Unused vulnerability suppression CVE-2022-3510 for dependency androidx.datastore:datastore-preferences-core",
            ]
        );
        assert!(outcome.filtered.dependencies.is_empty());
    }

    #[test]
    fn test_partial_suppression_keeps_remaining_and_reports_nothing() {
        let suppressions = vec![vulnerability_suppression(
            "com.squareup.retrofit2:retrofit",
            &["CVE-2018-1000844"],
        )];
        let report =
            VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844", "CVE-2018-1000850"])]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert_eq!(
            outcome.filtered.dependencies,
            vec![retrofit(&["CVE-2018-1000850"])]
        );
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_suppression_applies_to_every_version() {
        let suppressions = vec![vulnerability_suppression(
            "com.squareup.retrofit2:retrofit",
            &["CVE-2018-1000844"],
        )];
        let other_version = VulnerableDependency::new(
            DependencyName::from_parts("com.squareup.retrofit2", "retrofit", "2.5.0"),
            vulnerabilities(&["CVE-2018-1000844"]),
        );
        let report =
            VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844"]), other_version]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert!(outcome.filtered.dependencies.is_empty());
    }

    #[test]
    fn test_identical_unused_entries_collapse() {
        let suppressions = vec![vulnerability_suppression(
            "com.squareup.retrofit2:retrofit",
            &["CVE-2018-1000844", "CVE-2099-0001"],
        )];
        let other_version = VulnerableDependency::new(
            DependencyName::from_parts("com.squareup.retrofit2", "retrofit", "2.5.0"),
            vulnerabilities(&["CVE-2018-1000844"]),
        );
        let report =
            VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844"]), other_version]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert_eq!(outcome.unused.len(), 1);
        assert_eq!(outcome.unused[0].vulnerability.as_str(), "CVE-2099-0001");
    }

    #[test]
    fn test_ids_split_across_versions_are_all_used() {
        let suppressions = vec![vulnerability_suppression(
            "com.squareup.retrofit2:retrofit",
            &["CVE-2018-1000844", "CVE-2018-1000850", "CVE-2099-0001"],
        )];
        let other_version = VulnerableDependency::new(
            DependencyName::from_parts("com.squareup.retrofit2", "retrofit", "2.5.0"),
            vulnerabilities(&["CVE-2018-1000850"]),
        );
        let report =
            VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844"]), other_version]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert!(outcome.filtered.dependencies.is_empty());
        let unused: Vec<&str> = outcome
            .unused
            .iter()
            .map(|u| u.vulnerability.as_str())
            .collect();
        assert_eq!(unused, vec!["CVE-2099-0001"]);
    }

    #[test]
    fn test_suppression_for_absent_dependency_is_not_reported() {
        let suppressions = vec![vulnerability_suppression(
            "com.squareup.okio:okio",
            &["CVE-2023-3635"],
        )];
        let report = VulnerabilitiesReport::new(vec![retrofit(&["CVE-2018-1000844"])]);

        let outcome = Suppressor::suppress_vulnerable_dependencies(&report, &suppressions);

        assert_eq!(outcome.filtered, report);
        assert!(outcome.unused.is_empty());
    }

    // ========== outdated dependencies ==========

    fn outdated(group: &str, artifact: &str, version: &str) -> OutdatedDependency {
        OutdatedDependency::new(
            DependencyName::from_parts(group, artifact, version),
            Version::new("99.0.0"),
        )
    }

    #[test]
    fn test_outdated_no_suppressions_keeps_report() {
        let report = DependenciesUpdateReport::new(
            vec![outdated("com.group.id", "artifact-id", "1.0.0")],
            vec![UpToDateDependency::new(DependencyName::from_parts(
                "com.group.id",
                "other",
                "1.0.0",
            ))],
        );

        let outcome = Suppressor::suppress_outdated_dependencies(&report, &[]);

        assert_eq!(outcome.filtered, report);
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_suppress_updates_of_multiple_dependencies() {
        let retrofit = outdated("com.squareup.retrofit2", "retrofit", "2.4.0");
        let datastore = outdated("androidx.datastore", "datastore-preferences-core", "1.0.0");
        let kept = outdated("androidx.core", "core-ktx", "1.12.0");
        let suppressions = vec![
            OutdatedDependencySuppression::new(retrofit.name.fully_qualified_name_with_version()),
            OutdatedDependencySuppression::new(datastore.name.fully_qualified_name_with_version()),
        ];
        let report =
            DependenciesUpdateReport::new(vec![retrofit, kept.clone(), datastore], vec![]);

        let outcome = Suppressor::suppress_outdated_dependencies(&report, &suppressions);

        assert_eq!(outcome.filtered.outdated_dependencies, vec![kept]);
        assert!(outcome.unused.is_empty());
    }

    #[test]
    fn test_outdated_suppression_requires_exact_version() {
        let suppressions = vec![OutdatedDependencySuppression::new(
            "com.squareup.retrofit2:retrofit:2.5.0",
        )];
        let report = DependenciesUpdateReport::new(
            vec![outdated("com.squareup.retrofit2", "retrofit", "2.4.0")],
            vec![],
        );

        let outcome = Suppressor::suppress_outdated_dependencies(&report, &suppressions);

        assert_eq!(outcome.filtered.outdated_dependencies.len(), 1);
        assert_eq!(
            outcome.unused[0].message(),
            "Unused outdated dependency suppression com.squareup.retrofit2:retrofit:2.5.0"
        );
    }

    #[test]
    fn test_outdated_suppression_never_touches_up_to_date() {
        let up_to_date = UpToDateDependency::new(DependencyName::from_parts(
            "com.squareup.retrofit2",
            "retrofit",
            "2.4.0",
        ));
        let suppressions = vec![OutdatedDependencySuppression::new(
            "com.squareup.retrofit2:retrofit:2.4.0",
        )];
        let report = DependenciesUpdateReport::new(vec![], vec![up_to_date.clone()]);

        let outcome = Suppressor::suppress_outdated_dependencies(&report, &suppressions);

        assert_eq!(outcome.filtered.up_to_date_dependencies, vec![up_to_date]);
        assert_eq!(outcome.unused.len(), 1);
    }

    #[test]
    fn test_duplicate_outdated_suppression_reports_second_as_unused() {
        let suppressions = vec![
            OutdatedDependencySuppression::new("com.squareup.retrofit2:retrofit:2.4.0"),
            OutdatedDependencySuppression::new("com.squareup.retrofit2:retrofit:2.4.0"),
        ];
        let report = DependenciesUpdateReport::new(
            vec![outdated("com.squareup.retrofit2", "retrofit", "2.4.0")],
            vec![],
        );

        let outcome = Suppressor::suppress_outdated_dependencies(&report, &suppressions);

        assert!(outcome.filtered.outdated_dependencies.is_empty());
        assert_eq!(outcome.unused.len(), 1);
    }
}
