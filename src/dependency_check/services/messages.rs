//! Message texts posted to the review.
//!
//! Stateless formatting functions; everything they need is passed in.

use crate::dependency_check::domain::{OutdatedDependency, Version, VulnerableDependency};

pub fn outdated_dependency(dependency: &OutdatedDependency) -> String {
    format!(
        "Outdated dependency: {}. Newest available version: {}",
        dependency.name.fully_qualified_name_with_version(),
        dependency.newest_available_version
    )
}

pub fn vulnerable_transitive_dependency(dependency: &VulnerableDependency) -> String {
    format!(
        "{} Update unknown because this is a transitive dependency.",
        general_vulnerability(dependency)
    )
}

pub fn vulnerable_dependency_without_update(dependency: &VulnerableDependency) -> String {
    format!("{} No update found.", general_vulnerability(dependency))
}

pub fn vulnerable_dependency_with_update(
    dependency: &VulnerableDependency,
    newest_available_version: &Version,
) -> String {
    format!(
        "{} Please update to {}",
        general_vulnerability(dependency),
        newest_available_version
    )
}

fn general_vulnerability(dependency: &VulnerableDependency) -> String {
    let vulnerabilities = dependency
        .vulnerabilities
        .iter()
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Found vulnerabilities in dependency: {}, vulnerabilities: {}.",
        dependency.name.fully_qualified_name_with_version(),
        vulnerabilities
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_check::domain::{DependencyName, Vulnerability};

    fn retrofit() -> VulnerableDependency {
        VulnerableDependency::new(
            DependencyName::from_parts("com.squareup.retrofit2", "retrofit", "2.4.0"),
            vec![
                Vulnerability::new("CVE-2018-1000844"),
                Vulnerability::new("CVE-2018-1000850"),
            ],
        )
    }

    #[test]
    fn test_outdated_dependency_message() {
        let dependency = OutdatedDependency::new(
            DependencyName::from_parts("androidx.activity", "activity-compose", "1.7.2"),
            Version::new("1.8.2"),
        );
        assert_eq!(
            outdated_dependency(&dependency),
            "Outdated dependency: androidx.activity:activity-compose:1.7.2. Newest available version: 1.8.2"
        );
    }

    #[test]
    fn test_transitive_message() {
        assert_eq!(
            vulnerable_transitive_dependency(&retrofit()),
            "Found vulnerabilities in dependency: com.squareup.retrofit2:retrofit:2.4.0, \
             vulnerabilities: CVE-2018-1000844, CVE-2018-1000850. \
             Update unknown because this is a transitive dependency."
        );
    }

    #[test]
    fn test_without_update_message() {
        assert!(vulnerable_dependency_without_update(&retrofit()).ends_with("No update found."));
    }

    #[test]
    fn test_with_update_message() {
        let message = vulnerable_dependency_with_update(&retrofit(), &Version::new("2.9.0"));
        assert!(message.starts_with("Found vulnerabilities in dependency: com.squareup.retrofit2:retrofit:2.4.0"));
        assert!(message.ends_with("Please update to 2.9.0"));
    }
}
