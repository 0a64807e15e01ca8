use super::dependency_name::{DependencyName, Version};
use std::collections::HashSet;
use std::hash::Hash;

/// Direct dependency with a newer version available
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutdatedDependency {
    pub name: DependencyName,
    pub newest_available_version: Version,
}

impl OutdatedDependency {
    pub fn new(name: DependencyName, newest_available_version: Version) -> Self {
        Self {
            name,
            newest_available_version,
        }
    }
}

/// Direct dependency already at its latest known version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpToDateDependency {
    pub name: DependencyName,
}

impl UpToDateDependency {
    pub fn new(name: DependencyName) -> Self {
        Self { name }
    }
}

/// Update status of every direct dependency of a project
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependenciesUpdateReport {
    pub outdated_dependencies: Vec<OutdatedDependency>,
    pub up_to_date_dependencies: Vec<UpToDateDependency>,
}

impl DependenciesUpdateReport {
    pub fn new(
        outdated_dependencies: Vec<OutdatedDependency>,
        up_to_date_dependencies: Vec<UpToDateDependency>,
    ) -> Self {
        Self {
            outdated_dependencies,
            up_to_date_dependencies,
        }
    }

    /// Appends another report's entries after this report's entries
    pub fn merge(mut self, other: DependenciesUpdateReport) -> Self {
        self.outdated_dependencies.extend(other.outdated_dependencies);
        self.up_to_date_dependencies
            .extend(other.up_to_date_dependencies);
        self
    }

    /// Removes exact duplicates from both lists, keeping first occurrences in order
    pub fn without_duplicates(self) -> Self {
        Self {
            outdated_dependencies: distinct(self.outdated_dependencies),
            up_to_date_dependencies: distinct(self.up_to_date_dependencies),
        }
    }

    pub fn find_outdated(&self, name: &DependencyName) -> Option<&OutdatedDependency> {
        self.outdated_dependencies.iter().find(|d| &d.name == name)
    }

    pub fn find_up_to_date(&self, name: &DependencyName) -> Option<&UpToDateDependency> {
        self.up_to_date_dependencies.iter().find(|d| &d.name == name)
    }
}

/// Order-preserving deduplication
pub(crate) fn distinct<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
