//! Schema of the Gradle versions plugin XML report.
//!
//! ```xml
//! <response>
//!   <outdated>
//!     <dependencies>
//!       <outdatedDependency>
//!         <group>androidx.activity</group>
//!         <name>activity-compose</name>
//!         <version>1.7.2</version>
//!         <available><milestone>1.8.2</milestone></available>
//!       </outdatedDependency>
//!     </dependencies>
//!   </outdated>
//!   <current>
//!     <dependencies>
//!       <dependency><group>..</group><name>..</name><version>..</version></dependency>
//!     </dependencies>
//!   </current>
//! </response>
//! ```
//!
//! Only the fields below are declared; every other element or attribute the
//! plugin emits (`count`, `projectUrl`, `exceeded`, `unresolved`, ...) is skipped.

use crate::dependency_check::domain::{
    DependenciesUpdateReport, DependencyName, OutdatedDependency, UpToDateDependency, Version,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct XmlDependenciesUpdateReport {
    #[serde(rename = "outdated")]
    pub outdated_dependencies: XmlOutdatedDependencies,
    #[serde(rename = "current")]
    pub up_to_date_dependencies: XmlUpToDateDependencies,
}

impl XmlDependenciesUpdateReport {
    pub fn into_report(self) -> DependenciesUpdateReport {
        DependenciesUpdateReport::new(
            self.outdated_dependencies
                .dependencies
                .entries
                .into_iter()
                .map(XmlOutdatedDependency::into_outdated_dependency)
                .collect(),
            self.up_to_date_dependencies
                .dependencies
                .entries
                .into_iter()
                .map(XmlUpToDateDependency::into_up_to_date_dependency)
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct XmlOutdatedDependencies {
    #[serde(default)]
    pub dependencies: XmlOutdatedDependencyList,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlOutdatedDependencyList {
    #[serde(rename = "outdatedDependency", alias = "dependency", default)]
    pub entries: Vec<XmlOutdatedDependency>,
}

#[derive(Debug, Deserialize)]
pub struct XmlUpToDateDependencies {
    #[serde(default)]
    pub dependencies: XmlUpToDateDependencyList,
}

#[derive(Debug, Default, Deserialize)]
pub struct XmlUpToDateDependencyList {
    #[serde(rename = "dependency", default)]
    pub entries: Vec<XmlUpToDateDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlOutdatedDependency {
    #[serde(rename = "group")]
    pub group_id: String,
    #[serde(rename = "name")]
    pub artifact_id: String,
    #[serde(rename = "version")]
    pub current_version: String,
    #[serde(rename = "available")]
    pub available_version: XmlAvailableVersion,
}

impl XmlOutdatedDependency {
    pub fn into_outdated_dependency(self) -> OutdatedDependency {
        OutdatedDependency::new(
            DependencyName::from_parts(self.group_id, self.artifact_id, self.current_version),
            Version::new(self.available_version.milestone),
        )
    }
}

/// Newest versions per release channel; the milestone channel is the one reported
#[derive(Debug, Clone, Deserialize)]
pub struct XmlAvailableVersion {
    pub milestone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct XmlUpToDateDependency {
    #[serde(rename = "group")]
    pub group_id: String,
    #[serde(rename = "name")]
    pub artifact_id: String,
    #[serde(rename = "version")]
    pub current_version: String,
}

impl XmlUpToDateDependency {
    pub fn into_up_to_date_dependency(self) -> UpToDateDependency {
        UpToDateDependency::new(DependencyName::from_parts(
            self.group_id,
            self.artifact_id,
            self.current_version,
        ))
    }
}
