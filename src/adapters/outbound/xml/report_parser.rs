use super::update_report::XmlDependenciesUpdateReport;
use super::vulnerability_report::XmlVulnerabilitiesReport;
use crate::dependency_check::domain::{DependenciesUpdateReport, VulnerabilitiesReport};
use crate::ports::outbound::{ReportParser, ReportSource};
use crate::shared::error::DepsCheckError;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use tracing::debug;

/// XmlReportParser adapter decoding Gradle plugin XML reports with quick-xml
pub struct XmlReportParser;

impl XmlReportParser {
    pub fn new() -> Self {
        Self
    }

    fn decode<T: DeserializeOwned>(source: &ReportSource) -> Result<T> {
        quick_xml::de::from_str(&source.content).map_err(|e| {
            DepsCheckError::ReportParseError {
                path: source.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for XmlReportParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportParser for XmlReportParser {
    fn parse_updates(&self, sources: &[ReportSource]) -> Result<DependenciesUpdateReport> {
        let mut merged = DependenciesUpdateReport::default();

        for source in sources {
            let report = Self::decode::<XmlDependenciesUpdateReport>(source)?.into_report();
            debug!(
                path = %source.path.display(),
                outdated = report.outdated_dependencies.len(),
                up_to_date = report.up_to_date_dependencies.len(),
                "Parsed dependency updates report"
            );
            merged = merged.merge(report);
        }

        Ok(merged.without_duplicates())
    }

    fn parse_vulnerabilities(&self, sources: &[ReportSource]) -> Result<VulnerabilitiesReport> {
        let mut dependencies = Vec::new();

        for source in sources {
            let vulnerable = Self::decode::<XmlVulnerabilitiesReport>(source)?
                .into_vulnerable_dependencies(&source.path)?;
            debug!(
                path = %source.path.display(),
                vulnerable = vulnerable.len(),
                "Parsed vulnerabilities report"
            );
            dependencies.extend(vulnerable);
        }

        Ok(VulnerabilitiesReport::normalized(dependencies))
    }
}
