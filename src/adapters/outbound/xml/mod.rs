//! XML report adapters for the Gradle versions plugin and OWASP dependency-check
mod report_parser;
mod update_report;
mod vulnerability_report;

pub use report_parser::XmlReportParser;
pub use vulnerability_report::dependency_name_from_cache_path;
