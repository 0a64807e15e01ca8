use crate::application::dto::{CheckRequest, CheckResponse};
use crate::shared::Result;

/// DependenciesCheckPort - Inbound port for the dependency check use case
///
/// This is the application's public API: the CLI (or any other driver) hands
/// over a request and receives the summary of what was posted to the review.
pub trait DependenciesCheckPort {
    /// Runs the analysis tasks, reconciles their reports and posts findings
    ///
    /// # Errors
    /// Returns an error if:
    /// - An analysis task fails
    /// - A report file cannot be read or parsed
    fn check_dependencies(&self, request: CheckRequest) -> Result<CheckResponse>;
}
