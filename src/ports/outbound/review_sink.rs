use crate::dependency_check::domain::{Finding, Severity};

/// ReviewSink port receiving the messages posted to the code review
///
/// Implementations decide how a warning or a failure is rendered: console
/// output, a collected document, a review API client.
pub trait ReviewSink {
    /// Posts a non-blocking warning
    fn warn(&self, message: &str);

    /// Posts a failure that should block the review
    fn fail(&self, message: &str);

    /// Dispatches a finding by its severity
    fn publish(&self, finding: &Finding) {
        match finding.severity {
            Severity::Warn => self.warn(&finding.message),
            Severity::Fail => self.fail(&finding.message),
        }
    }
}
