use crate::shared::error::ExitCode;

/// CheckResponse - Outcome of a dependency check
///
/// The findings themselves were already posted to the review sink; the
/// response only carries the tally needed for the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckResponse {
    /// Warnings posted, including unused suppressions
    pub warnings: usize,
    /// Failures posted
    pub failures: usize,
}

impl CheckResponse {
    pub fn new(warnings: usize, failures: usize) -> Self {
        Self { warnings, failures }
    }

    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }

    /// Warnings never fail a run; a single failure does
    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::FailuresReported
        } else {
            ExitCode::Success
        }
    }
}
