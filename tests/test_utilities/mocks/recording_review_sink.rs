use deps_check::prelude::*;
use std::sync::{Arc, Mutex};

/// Captures everything posted to the review, in order
#[derive(Default, Clone)]
pub struct RecordingReviewSink {
    findings: Arc<Mutex<Vec<Finding>>>,
}

impl RecordingReviewSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.findings.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warn)
    }

    pub fn failures(&self) -> Vec<String> {
        self.messages(Severity::Fail)
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.findings()
            .into_iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message)
            .collect()
    }
}

impl ReviewSink for RecordingReviewSink {
    fn warn(&self, message: &str) {
        self.findings.lock().unwrap().push(Finding::warn(message));
    }

    fn fail(&self, message: &str) {
        self.findings.lock().unwrap().push(Finding::fail(message));
    }
}
