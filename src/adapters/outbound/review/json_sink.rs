use crate::dependency_check::domain::{Finding, Severity};
use crate::ports::outbound::ReviewSink;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cell::RefCell;

/// Machine-readable review document
#[derive(Debug, Clone, Serialize)]
pub struct ReviewDocument {
    pub tool: ToolInfo,
    pub generated_at: DateTime<Utc>,
    pub summary: ReviewSummary,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub warnings: usize,
    pub failures: usize,
}

/// JsonReviewSink adapter collecting findings into a JSON document
///
/// Findings are kept in posting order; the document is rendered once the
/// check has finished.
pub struct JsonReviewSink {
    findings: RefCell<Vec<Finding>>,
}

impl JsonReviewSink {
    pub fn new() -> Self {
        Self {
            findings: RefCell::new(Vec::new()),
        }
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.findings.borrow().clone()
    }

    pub fn document(&self) -> ReviewDocument {
        let findings = self.findings();
        let failures = findings.iter().filter(|f| f.is_failure()).count();

        ReviewDocument {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now(),
            summary: ReviewSummary {
                warnings: findings.len() - failures,
                failures,
            },
            findings,
        }
    }

    /// Renders the collected findings as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.document())?;
        json.push('\n');
        Ok(json)
    }

    fn push(&self, severity: Severity, message: &str) {
        self.findings.borrow_mut().push(Finding {
            severity,
            message: message.to_string(),
        });
    }
}

impl Default for JsonReviewSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSink for JsonReviewSink {
    fn warn(&self, message: &str) {
        self.push(Severity::Warn, message);
    }

    fn fail(&self, message: &str) {
        self.push(Severity::Fail, message);
    }
}
