use crate::dependency_check::domain::{Finding, Severity};
use crate::ports::outbound::ReviewSink;
use owo_colors::OwoColorize;

/// ConsoleReviewSink adapter printing findings to stdout
///
/// Each finding is one line, prefixed with its severity so CI logs can be
/// grepped for `warning:` and `failure:`.
pub struct ConsoleReviewSink {
    colored: bool,
}

impl ConsoleReviewSink {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disables ANSI colors, e.g. when stdout is not a terminal
    pub fn plain() -> Self {
        Self { colored: false }
    }

    /// Renders a finding as the line this sink would print
    pub fn render(&self, finding: &Finding) -> String {
        match finding.severity {
            Severity::Warn => self.format_warning(&finding.message),
            Severity::Fail => self.format_failure(&finding.message),
        }
    }

    fn format_warning(&self, message: &str) -> String {
        if self.colored {
            format!("⚠️  {} {}", "warning:".yellow().bold(), message)
        } else {
            format!("⚠️  warning: {}", message)
        }
    }

    fn format_failure(&self, message: &str) -> String {
        if self.colored {
            format!("❌ {} {}", "failure:".red().bold(), message)
        } else {
            format!("❌ failure: {}", message)
        }
    }
}

impl Default for ConsoleReviewSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSink for ConsoleReviewSink {
    fn warn(&self, message: &str) {
        println!("{}", self.format_warning(message));
    }

    fn fail(&self, message: &str) {
        println!("{}", self.format_failure(message));
    }
}
