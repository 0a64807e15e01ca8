/// Mock implementations for testing
mod fake_command_runner;
mod in_memory_reports;
mod mock_progress_reporter;
mod recording_review_sink;

pub use fake_command_runner::FakeCommandRunner;
pub use in_memory_reports::InMemoryReports;
pub use mock_progress_reporter::MockProgressReporter;
pub use recording_review_sink::RecordingReviewSink;
