/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, shell, review tool, console).
pub mod command_runner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_file_finder;
pub mod report_parser;
pub mod report_reader;
pub mod review_sink;

pub use command_runner::CommandRunner;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_file_finder::ReportFileFinder;
pub use report_parser::{ReportParser, ReportSource};
pub use report_reader::ReportReader;
pub use review_sink::ReviewSink;
