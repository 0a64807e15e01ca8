/// Process adapters for running the analysis tasks
mod command_runner;

pub use command_runner::ShellCommandRunner;
