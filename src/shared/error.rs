use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a run that reported failures
/// from a run that could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - nothing reported, or only warnings
    Success = 0,
    /// At least one failure was reported (vulnerable dependency with an available update)
    FailuresReported = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (parse error, config error, external command failure, I/O)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FailuresReported => write!(f, "Failures Reported (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency checks.
#[derive(Debug, Error)]
pub enum DepsCheckError {
    #[error("Failed to parse report file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the report was produced by a supported version of the analysis tool")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Command failed: {command}\nExit status: {status}\n\n💡 Hint: Run the command manually to inspect its output")]
    CommandFailed { command: String, status: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DepsCheckError {
    pub fn config(message: impl Into<String>) -> Self {
        DepsCheckError::ConfigError {
            message: message.into(),
        }
    }
}
