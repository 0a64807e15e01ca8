//! deps-check - Dependency review for Gradle projects
//!
//! This library reconciles the XML reports of OWASP dependency-check and the
//! Gradle versions plugin against a suppression list and turns the result into
//! review findings, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_check`): Report model, suppression and correlation logic
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): `deps-check.config.yml` loading and validation
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use deps_check::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let project_path = PathBuf::from(".");
//!
//! // Create use case with injected adapters
//! let use_case = CheckDependenciesUseCase::new(
//!     ShellCommandRunner::new(project_path.clone()),
//!     WalkDirFileFinder::new(),
//!     FileSystemReader::new(),
//!     XmlReportParser::new(),
//!     ConsoleReviewSink::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CheckRequest::new(project_path, Config::default(), false);
//! let response = use_case.execute(request)?;
//! std::process::exit(response.exit_code().as_i32());
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_check;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter, WalkDirFileFinder,
    };
    pub use crate::adapters::outbound::process::ShellCommandRunner;
    pub use crate::adapters::outbound::review::{ConsoleReviewSink, JsonReviewSink};
    pub use crate::adapters::outbound::xml::XmlReportParser;
    pub use crate::application::dto::{CheckRequest, CheckResponse, OutputFormat};
    pub use crate::application::use_cases::CheckDependenciesUseCase;
    pub use crate::config::{Config, TaskNameWithArgs};
    pub use crate::dependency_check::domain::{
        DependenciesUpdateReport, DependencyName, Finding, OutdatedDependency,
        OutdatedDependencySuppression, Severity, UpToDateDependency, Version, Vulnerability,
        VulnerabilitiesReport, VulnerabilitySuppression, VulnerableDependency,
    };
    pub use crate::dependency_check::services::{Reporter, Suppressor};
    pub use crate::ports::inbound::DependenciesCheckPort;
    pub use crate::ports::outbound::{
        CommandRunner, OutputPresenter, ProgressReporter, ReportFileFinder, ReportParser,
        ReportReader, ReportSource, ReviewSink,
    };
    pub use crate::shared::error::{DepsCheckError, ExitCode};
    pub use crate::shared::Result;
}
