mod cli;

use cli::Args;
use deps_check::adapters::outbound::console::StderrProgressReporter;
use deps_check::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter, WalkDirFileFinder,
};
use deps_check::adapters::outbound::process::ShellCommandRunner;
use deps_check::adapters::outbound::review::{ConsoleReviewSink, JsonReviewSink};
use deps_check::adapters::outbound::xml::XmlReportParser;
use deps_check::application::dto::{CheckRequest, CheckResponse, OutputFormat};
use deps_check::application::use_cases::CheckDependenciesUseCase;
use deps_check::config::resolve_config;
use deps_check::ports::outbound::{OutputPresenter, ReviewSink};
use deps_check::shared::error::{DepsCheckError, ExitCode};
use deps_check::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Structured logs on stderr, filtered by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Load configuration before touching any report
    let mut config = resolve_config(&project_path, args.config.as_deref().map(Path::new))?;
    if let Some(gradle_command) = args.gradle_command.as_deref() {
        config.gradle_command = gradle_command.to_string();
    }
    debug!(?config, "Resolved configuration");

    let request = CheckRequest::new(project_path.clone(), config, args.skip_tasks);

    let presenter: Box<dyn OutputPresenter> = match args.output.as_deref() {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };

    let response = match (args.format, args.output.is_some()) {
        (OutputFormat::Text, false) => {
            let sink = if args.no_color {
                ConsoleReviewSink::plain()
            } else {
                ConsoleReviewSink::new()
            };
            check(&project_path, request, sink)?.0
        }
        (OutputFormat::Text, true) => {
            let (response, collector) = check(&project_path, request, JsonReviewSink::new())?;
            let renderer = ConsoleReviewSink::plain();
            let text: String = collector
                .findings()
                .iter()
                .map(|finding| format!("{}\n", renderer.render(finding)))
                .collect();
            presenter.present(&text)?;
            response
        }
        (OutputFormat::Json, _) => {
            let (response, collector) = check(&project_path, request, JsonReviewSink::new())?;
            presenter.present(&collector.to_json()?)?;
            response
        }
    };

    info!(exit_code = %response.exit_code(), "Exiting");
    Ok(response.exit_code())
}

/// Wires the adapters into the use case and runs one check
fn check<S: ReviewSink>(
    project_path: &Path,
    request: CheckRequest,
    review_sink: S,
) -> Result<(CheckResponse, S)> {
    let use_case = CheckDependenciesUseCase::new(
        ShellCommandRunner::new(project_path.to_path_buf()),
        WalkDirFileFinder::new(),
        FileSystemReader::new(),
        XmlReportParser::new(),
        review_sink,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request)?;
    Ok((response, use_case.into_review_sink()))
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DepsCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DepsCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DepsCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(DepsCheckError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
