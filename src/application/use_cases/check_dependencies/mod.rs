use crate::application::dto::{CheckRequest, CheckResponse};
use crate::config::Config;
use crate::dependency_check::domain::{
    DependenciesUpdateReport, Finding, Severity, VulnerabilitiesReport,
};
use crate::dependency_check::services::{Reporter, Suppressor};
use crate::ports::inbound::DependenciesCheckPort;
use crate::ports::outbound::{
    CommandRunner, ProgressReporter, ReportFileFinder, ReportParser, ReportReader, ReportSource,
    ReviewSink,
};
use crate::shared::Result;
use std::cell::Cell;
use std::path::Path;
use tracing::{debug, info, warn};


/// CheckDependenciesUseCase - Core use case for the dependency check
///
/// Runs the analysis tasks, loads both reports, applies the configured
/// suppressions and posts every finding to the review sink. All
/// infrastructure is injected through generic parameters.
///
/// # Type Parameters
/// * `C` - CommandRunner implementation
/// * `F` - ReportFileFinder implementation
/// * `R` - ReportReader implementation
/// * `RP` - ReportParser implementation
/// * `S` - ReviewSink implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckDependenciesUseCase<C, F, R, RP, S, PR> {
    command_runner: C,
    file_finder: F,
    report_reader: R,
    report_parser: RP,
    review_sink: S,
    progress_reporter: PR,
    warnings: Cell<usize>,
    failures: Cell<usize>,
}

impl<C, F, R, RP, S, PR> CheckDependenciesUseCase<C, F, R, RP, S, PR>
where
    C: CommandRunner,
    F: ReportFileFinder,
    R: ReportReader,
    RP: ReportParser,
    S: ReviewSink,
    PR: ProgressReporter,
{
    /// Creates a new CheckDependenciesUseCase with injected dependencies
    pub fn new(
        command_runner: C,
        file_finder: F,
        report_reader: R,
        report_parser: RP,
        review_sink: S,
        progress_reporter: PR,
    ) -> Self {
        Self {
            command_runner,
            file_finder,
            report_reader,
            report_parser,
            review_sink,
            progress_reporter,
            warnings: Cell::new(0),
            failures: Cell::new(0),
        }
    }

    /// The sink findings are posted to
    pub fn review_sink(&self) -> &S {
        &self.review_sink
    }

    /// Consumes the use case, handing back the sink with everything posted to it
    pub fn into_review_sink(self) -> S {
        self.review_sink
    }

    /// Executes the dependency check
    ///
    /// # Arguments
    /// * `request` - Project path, configuration and task options
    ///
    /// # Returns
    /// CheckResponse with the number of warnings and failures posted
    ///
    /// # Errors
    /// Fails fast when a task fails or a report cannot be read or parsed.
    /// Findings posted before the error stay posted.
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.warnings.set(0);
        self.failures.set(0);
        let config = &request.config;

        // Step 1: Produce fresh reports
        if request.skip_tasks {
            info!("Skipping analysis tasks, using reports already on disk");
        } else {
            self.run_tasks(config)?;
        }

        // Step 2: Vulnerabilities, suppressed before the update report is loaded
        let vulnerabilities_report = self.load_vulnerabilities(&request.project_path, config)?;
        let vulnerabilities = Suppressor::suppress_vulnerable_dependencies(
            &vulnerabilities_report,
            &config.vulnerabilities.suppressions,
        );
        for unused in &vulnerabilities.unused {
            self.publish(&Finding::warn(unused.message()));
        }

        // Step 3: Dependency updates
        let updates_report = self.load_updates(&request.project_path, config)?;
        let updates = Suppressor::suppress_outdated_dependencies(
            &updates_report,
            &config.outdated_dependencies.suppressions,
        );
        for unused in &updates.unused {
            self.publish(&Finding::warn(unused.message()));
        }

        // Step 4: Correlate and report
        for finding in
            Reporter::report_vulnerable(&vulnerabilities.filtered.dependencies, &updates.filtered)
        {
            self.publish(&finding);
        }
        for finding in Reporter::report_outdated(&updates.filtered.outdated_dependencies) {
            self.publish(&finding);
        }

        let response = CheckResponse::new(self.warnings.get(), self.failures.get());
        info!(
            warnings = response.warnings,
            failures = response.failures,
            "Dependency check finished"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Dependency check finished: {} warning(s), {} failure(s)",
            response.warnings, response.failures
        ));

        Ok(response)
    }

    /// Runs the vulnerability task, then the updates task
    fn run_tasks(&self, config: &Config) -> Result<()> {
        let commands = [
            format!("{} {}", config.gradle_command, config.vulnerabilities.task),
            format!("{} {}", config.gradle_command, config.outdated_dependencies.task),
        ];

        for command in &commands {
            self.progress_reporter
                .report(&format!("🚀 Running: {}", command));
            self.command_runner.run(command)?;
        }

        Ok(())
    }

    fn load_vulnerabilities(
        &self,
        project_path: &Path,
        config: &Config,
    ) -> Result<VulnerabilitiesReport> {
        let sources =
            self.read_sources(project_path, &config.vulnerabilities.report_file_name)?;
        let report = self.report_parser.parse_vulnerabilities(&sources)?;

        self.progress_reporter.report(&format!(
            "🛡️  Found {} vulnerable dependency(ies) in {} report(s)",
            report.dependencies.len(),
            sources.len()
        ));
        Ok(report)
    }

    fn load_updates(
        &self,
        project_path: &Path,
        config: &Config,
    ) -> Result<DependenciesUpdateReport> {
        let sources =
            self.read_sources(project_path, &config.outdated_dependencies.report_file_name)?;
        let report = self.report_parser.parse_updates(&sources)?;

        self.progress_reporter.report(&format!(
            "📦 Found {} outdated dependency(ies) in {} report(s)",
            report.outdated_dependencies.len(),
            sources.len()
        ));
        Ok(report)
    }

    /// Finds every report with the given file name and reads it
    fn read_sources(&self, project_path: &Path, file_name: &str) -> Result<Vec<ReportSource>> {
        self.progress_reporter
            .report(&format!("🔍 Searching for {}...", file_name));

        let paths = self.file_finder.find_files(project_path, file_name)?;
        if paths.is_empty() {
            warn!(
                file_name,
                root = %project_path.display(),
                "No report files found"
            );
            self.progress_reporter.report_error(&format!(
                "⚠️  No {} found under {}",
                file_name,
                project_path.display()
            ));
        }

        let total = paths.len();
        paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                debug!(path = %path.display(), "Reading report");
                let content = self.report_reader.read_report(&path)?;
                self.progress_reporter
                    .report_progress(i + 1, total, Some(&path.display().to_string()));
                Ok(ReportSource::new(path, content))
            })
            .collect()
    }

    fn publish(&self, finding: &Finding) {
        match finding.severity {
            Severity::Warn => self.warnings.set(self.warnings.get() + 1),
            Severity::Fail => self.failures.set(self.failures.get() + 1),
        }
        self.review_sink.publish(finding);
    }
}

impl<C, F, R, RP, S, PR> DependenciesCheckPort for CheckDependenciesUseCase<C, F, R, RP, S, PR>
where
    C: CommandRunner,
    F: ReportFileFinder,
    R: ReportReader,
    RP: ReportParser,
    S: ReviewSink,
    PR: ProgressReporter,
{
    fn check_dependencies(&self, request: CheckRequest) -> Result<CheckResponse> {
        self.execute(request)
    }
}
