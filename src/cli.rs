use clap::Parser;

use deps_check::application::dto::OutputFormat;

/// Check Gradle dependencies for vulnerabilities and available updates
#[derive(Parser, Debug)]
#[command(name = "deps-check")]
#[command(version)]
#[command(
    about = "Check Gradle dependencies for vulnerabilities and available updates",
    long_about = "Runs the OWASP dependency-check and Gradle versions tasks, applies the \
                  suppressions from deps-check.config.yml and reports every vulnerable or \
                  outdated dependency. Exits with 1 when a vulnerable dependency has an update."
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Config file path (defaults to deps-check.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Command used to invoke Gradle, overrides the config file
    #[arg(long, value_name = "CMD")]
    pub gradle_command: Option<String>,

    /// Use reports already on disk instead of running the Gradle tasks
    #[arg(long)]
    pub skip_tasks: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
