//! Configuration file support for deps-check.
//!
//! Provides YAML-based configuration through `deps-check.config.yml` files,
//! including the file schema, loading, validation and the resolved [`Config`]
//! the check runs with.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::dependency_check::domain::{OutdatedDependencySuppression, VulnerabilitySuppression};
use crate::shared::error::DepsCheckError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deps-check.config.yml";

pub const DEFAULT_GRADLE_COMMAND: &str = "./gradlew";
pub const DEFAULT_VULNERABILITIES_TASK: &str = "dependencyCheckAnalyze";
pub const DEFAULT_VULNERABILITIES_TASK_ARGS: &[&str] = &["--info"];
pub const DEFAULT_VULNERABILITIES_REPORT: &str = "dependency-check-report.xml";
pub const DEFAULT_OUTDATED_TASK: &str = "dependencyUpdates";
pub const DEFAULT_OUTDATED_REPORT: &str = "dependency-updates-report.xml";

// ========== Resolved configuration ==========

/// A build task together with its command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskNameWithArgs {
    pub task_name: String,
    pub args: Vec<String>,
}

impl TaskNameWithArgs {
    pub fn new(task_name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            task_name: task_name.into(),
            args,
        }
    }

    /// The task as it appears on a command line, e.g. `dependencyCheckAnalyze --info`
    pub fn value(&self) -> String {
        std::iter::once(self.task_name.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TaskNameWithArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilitiesConfig {
    pub task: TaskNameWithArgs,
    pub report_file_name: String,
    pub suppressions: Vec<VulnerabilitySuppression>,
}

impl Default for VulnerabilitiesConfig {
    fn default() -> Self {
        Self {
            task: TaskNameWithArgs::new(
                DEFAULT_VULNERABILITIES_TASK,
                DEFAULT_VULNERABILITIES_TASK_ARGS
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect(),
            ),
            report_file_name: DEFAULT_VULNERABILITIES_REPORT.to_string(),
            suppressions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedDependenciesConfig {
    pub task: TaskNameWithArgs,
    pub report_file_name: String,
    pub suppressions: Vec<OutdatedDependencySuppression>,
}

impl Default for OutdatedDependenciesConfig {
    fn default() -> Self {
        Self {
            task: TaskNameWithArgs::new(DEFAULT_OUTDATED_TASK, Vec::new()),
            report_file_name: DEFAULT_OUTDATED_REPORT.to_string(),
            suppressions: Vec::new(),
        }
    }
}

/// Validated configuration of a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gradle_command: String,
    pub vulnerabilities: VulnerabilitiesConfig,
    pub outdated_dependencies: OutdatedDependenciesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradle_command: DEFAULT_GRADLE_COMMAND.to_string(),
            vulnerabilities: VulnerabilitiesConfig::default(),
            outdated_dependencies: OutdatedDependenciesConfig::default(),
        }
    }
}

// ========== File schema ==========

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub gradle_command: Option<String>,
    pub vulnerabilities: Option<VulnerabilitiesSection>,
    pub outdated_dependencies: Option<OutdatedDependenciesSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct VulnerabilitiesSection {
    pub task: Option<String>,
    pub args: Option<Vec<String>>,
    pub report_file_name: Option<String>,
    #[serde(default)]
    pub suppressions: Vec<VulnerabilitySuppressionEntry>,
}

/// Vulnerabilities to ignore for one dependency, across all of its versions.
#[derive(Debug, Deserialize)]
pub struct VulnerabilitySuppressionEntry {
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub vulnerabilities: Vec<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutdatedDependenciesSection {
    pub task: Option<String>,
    pub args: Option<Vec<String>>,
    pub report_file_name: Option<String>,
    /// Exact `group:artifact:version` coordinates
    #[serde(default)]
    pub suppressions: Vec<String>,
}

// ========== Loading ==========

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config_file: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    warn_unknown_fields(&config_file);

    config_file
        .into_config()
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<Config>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolves the configuration for a project
///
/// An explicit path must exist; otherwise the project directory is searched
/// and the built-in defaults apply when no file is present.
pub fn resolve_config(project_dir: &Path, explicit_path: Option<&Path>) -> Result<Config> {
    match explicit_path {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(project_dir)?.unwrap_or_default()),
    }
}

impl ConfigFile {
    /// Validates the file contents and applies defaults for absent fields
    ///
    /// # Errors
    /// Returns `ConfigError` for blank names, empty vulnerability lists,
    /// malformed coordinates or a dependency suppressed twice.
    pub fn into_config(self) -> std::result::Result<Config, DepsCheckError> {
        let defaults = Config::default();

        let gradle_command = match self.gradle_command {
            Some(command) => non_blank(command, "gradle_command")?,
            None => defaults.gradle_command,
        };

        let vulnerabilities = match self.vulnerabilities {
            Some(section) => section.into_config(defaults.vulnerabilities)?,
            None => defaults.vulnerabilities,
        };

        let outdated_dependencies = match self.outdated_dependencies {
            Some(section) => section.into_config(defaults.outdated_dependencies)?,
            None => defaults.outdated_dependencies,
        };

        Ok(Config {
            gradle_command,
            vulnerabilities,
            outdated_dependencies,
        })
    }
}

impl VulnerabilitiesSection {
    fn into_config(
        self,
        defaults: VulnerabilitiesConfig,
    ) -> std::result::Result<VulnerabilitiesConfig, DepsCheckError> {
        let task = resolve_task(self.task, self.args, defaults.task, "vulnerabilities")?;
        let report_file_name = resolve_report_file_name(
            self.report_file_name,
            defaults.report_file_name,
            "vulnerabilities",
        )?;

        let mut seen = HashSet::new();
        let mut suppressions = Vec::with_capacity(self.suppressions.len());
        for (i, entry) in self.suppressions.into_iter().enumerate() {
            let field = format!("vulnerabilities.suppressions[{}]", i);
            let group = non_blank(entry.group, &format!("{}.group", field))?;
            let artifact = non_blank(entry.artifact, &format!("{}.artifact", field))?;
            if entry.vulnerabilities.iter().any(|id| id.trim().is_empty()) {
                return Err(DepsCheckError::config(format!(
                    "{}.vulnerabilities must not contain empty ids",
                    field
                )));
            }

            let suppression =
                VulnerabilitySuppression::for_dependency(&group, &artifact, entry.vulnerabilities)?;
            if !seen.insert(suppression.fully_qualified_name().to_string()) {
                return Err(DepsCheckError::config(format!(
                    "{} suppresses {} again. Merge its vulnerabilities into the first entry.",
                    field,
                    suppression.fully_qualified_name()
                )));
            }
            suppressions.push(suppression);
        }

        Ok(VulnerabilitiesConfig {
            task,
            report_file_name,
            suppressions,
        })
    }
}

impl OutdatedDependenciesSection {
    fn into_config(
        self,
        defaults: OutdatedDependenciesConfig,
    ) -> std::result::Result<OutdatedDependenciesConfig, DepsCheckError> {
        let task = resolve_task(self.task, self.args, defaults.task, "outdated_dependencies")?;
        let report_file_name = resolve_report_file_name(
            self.report_file_name,
            defaults.report_file_name,
            "outdated_dependencies",
        )?;

        let suppressions = self
            .suppressions
            .into_iter()
            .enumerate()
            .map(|(i, coordinates)| {
                let coordinates = coordinates.trim().to_string();
                let parts: Vec<&str> = coordinates.split(':').collect();
                if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
                    return Err(DepsCheckError::config(format!(
                        "outdated_dependencies.suppressions[{}] must be 'group:artifact:version', got '{}'",
                        i, coordinates
                    )));
                }
                Ok(OutdatedDependencySuppression::new(coordinates))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(OutdatedDependenciesConfig {
            task,
            report_file_name,
            suppressions,
        })
    }
}

fn non_blank(value: String, field: &str) -> std::result::Result<String, DepsCheckError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DepsCheckError::config(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn resolve_task(
    task: Option<String>,
    args: Option<Vec<String>>,
    default: TaskNameWithArgs,
    section: &str,
) -> std::result::Result<TaskNameWithArgs, DepsCheckError> {
    match (task, args) {
        (None, None) => Ok(default),
        (Some(task), args) => Ok(TaskNameWithArgs::new(
            non_blank(task, &format!("{}.task", section))?,
            args.unwrap_or_default(),
        )),
        (None, Some(args)) => Ok(TaskNameWithArgs::new(default.task_name, args)),
    }
}

fn resolve_report_file_name(
    file_name: Option<String>,
    default: String,
    section: &str,
) -> std::result::Result<String, DepsCheckError> {
    let Some(file_name) = file_name else {
        return Ok(default);
    };
    let field = format!("{}.report_file_name", section);
    let file_name = non_blank(file_name, &field)?;
    if file_name.contains(['/', '\\']) {
        return Err(DepsCheckError::config(format!(
            "{} must be a file name, not a path: '{}'",
            field, file_name
        )));
    }
    Ok(file_name)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
