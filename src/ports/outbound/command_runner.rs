use crate::shared::Result;

/// CommandRunner port for invoking the external analysis tasks
pub trait CommandRunner {
    /// Runs a shell command and blocks until it exits
    ///
    /// # Errors
    /// Returns an error if the command cannot be started or exits unsuccessfully.
    /// Callers treat this as fatal for the whole run.
    fn run(&self, command: &str) -> Result<()>;
}
