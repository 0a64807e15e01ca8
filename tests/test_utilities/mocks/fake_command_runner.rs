use deps_check::prelude::*;
use std::sync::{Arc, Mutex};

/// Records every command instead of running it
#[derive(Default, Clone)]
pub struct FakeCommandRunner {
    executed: Arc<Mutex<Vec<String>>>,
    failing_command: Option<String>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the given command exit unsuccessfully
    pub fn failing_on(command: &str) -> Self {
        Self {
            executed: Arc::default(),
            failing_command: Some(command.to_string()),
        }
    }

    pub fn executed_commands(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &str) -> Result<()> {
        self.executed.lock().unwrap().push(command.to_string());
        if self.failing_command.as_deref() == Some(command) {
            return Err(DepsCheckError::CommandFailed {
                command: command.to_string(),
                status: "exit status: 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
