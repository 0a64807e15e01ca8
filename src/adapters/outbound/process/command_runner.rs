use crate::ports::outbound::CommandRunner;
use crate::shared::error::DepsCheckError;
use crate::shared::Result;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{info, warn};

/// Shell used to interpret task command lines
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// ShellCommandRunner adapter executing commands through a shell
///
/// Commands run in the project directory. Both output streams of the child
/// are drained on their own threads while the caller waits for the exit
/// status; every line is forwarded to our stderr so that a review document
/// written to stdout stays parseable.
pub struct ShellCommandRunner {
    working_dir: PathBuf,
    shell: String,
}

impl ShellCommandRunner {
    pub fn new(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Copies a child stream to stderr line by line until it closes
    ///
    /// Lines are decoded lossily. The stream is read to the end even when
    /// forwarding fails, so the child never blocks on a full pipe.
    fn spawn_forwarder<R: Read + Send + 'static>(stream: R) -> JoinHandle<()> {
        thread::spawn(move || {
            let mut reader = BufReader::new(stream);
            let mut line = Vec::new();
            loop {
                line.clear();
                match reader.read_until(b'\n', &mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        let text = String::from_utf8_lossy(&line);
                        let text = text.trim_end_matches(['\r', '\n']);
                        let _ = writeln!(io::stderr().lock(), "{}", text);
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        warn!(error = %e, "Failed to read command output, discarding the rest");
                        let _ = io::copy(&mut reader, &mut io::sink());
                        break;
                    }
                }
            }
        })
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str) -> Result<()> {
        info!(command, dir = %self.working_dir.display(), "Running command");

        let start_failed = |e: io::Error| DepsCheckError::CommandFailed {
            command: command.to_string(),
            status: format!("could not be started: {}", e),
        };

        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(start_failed)?;

        let forwarders: Vec<JoinHandle<()>> = [
            child.stdout.take().map(Self::spawn_forwarder),
            child.stderr.take().map(Self::spawn_forwarder),
        ]
        .into_iter()
        .flatten()
        .collect();

        let status = child.wait().map_err(|e| DepsCheckError::CommandFailed {
            command: command.to_string(),
            status: format!("could not be awaited: {}", e),
        })?;

        for forwarder in forwarders {
            if forwarder.join().is_err() {
                warn!(command, "Output forwarding thread panicked");
            }
        }

        if !status.success() {
            return Err(DepsCheckError::CommandFailed {
                command: command.to_string(),
                status: status.to_string(),
            }
            .into());
        }

        info!(command, "Command finished");
        Ok(())
    }
}
