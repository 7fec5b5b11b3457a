use std::path::Path;
use std::process::{Command, ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no editor command configured")]
    Empty,
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

/// Opens a unit file for editing and blocks until the editor returns.
pub trait Editor {
    fn open(&mut self, path: &Path) -> Result<(), EditorError>;
}

/// Launches the configured editor as a child process.
///
/// The command line is split on whitespace, so `code --wait` works. On
/// Windows the editor goes through `cmd /C start "" /WAIT`.
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command_line: String,
}

impl SystemEditor {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
        }
    }

    fn build_command(&self, path: &Path) -> Result<Command, EditorError> {
        let mut parts = self.command_line.split_whitespace();
        let program = parts.next().ok_or(EditorError::Empty)?;

        let mut command = if cfg!(windows) {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", "/WAIT", program]);
            command
        } else {
            Command::new(program)
        };
        command.args(parts).arg(path);
        Ok(command)
    }

    fn program(&self) -> String {
        self.command_line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

impl Editor for SystemEditor {
    fn open(&mut self, path: &Path) -> Result<(), EditorError> {
        let mut command = self.build_command(path)?;
        tracing::debug!(?command, "launching editor");

        let status = command.status().map_err(|source| EditorError::Spawn {
            program: self.program(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::Exit {
                program: self.program(),
                status,
            })
        }
    }
}
