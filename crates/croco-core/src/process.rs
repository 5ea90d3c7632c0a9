use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RunError;

/// A program and its arguments, e.g. `git init`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = String;

    fn try_from(mut argv: Vec<String>) -> Result<Self, Self::Error> {
        if argv.is_empty() || argv[0].trim().is_empty() {
            return Err("command must name a program".to_string());
        }
        let program = argv.remove(0);
        Ok(Self {
            program,
            args: argv,
        })
    }
}

impl From<CommandLine> for Vec<String> {
    fn from(command: CommandLine) -> Self {
        let mut argv = Vec::with_capacity(command.args.len() + 1);
        argv.push(command.program);
        argv.extend(command.args);
        argv
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Runs `command` inside `cwd`.
    ///
    /// # Errors
    ///
    /// [`RunError::Spawn`] if the program cannot be started,
    /// [`RunError::ExternalCommand`] if it exits unsuccessfully.
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), RunError>;
}

/// [`CommandRunner`] that spawns child processes sharing this console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), RunError> {
        info!(command = %command, cwd = %cwd.display(), "running external command");
        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RunError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunError::ExternalCommand {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
