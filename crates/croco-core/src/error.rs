use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while turning a tree specification into files.
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// The tree specification names a template the catalog does not hold.
    #[error("unknown template `{0}`")]
    UnknownTemplate(String),

    #[error("filesystem operation failed at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path must stay inside the project root: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("directory {} is not declared before {}", .parent.display(), .file.display())]
    UndeclaredDirectory { file: PathBuf, parent: PathBuf },
}

/// Failures that end a scaffolding run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error("failed to read answer: {0}")]
    Prompt(#[source] io::Error),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error("`{command}` {}", describe_exit(.code))]
    ExternalCommand { command: String, code: Option<i32> },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Failures reading `croco.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_command_message_includes_status() {
        let err = RunError::ExternalCommand {
            command: "npm install".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`npm install` exited with status 1");
    }

    #[test]
    fn external_command_message_without_status() {
        let err = RunError::ExternalCommand {
            command: "git init".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by a signal"));
    }

    #[test]
    fn filesystem_message_names_path() {
        let err = MaterializeError::Filesystem {
            path: PathBuf::from("/tmp/app/package.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/app/package.json"));
    }

    #[test]
    fn materialize_error_passes_through_run_error() {
        let err: RunError = MaterializeError::UnknownTemplate("nope".to_string()).into();
        assert_eq!(err.to_string(), "unknown template `nope`");
    }
}
