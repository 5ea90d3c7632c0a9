use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::process::CommandLine;
use crate::tree::Variant;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "croco.yaml";

/// Settings for a scaffolding run.
///
/// Read from `croco.yaml`; keys left out keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrocoConfig {
    /// Skeleton to generate
    pub variant: Variant,
    /// Version-control initialization, run inside the new project
    pub vcs_command: CommandLine,
    /// Dependency installation, run inside the new project when requested
    pub install_command: CommandLine,
}

impl Default for CrocoConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Minimal,
            vcs_command: CommandLine::new("git", ["init"]),
            install_command: CommandLine::new("npm", ["install"]),
        }
    }
}

/// Loads the configuration at `path`, or defaults when the file is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<CrocoConfig, ConfigError> {
    if !path.exists() {
        return Ok(CrocoConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
