//! Configuration file handling.
//!
//! depcycle reads an optional YAML file, `.depcycle.yaml` in the working
//! directory unless a path is given explicitly:
//!
//! ```yaml
//! format: text
//! stop-at-first-cycle: true
//! ```
//!
//! Command-line flags take precedence over values from the file.

use crate::check::CheckOptions;
use crate::edges::EdgeFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".depcycle.yaml";

/// Configuration file structure for depcycle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Default input format
    pub format: EdgeFormat,

    /// Stop the replay at the first cycle-closing edge
    pub stop_at_first_cycle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: EdgeFormat::default(),
            stop_at_first_cycle: CheckOptions::default().stop_at_first_cycle,
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or is not valid
    /// configuration YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `CONFIG_FILE_NAME` in `dir` is
    /// used when present, and the defaults when it is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the explicit path or the discovered file
    /// cannot be loaded.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "Loading explicit config");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading config");
            Self::load(&candidate)
        } else {
            tracing::trace!(dir = %dir.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replay options derived from this configuration.
    #[must_use]
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            stop_at_first_cycle: self.stop_at_first_cycle,
        }
    }
}
