//! # Configuration
//!
//! Optional `wfkit.yaml` at the repository root (or the file given with
//! `--config`). Every key has a default, so the file only needs the values
//! a repository changes. Command-line flags override file values.
//!
//! ```yaml
//! projects_dir: projects
//! metadata_file: metadata.json
//! business_context: business-context/export.json
//! deny_warnings: false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use wfkit_core::WfkitError;

/// Config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "wfkit.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned by `validate --all-projects`, relative to the repository root.
    pub projects_dir: PathBuf,
    /// Metadata file name inside each project directory.
    pub metadata_file: String,
    /// Business-context export used when `--business-context` is not given.
    pub business_context: Option<PathBuf>,
    /// Fail on warnings as well as errors.
    pub deny_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("projects"),
            metadata_file: "metadata.json".to_string(),
            business_context: None,
            deny_warnings: false,
        }
    }
}

impl Config {
    /// Parse a config file. An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, WfkitError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WfkitError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| WfkitError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Load the explicit config file if given, else `wfkit.yaml` under
    /// `repo_root` if it exists, else the defaults.
    pub fn resolve(explicit: Option<&Path>, repo_root: &Path) -> Result<Self, WfkitError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = repo_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading repository config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
