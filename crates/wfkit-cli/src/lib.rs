//! # wfkit-cli — Wireframe Kit Command-Line Interface
//!
//! Provides the `wfkit` binary used locally and in CI to check project
//! metadata before wireframes are published.
//!
//! ## Subcommands
//!
//! - `wfkit validate` — Validate one project, or every project with `--all-projects`.
//! - `wfkit context` — Summarize a business-context export.
//!
//! ```bash
//! wfkit validate projects/pricing-page
//! wfkit validate --all-projects --business-context exports/business-context.json
//! wfkit context exports/business-context.json --json
//! ```
//!
//! Handlers parse arguments, load files and print. All checking lives in
//! `wfkit-schema`.

pub mod config;
pub mod context;
pub mod discover;
pub mod validate;

use std::path::{Path, PathBuf};

use config::CONFIG_FILE_NAME;

/// Resolve a path that may be relative to the repository root.
///
/// Absolute paths are returned as-is. A relative path that exists under
/// `repo_root` resolves there; otherwise it is left relative to the
/// current directory.
pub fn resolve_path(path: &Path, repo_root: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let repo_relative = repo_root.join(path);
    if repo_relative.exists() {
        repo_relative
    } else {
        path.to_path_buf()
    }
}

/// Walk up from `start` to the repository root.
///
/// The root is the first ancestor holding a `wfkit.yaml` or a `projects/`
/// directory.
pub fn resolve_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE_NAME).is_file() || dir.join("projects").is_dir())
        .map(Path::to_path_buf)
}
