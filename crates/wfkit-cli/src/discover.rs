//! Project discovery for `validate --all-projects`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Directories never descended into.
const SKIPPED_DIRS: [&str; 3] = ["node_modules", "dist", "build"];

/// Recursively find files named `file_name` under `dir`, sorted.
///
/// Hidden directories and build/dependency directories are skipped.
/// Unreadable directories are logged and skipped.
pub fn find_metadata_files(dir: &Path, file_name: &str) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();
    walk(dir, file_name, &mut found);
    found.into_iter().collect()
}

fn walk(dir: &Path, file_name: &str, found: &mut BTreeSet<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during project discovery"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if path.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.iter().any(|d| *d == name) {
                continue;
            }
            walk(&path, file_name, found);
        } else if name == file_name {
            found.insert(path);
        }
    }
}
