//! # Error Types
//!
//! Operational errors for the toolchain. Validation findings are never
//! errors: they are [`Issue`](crate::Issue)s inside a
//! [`ValidationResult`](crate::ValidationResult). The types here cover the
//! things that stop a run from producing a result at all.

use thiserror::Error;

/// Top-level error type for wfkit.
#[derive(Error, Debug)]
pub enum WfkitError {
    /// A document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path of the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The configuration file is missing, unreadable, or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_load_display_includes_path_and_reason() {
        let err = WfkitError::DocumentLoad {
            path: "projects/demo/metadata.json".to_string(),
            reason: "invalid JSON: expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("projects/demo/metadata.json"));
        assert!(msg.contains("invalid JSON"));
    }

    #[test]
    fn test_config_display() {
        let err = WfkitError::Config("invalid wfkit.yaml: unknown field `project_dir`".into());
        assert_eq!(
            err.to_string(),
            "configuration error: invalid wfkit.yaml: unknown field `project_dir`"
        );
    }
}
