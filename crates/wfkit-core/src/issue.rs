//! # Validation Issues
//!
//! The output vocabulary of the metadata validator. Each finding is an
//! [`Issue`] addressed by a dotted path into the document (`variants.a.name`,
//! `sections[2].anchor`, `""` for the document root).
//!
//! ## Invariant
//!
//! [`ValidationResult::valid`] is true iff the error list is empty. The flag
//! is computed on construction and on deserialization, never stored
//! independently, so warnings can never flip it.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Issue severity. Only errors affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks validity.
    Error,
    /// Informational: deprecations, recommended fields, unverifiable references.
    Warning,
}

impl Severity {
    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Dotted path of the offending field. Empty for the document root.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
}

impl Issue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Outcome of validating one metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

/// Wire shape accepted on deserialization. `valid` is ignored and recomputed.
#[derive(Deserialize)]
struct ResultRepr {
    #[serde(default)]
    errors: Vec<Issue>,
    #[serde(default)]
    warnings: Vec<Issue>,
}

impl<'de> Deserialize<'de> for ValidationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ResultRepr::deserialize(deserializer)?;
        Ok(Self::new(repr.errors, repr.warnings))
    }
}

impl ValidationResult {
    /// Build a result; validity is derived from `errors`.
    pub fn new(errors: Vec<Issue>, warnings: Vec<Issue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    /// True when neither errors nor warnings were produced.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iff_no_errors() {
        let ok = ValidationResult::new(vec![], vec![Issue::warning("description", "missing")]);
        assert!(ok.valid());
        assert!(!ok.is_clean());

        let bad = ValidationResult::new(vec![Issue::error("id", "missing")], vec![]);
        assert!(!bad.valid());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let issue = Issue::error("routes.index", "Missing required field: routes.index");
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["field"], "routes.index");
    }

    #[test]
    fn test_result_wire_shape() {
        let result = ValidationResult::new(
            vec![Issue::error("slug", "Missing required field: slug")],
            vec![Issue::warning("version", "Missing recommended field: version")],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["warnings"][0]["severity"], "warning");
    }

    #[test]
    fn test_deserialize_recomputes_valid() {
        let json = serde_json::json!({
            "valid": true,
            "errors": [{"field": "id", "message": "missing", "severity": "error"}],
            "warnings": []
        });
        let result: ValidationResult = serde_json::from_value(json).unwrap();
        assert!(!result.valid());
    }

    #[test]
    fn test_issue_display_root() {
        let issue = Issue::error("", "Metadata document must be a JSON object");
        assert!(issue.to_string().starts_with("(root)"));
    }
}
