//! Human-readable rendering of a [`ValidationResult`].

use std::fmt;

use wfkit_core::{Issue, ValidationResult};

/// Line printed when a document has neither errors nor warnings.
pub const NO_ISSUES: &str = "No validation issues found.";

/// Display adapter: errors first, then warnings, one bulleted line each.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a>(pub &'a ValidationResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        if result.is_clean() {
            return writeln!(f, "{NO_ISSUES}");
        }
        write_block(f, "Errors", result.errors())?;
        write_block(f, "Warnings", result.warnings())
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, heading: &str, issues: &[Issue]) -> fmt::Result {
    if issues.is_empty() {
        return Ok(());
    }
    writeln!(f, "{heading} ({}):", issues.len())?;
    for issue in issues {
        writeln!(f, "  - {issue}")?;
    }
    Ok(())
}

/// Render `result` as text.
pub fn render_report(result: &ValidationResult) -> String {
    Report(result).to_string()
}
