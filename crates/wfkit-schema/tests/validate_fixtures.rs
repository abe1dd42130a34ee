//! Integration test: validate the project fixtures under `tests/fixtures/`.
//!
//! Each fixture directory mirrors a project in the monorepo: a
//! `metadata.json` next to the shared `business-context.json` export.

use std::path::{Path, PathBuf};

use wfkit_core::{BusinessContextIndex, Severity, ValidationResult};
use wfkit_schema::{
    load_business_context, load_document, render_report, validate, ValidateOptions,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn export() -> BusinessContextIndex {
    load_business_context(&fixtures_dir().join("business-context.json"))
        .expect("Failed to load business context fixture")
}

fn validate_fixture(name: &str, index: Option<&BusinessContextIndex>) -> ValidationResult {
    let path: &Path = &fixtures_dir().join(name).join("metadata.json");
    let doc = load_document(path).expect("Failed to load metadata fixture");
    let options = ValidateOptions {
        business_context: index,
    };
    validate(&doc, &options)
}

fn fields(issues: &[wfkit_core::Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.field.as_str()).collect()
}

#[test]
fn test_valid_project_is_clean_with_export() {
    let index = export();
    let result = validate_fixture("valid", Some(&index));
    assert!(
        result.is_clean(),
        "Expected no issues, got:\n{}",
        render_report(&result)
    );
}

#[test]
fn test_valid_project_without_export_warns_unverifiable_refs() {
    let result = validate_fixture("valid", None);
    assert!(result.valid());
    assert_eq!(
        fields(result.warnings()),
        vec![
            "variants.proof.businessContextRef",
            "variants.savings.businessContextRef",
        ]
    );
}

#[test]
fn test_legacy_project_needs_migration() {
    let result = validate_fixture("legacy", None);
    assert!(!result.valid());
    assert_eq!(fields(result.errors()), vec!["variants"]);

    let warnings = fields(result.warnings());
    for field in [
        "description",
        "schema_version",
        "version",
        "lastUpdated",
        "sections",
        "targetAudience",
        "targetAudiences",
        "routes.variants",
    ] {
        assert!(warnings.contains(&field), "missing warning at {field}: {warnings:?}");
    }
}

#[test]
fn test_single_variant_project_is_valid() {
    let result = validate_fixture("single-variant", None);
    assert!(result.valid(), "{}", render_report(&result));
    assert!(result.is_clean());
}

#[test]
fn test_duplicate_anchor_project() {
    let result = validate_fixture("duplicate-anchors", None);
    assert!(!result.valid());
    assert_eq!(fields(result.errors()), vec!["sections[4].anchor", "sections"]);

    let duplicate = &result.errors()[1];
    assert_eq!(duplicate.severity, Severity::Error);
    assert!(duplicate.message.contains("hero, plans"));

    assert_eq!(fields(result.warnings()), vec!["variants.cards.path"]);
}

#[test]
fn test_fixture_results_are_reproducible() {
    let index = export();
    for name in ["valid", "legacy", "single-variant", "duplicate-anchors"] {
        let a = validate_fixture(name, Some(&index));
        let b = validate_fixture(name, Some(&index));
        assert_eq!(a, b, "fixture {name} produced different results");
    }
}

#[test]
fn test_result_serializes_to_wire_shape() {
    let result = validate_fixture("duplicate-anchors", None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][1]["field"], "sections");
    assert_eq!(json["errors"][1]["severity"], "error");
    assert_eq!(json["warnings"][0]["severity"], "warning");
}
