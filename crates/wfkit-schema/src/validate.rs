//! # Metadata Validation
//!
//! Validates a project `metadata.json` document against the v2.0 metadata
//! schema and, when an export is supplied, against the business-context ID
//! sets.
//!
//! ## Contract
//!
//! - Every check runs; there is no early exit on the first error.
//! - Errors block validity, warnings never do.
//! - Pure: no I/O, no logging, no state across calls. Identical inputs
//!   produce identical, order-stable results.
//! - Never panics on any `serde_json::Value`. A non-object document yields a
//!   single root error.
//!
//! ## Presence
//!
//! A field is missing when it is absent, `null`, `false`, numeric zero, or
//! the empty string. The same rule decides whether optional and deprecated
//! fields are present.

use std::collections::HashSet;

use serde_json::Value;

use wfkit_core::{
    BusinessContextIndex, Issue, ValidationResult, SCHEMA_VERSION, SINGLE_VARIANT_PROJECT,
};

use crate::refs;

/// Fields whose absence is an error.
const REQUIRED_FIELDS: [&str; 3] = ["id", "slug", "title"];

/// Descriptive fields whose absence is a warning.
const VERSIONING_FIELDS: [&str; 2] = ["version", "lastUpdated"];

/// Optional inputs to [`validate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions<'a> {
    /// Known IDs from the business-context export, when one was supplied.
    pub business_context: Option<&'a BusinessContextIndex>,
}

impl<'a> ValidateOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business_context(mut self, index: &'a BusinessContextIndex) -> Self {
        self.business_context = Some(index);
        self
    }
}

/// Issue accumulator shared by the individual checks.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl Findings {
    pub(crate) fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Issue::error(field, message));
    }

    pub(crate) fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Issue::warning(field, message));
    }

    fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

/// Validate a metadata document.
pub fn validate(metadata: &Value, options: &ValidateOptions<'_>) -> ValidationResult {
    if !metadata.is_object() {
        return ValidationResult::new(
            vec![Issue::error(
                "",
                format!(
                    "Metadata document must be a JSON object, found {}",
                    type_name(metadata)
                ),
            )],
            Vec::new(),
        );
    }

    let mut findings = Findings::default();

    check_required_fields(metadata, &mut findings);
    check_schema_version(metadata, &mut findings);
    check_versioning(metadata, &mut findings);
    check_variants(metadata, options, &mut findings);
    check_sections(metadata, &mut findings);
    check_target_audience(metadata, &mut findings);
    refs::check_business_context(metadata, options, &mut findings);
    check_routes(metadata, &mut findings);

    findings.finish()
}

/// Boolean form of [`validate`].
pub fn is_valid(metadata: &Value, options: &ValidateOptions<'_>) -> bool {
    validate(metadata, options).valid()
}

fn check_required_fields(doc: &Value, findings: &mut Findings) {
    for field in REQUIRED_FIELDS {
        if present(doc, field).is_none() {
            findings.error(field, format!("Missing required field: {field}"));
        }
    }
    if present(doc, "description").is_none() {
        findings.warn("description", "Missing recommended field: description");
    }
}

fn check_schema_version(doc: &Value, findings: &mut Findings) {
    match present(doc, "schema_version") {
        None => findings.warn(
            "schema_version",
            format!(
                "Missing schema_version (legacy v1.x format detected); set schema_version to \"{SCHEMA_VERSION}\""
            ),
        ),
        Some(Value::String(v)) if v == SCHEMA_VERSION => {}
        Some(other) => findings.warn(
            "schema_version",
            format!("Unexpected schema_version {other}; expected \"{SCHEMA_VERSION}\""),
        ),
    }
}

fn check_versioning(doc: &Value, findings: &mut Findings) {
    for field in VERSIONING_FIELDS {
        if present(doc, field).is_none() {
            findings.warn(field, format!("Missing recommended field: {field}"));
        }
    }
}

fn check_variants(doc: &Value, options: &ValidateOptions<'_>, findings: &mut Findings) {
    let Some(variants) = present(doc, "variants") else {
        findings.error("variants", "Missing required field: variants");
        return;
    };

    let Some(entries) = variants.as_object() else {
        let message = if variants.is_array() {
            "variants must be an object keyed by variant id, not an array; \
             migrate each entry to \"<variant-key>\": { \"name\": ... }"
                .to_string()
        } else {
            format!(
                "variants must be an object keyed by variant id, found {}",
                type_name(variants)
            )
        };
        findings.error("variants", message);
        return;
    };

    if entries.is_empty() {
        let project_type = doc.get("projectType").and_then(Value::as_str);
        if project_type != Some(SINGLE_VARIANT_PROJECT) {
            findings.error(
                "variants",
                format!(
                    "At least one variant is required unless projectType is \"{SINGLE_VARIANT_PROJECT}\""
                ),
            );
        }
        return;
    }

    for (key, variant) in entries {
        check_variant(key, variant, options, findings);
    }
}

fn check_variant(
    key: &str,
    variant: &Value,
    options: &ValidateOptions<'_>,
    findings: &mut Findings,
) {
    let path = format!("variants.{key}");
    if !variant.is_object() {
        findings.error(
            path,
            format!("Variant \"{key}\" must be an object, found {}", type_name(variant)),
        );
        return;
    }

    if present(variant, "name").is_none() {
        findings.error(
            format!("{path}.name"),
            format!("Variant \"{key}\" is missing required field: name"),
        );
    }

    if let Some(component) = present(variant, "component") {
        if !component.is_string() {
            findings.warn(
                format!("{path}.component"),
                format!(
                    "Variant \"{key}\" component should be a string component name, found {}",
                    type_name(component)
                ),
            );
        }
    }

    if present(variant, "path").is_some() {
        findings.warn(
            format!("{path}.path"),
            format!("Variant \"{key}\" path is deprecated; routes are derived from the variant key"),
        );
    }

    refs::check_variant_ref(&path, key, variant, options, findings);
}

fn check_sections(doc: &Value, findings: &mut Findings) {
    let Some(sections) = present(doc, "sections") else {
        findings.warn("sections", "Missing recommended field: sections");
        return;
    };
    let Some(sections) = sections.as_array() else {
        findings.error(
            "sections",
            format!("sections must be an array, found {}", type_name(sections)),
        );
        return;
    };

    let mut anchors: Vec<String> = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let path = format!("sections[{i}]");
        if !section.is_object() {
            findings.error(
                path,
                format!("Section {i} must be an object, found {}", type_name(section)),
            );
            continue;
        }
        if present(section, "name").is_none() {
            findings.error(
                format!("{path}.name"),
                format!("Section {i} is missing required field: name"),
            );
        }
        match present(section, "anchor") {
            None => findings.error(
                format!("{path}.anchor"),
                format!("Section {i} is missing required field: anchor"),
            ),
            Some(anchor) => anchors.push(anchor_key(anchor)),
        }
    }

    let anchors: Vec<&str> = anchors.iter().map(String::as_str).collect();
    let duplicates = duplicate_values(&anchors);
    if !duplicates.is_empty() {
        findings.error(
            "sections",
            format!(
                "Duplicate section anchors: {}; anchors must be unique",
                duplicates.join(", ")
            ),
        );
    }
}

fn check_target_audience(doc: &Value, findings: &mut Findings) {
    match present(doc, "targetAudience") {
        None => {
            findings.warn("targetAudience", "Missing recommended field: targetAudience");
            if present(doc, "targetAudiences").is_some() {
                findings.warn(
                    "targetAudiences",
                    "targetAudiences is deprecated; rename it to targetAudience",
                );
            }
        }
        Some(audience) if !audience.is_array() => findings.error(
            "targetAudience",
            format!(
                "targetAudience must be an array of strings, found {}",
                type_name(audience)
            ),
        ),
        Some(_) => {}
    }
}

fn check_routes(doc: &Value, findings: &mut Findings) {
    let Some(routes) = present(doc, "routes") else {
        findings.error("routes", "Missing required field: routes");
        return;
    };
    if !routes.is_object() {
        findings.error(
            "routes",
            format!("routes must be an object, found {}", type_name(routes)),
        );
        return;
    }

    match present(routes, "index") {
        None => findings.error("routes.index", "Missing required field: routes.index"),
        Some(index) if !index.is_string() => findings.error(
            "routes.index",
            format!("routes.index must be a string path, found {}", type_name(index)),
        ),
        Some(_) => {}
    }

    if present(routes, "variants").is_some() {
        findings.warn(
            "routes.variants",
            "routes.variants is deprecated; variant routes are derived from the variants keys",
        );
    }
}

/// Comparable form of an anchor. Strings compare by their text, any other
/// value by its JSON rendering, so `1` and `"1"` name the same anchor.
fn anchor_key(anchor: &Value) -> String {
    match anchor {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Distinct values that occur more than once, in the order their first
/// repeat is seen.
fn duplicate_values<'a>(values: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for &value in values {
        if !value.is_empty() && !seen.insert(value) && !duplicates.contains(&value) {
            duplicates.push(value);
        }
    }
    duplicates
}

/// Look up `key` on an object, treating falsy values as absent.
pub(crate) fn present<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !is_falsy(v))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
