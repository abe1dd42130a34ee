//! Business-context reference checks.
//!
//! Variants reference goals and personas through `businessContextRef`; the
//! document as a whole references goals, personas and KPIs through the
//! top-level `businessContext` block. Every finding here is a warning: the
//! export is produced by a separate tool and may lag behind the metadata.

use serde_json::Value;

use wfkit_core::{BusinessContextIndex, IdKind};

use crate::validate::{present, type_name, Findings, ValidateOptions};

/// `businessContextRef` keys and the ID kind each one references.
const VARIANT_REF_KEYS: [(&str, IdKind); 2] =
    [("goalIds", IdKind::Goal), ("personaIds", IdKind::Persona)];

/// Top-level `businessContext` keys and the ID kind each one references.
const DOCUMENT_REF_KEYS: [(&str, IdKind); 3] = [
    ("goals", IdKind::Goal),
    ("personas", IdKind::Persona),
    ("kpis", IdKind::Kpi),
];

pub(crate) fn check_variant_ref(
    path: &str,
    key: &str,
    variant: &Value,
    options: &ValidateOptions<'_>,
    findings: &mut Findings,
) {
    let field = format!("{path}.businessContextRef");
    let Some(reference) = present(variant, "businessContextRef") else {
        if options.business_context.is_some() {
            findings.warn(
                field,
                format!("Variant \"{key}\" is missing businessContextRef (goalIds, personaIds)"),
            );
        }
        return;
    };

    if !reference.is_object() {
        findings.warn(
            field,
            format!(
                "businessContextRef must be an object with goalIds and personaIds, found {}",
                type_name(reference)
            ),
        );
        return;
    }

    for (name, kind) in VARIANT_REF_KEYS {
        check_id_list(
            &format!("{field}.{name}"),
            present(reference, name),
            kind,
            options,
            findings,
        );
    }

    if options.business_context.is_none() {
        findings.warn(
            field,
            format!(
                "Variant \"{key}\" businessContextRef cannot be verified: \
                 no business context export was passed to the validator"
            ),
        );
    }
}

pub(crate) fn check_business_context(
    doc: &Value,
    options: &ValidateOptions<'_>,
    findings: &mut Findings,
) {
    let Some(context) = present(doc, "businessContext") else {
        if options.business_context.is_some() {
            findings.warn(
                "businessContext",
                "Missing businessContext; project is not linked to the business context export",
            );
        }
        return;
    };

    if !context.is_object() {
        findings.warn(
            "businessContext",
            format!("businessContext must be an object, found {}", type_name(context)),
        );
        return;
    }

    for (name, kind) in DOCUMENT_REF_KEYS {
        check_id_list(
            &format!("businessContext.{name}"),
            present(context, name),
            kind,
            options,
            findings,
        );
    }

    match present(context, "primaryGoal") {
        None => {}
        Some(Value::String(goal)) => {
            let index = options
                .business_context
                .filter(|index| !index.known(IdKind::Goal).is_empty());
            if let Some(index) = index {
                if !index.contains(IdKind::Goal, goal) {
                    findings.warn(
                        "businessContext.primaryGoal",
                        format!("primaryGoal \"{goal}\" not found in business context export goals"),
                    );
                }
            }
        }
        Some(other) => findings.warn(
            "businessContext.primaryGoal",
            format!("primaryGoal must be a string goal ID, found {}", type_name(other)),
        ),
    }
}

/// Type-check an ID list and, when an export is available, cross-check its
/// entries against the known IDs of `kind`.
fn check_id_list(
    field: &str,
    value: Option<&Value>,
    kind: IdKind,
    options: &ValidateOptions<'_>,
    findings: &mut Findings,
) {
    let Some(value) = value else {
        return;
    };
    let Some(ids) = value.as_array() else {
        findings.warn(
            field,
            format!(
                "{field} must be an array of {} IDs, found {}",
                kind.singular(),
                type_name(value)
            ),
        );
        return;
    };
    if let Some(index) = options.business_context {
        check_known_ids(field, ids, kind, index, findings);
    }
}

fn check_known_ids(
    field: &str,
    ids: &[Value],
    kind: IdKind,
    index: &BusinessContextIndex,
    findings: &mut Findings,
) {
    if ids.is_empty() {
        return;
    }

    if index.known(kind).is_empty() {
        findings.warn(
            field,
            format!(
                "Business context export contains no {}; it may not have been generated yet",
                kind.plural()
            ),
        );
        return;
    }

    let mut unknown: Vec<String> = Vec::new();
    for id in ids {
        if id.as_str().is_some_and(|id| index.contains(kind, id)) {
            continue;
        }
        let label = match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !unknown.contains(&label) {
            unknown.push(label);
        }
    }

    if !unknown.is_empty() {
        findings.warn(
            field,
            format!(
                "Unknown {} IDs not found in business context export: {}",
                kind.singular(),
                unknown.join(", ")
            ),
        );
    }
}
