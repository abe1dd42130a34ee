//! # Document Loading
//!
//! Reads metadata documents and business-context exports from disk. JSON is
//! the canonical format; `.yaml` / `.yml` files are accepted and converted
//! to the equivalent JSON value tree before validation.

use std::path::Path;

use serde_json::Value;

use wfkit_core::{BusinessContextIndex, WfkitError};

/// Load a JSON or YAML document, choosing the parser by file extension.
///
/// # Errors
///
/// Returns `WfkitError::DocumentLoad` if the file cannot be read, does not
/// parse, or contains YAML that has no JSON equivalent.
pub fn load_document(path: &Path) -> Result<Value, WfkitError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| load_error(path, format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let value = match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| load_error(path, format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml)
                .map_err(|e| load_error(path, format!("YAML-to-JSON conversion failed: {e}")))?
        }
        _ => serde_json::from_str(&content)
            .map_err(|e| load_error(path, format!("invalid JSON: {e}")))?,
    };

    tracing::debug!(path = %path.display(), format = ext, "loaded document");
    Ok(value)
}

/// Load a business-context export and index its IDs.
pub fn load_business_context(path: &Path) -> Result<BusinessContextIndex, WfkitError> {
    let export = load_document(path)?;
    let index = BusinessContextIndex::from_export(&export);
    tracing::debug!(
        path = %path.display(),
        summary = %index.summary(),
        "indexed business context export"
    );
    Ok(index)
}

fn load_error(path: &Path, reason: String) -> WfkitError {
    WfkitError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped, scalar map keys are stringified, and floats that JSON
/// cannot represent are rejected.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut out = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                out.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfkit_core::IdKind;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "metadata.json", r#"{"id": "demo", "variants": {}}"#);
        let value = load_document(&path).unwrap();
        assert_eq!(value["id"], "demo");
    }

    #[test]
    fn test_load_yaml_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "metadata.yaml",
            "id: demo\nschema_version: \"2.0\"\nsections:\n  - name: Hero\n    anchor: hero\n",
        );
        let value = load_document(&path).unwrap();
        assert_eq!(value["schema_version"], "2.0");
        assert_eq!(value["sections"][0]["anchor"], "hero");
    }

    #[test]
    fn test_invalid_json_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "metadata.json", "{ not json");
        let err = load_document(&path).unwrap_err();
        match err {
            WfkitError::DocumentLoad { reason, .. } => assert!(reason.contains("invalid JSON")),
            other => panic!("Expected DocumentLoad, got: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read file"));
    }

    #[test]
    fn test_load_business_context_indexes_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "business-context.json",
            r#"{
                "shortTermObjectives": [{"id": "g1"}],
                "personas": [{"id": "p1", "name": "Ops lead"}],
                "keyPerformanceIndicators": [{"id": "k1", "label": "Activation"}]
            }"#,
        );
        let index = load_business_context(&path).unwrap();
        assert!(index.contains(IdKind::Goal, "g1"));
        assert!(index.contains(IdKind::Persona, "p1"));
        assert!(index.contains(IdKind::Kpi, "k1"));
    }

    #[test]
    fn test_yaml_scalar_keys_stringified() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n").unwrap();
        let json = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(json["1"], "one");
        assert_eq!(json["true"], "yes");
    }
}
