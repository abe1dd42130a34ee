//! # Business-Context Index
//!
//! Known-ID sets extracted from a business-context export. The export is
//! produced by an external tool and may be partial or stale, so extraction
//! is lenient: collections that are not arrays and entries without a string
//! `id` contribute nothing instead of failing.
//!
//! Goals are the union of `shortTermObjectives`, `midTermObjectives` and
//! `successMetrics`. Personas come from `personas`, KPIs from
//! `keyPerformanceIndicators`.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Export collections whose entry IDs count as goals.
pub const GOAL_COLLECTIONS: [&str; 3] =
    ["shortTermObjectives", "midTermObjectives", "successMetrics"];

/// Export collection holding personas.
pub const PERSONA_COLLECTION: &str = "personas";

/// Export collection holding KPIs.
pub const KPI_COLLECTION: &str = "keyPerformanceIndicators";

/// The three kinds of business-context reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    Goal,
    Persona,
    Kpi,
}

impl IdKind {
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Persona => "persona",
            Self::Kpi => "KPI",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Goal => "goals",
            Self::Persona => "personas",
            Self::Kpi => "KPIs",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Known goal, persona and KPI IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BusinessContextIndex {
    goals: BTreeSet<String>,
    personas: BTreeSet<String>,
    kpis: BTreeSet<String>,
}

impl BusinessContextIndex {
    /// Build the index from a parsed export. Never fails; a non-object
    /// export yields an empty index.
    pub fn from_export(export: &Value) -> Self {
        let mut goals = BTreeSet::new();
        for collection in GOAL_COLLECTIONS {
            collect_ids(export.get(collection), &mut goals);
        }
        let mut personas = BTreeSet::new();
        collect_ids(export.get(PERSONA_COLLECTION), &mut personas);
        let mut kpis = BTreeSet::new();
        collect_ids(export.get(KPI_COLLECTION), &mut kpis);

        Self {
            goals,
            personas,
            kpis,
        }
    }

    /// Build an index directly from ID lists.
    pub fn from_ids<G, P, K>(goals: G, personas: P, kpis: K) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        Self {
            goals: goals.into_iter().map(Into::into).collect(),
            personas: personas.into_iter().map(Into::into).collect(),
            kpis: kpis.into_iter().map(Into::into).collect(),
        }
    }

    pub fn known(&self, kind: IdKind) -> &BTreeSet<String> {
        match kind {
            IdKind::Goal => &self.goals,
            IdKind::Persona => &self.personas,
            IdKind::Kpi => &self.kpis,
        }
    }

    pub fn contains(&self, kind: IdKind, id: &str) -> bool {
        self.known(kind).contains(id)
    }

    /// True when the export supplied no IDs of any kind.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty() && self.personas.is_empty() && self.kpis.is_empty()
    }

    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            goals: self.goals.len(),
            personas: self.personas.len(),
            kpis: self.kpis.len(),
        }
    }
}

/// Per-kind ID counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextSummary {
    pub goals: usize,
    pub personas: usize,
    pub kpis: usize,
}

impl fmt::Display for ContextSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} goals, {} personas, {} KPIs",
            self.goals, self.personas, self.kpis
        )
    }
}

fn collect_ids(collection: Option<&Value>, into: &mut BTreeSet<String>) {
    let Some(entries) = collection.and_then(Value::as_array) else {
        return;
    };
    for entry in entries {
        if let Some(id) = entry.get("id").and_then(Value::as_str) {
            into.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_export() -> Value {
        json!({
            "shortTermObjectives": [{"id": "g-launch", "title": "Launch beta"}],
            "midTermObjectives": [{"id": "g-retain"}],
            "successMetrics": [{"id": "g-nps", "target": 40}],
            "personas": [{"id": "p-founder", "name": "Founder"}],
            "keyPerformanceIndicators": [{"id": "k-signups", "label": "Signups"}]
        })
    }

    #[test]
    fn test_goals_union_all_goal_collections() {
        let index = BusinessContextIndex::from_export(&sample_export());
        for id in ["g-launch", "g-retain", "g-nps"] {
            assert!(index.contains(IdKind::Goal, id), "missing goal {id}");
        }
        assert_eq!(index.known(IdKind::Goal).len(), 3);
    }

    #[test]
    fn test_personas_and_kpis_extracted() {
        let index = BusinessContextIndex::from_export(&sample_export());
        assert!(index.contains(IdKind::Persona, "p-founder"));
        assert!(index.contains(IdKind::Kpi, "k-signups"));
        assert!(!index.contains(IdKind::Kpi, "p-founder"));
    }

    #[test]
    fn test_lenient_on_malformed_entries() {
        let export = json!({
            "shortTermObjectives": "not-an-array",
            "personas": [{"name": "No id"}, {"id": 7}, {"id": "p-ok"}],
            "keyPerformanceIndicators": null
        });
        let index = BusinessContextIndex::from_export(&export);
        assert!(index.known(IdKind::Goal).is_empty());
        assert_eq!(index.known(IdKind::Persona).len(), 1);
        assert!(index.known(IdKind::Kpi).is_empty());
    }

    #[test]
    fn test_non_object_export_is_empty() {
        assert!(BusinessContextIndex::from_export(&json!([1, 2, 3])).is_empty());
        assert!(BusinessContextIndex::from_export(&Value::Null).is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let index = BusinessContextIndex::from_export(&sample_export());
        let summary = index.summary();
        assert_eq!(summary.goals, 3);
        assert_eq!(summary.personas, 1);
        assert_eq!(summary.kpis, 1);
        assert_eq!(summary.to_string(), "3 goals, 1 personas, 1 KPIs");
    }

    #[test]
    fn test_from_ids() {
        let index = BusinessContextIndex::from_ids(["g1"], Vec::<String>::new(), ["k1", "k2"]);
        assert!(index.contains(IdKind::Goal, "g1"));
        assert!(index.known(IdKind::Persona).is_empty());
        assert_eq!(index.known(IdKind::Kpi).len(), 2);
    }
}
