//! Synonym table: canonical term to synonym list.
//!
//! The table is produced offline from a controlled medical vocabulary and an
//! abbreviation list. It is loaded once and never mutated afterwards, which
//! makes concurrent lookups safe without locking.
//!
//! The external shape is a JSON object from lowercase term to an array of
//! synonyms:
//!
//! ```json
//! {
//!   "mi": ["acs", "acute coronary syndrome", "heart attack"],
//!   "heart attack": ["acs", "acute coronary syndrome", "mi"]
//! }
//! ```
//!
//! The same mapping wrapped as `{ "synonyms": { ... } }` is accepted too.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use ahash::RandomState;
use log::debug;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MedsynError, Result};

type SynonymMap = HashMap<String, Vec<String>, RandomState>;

const BUNDLED_TABLE_JSON: &str = include_str!("../../resources/medical-synonyms.json");

/// The bundled medical synonym table, deserialized on first access.
pub static MEDICAL_SYNONYMS: LazyLock<SynonymTable> = LazyLock::new(|| {
    SynonymTable::from_json_str(BUNDLED_TABLE_JSON)
        .expect("bundled resources/medical-synonyms.json is a valid synonym table")
});

/// Normalize a term into table key form: trimmed and lowercased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Immutable mapping from normalized term to its synonyms.
///
/// Synonym lists are kept verbatim and in stored order; that order is the
/// order in which expansions are returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: SynonymMap,
}

/// Table entries in document order, repeated keys included.
struct TableEntries(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for TableEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = TableEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of term to string array")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    entries.push(entry);
                }
                Ok(TableEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Accepted JSON documents for a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum TableDocument {
    Wrapped { synonyms: TableEntries },
    Raw(TableEntries),
}

impl TableDocument {
    fn into_entries(self) -> Vec<(String, Vec<String>)> {
        match self {
            TableDocument::Wrapped { synonyms } => synonyms.0,
            TableDocument::Raw(entries) => entries.0,
        }
    }
}

impl<'de> Deserialize<'de> for SynonymTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = TableDocument::deserialize(deserializer)?;
        SynonymTable::from_entries(document.into_entries()).map_err(serde::de::Error::custom)
    }
}

impl SynonymTable {
    /// Build a table from `(term, synonyms)` pairs.
    ///
    /// Keys are normalized with [`normalize_term`]. An empty key, or two keys
    /// that normalize to the same string (including a key given twice), is an
    /// error.
    pub fn from_entries<I, K, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Vec<S>)>,
        K: AsRef<str>,
        S: Into<String>,
    {
        let mut map = SynonymMap::default();

        for (raw_key, synonyms) in entries {
            let raw_key = raw_key.as_ref();
            let key = normalize_term(raw_key);
            if key.is_empty() {
                return Err(MedsynError::dictionary(format!(
                    "Synonym table contains an empty term (raw key {raw_key:?})"
                )));
            }
            if key != raw_key {
                debug!("Normalized synonym table key {raw_key:?} to {key:?}");
            }
            if map.contains_key(&key) {
                return Err(MedsynError::dictionary(format!(
                    "Synonym table contains duplicate term {key:?} after normalization"
                )));
            }
            map.insert(key, synonyms.into_iter().map(Into::into).collect());
        }

        Ok(Self { entries: map })
    }

    /// Parse a table from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: TableDocument = serde_json::from_str(json).map_err(|e| {
            MedsynError::dictionary(format!(
                "Failed to parse synonym table JSON (expected an object of term to string array): {e}"
            ))
        })?;

        let table = Self::from_entries(document.into_entries())?;
        debug!("Loaded synonym table with {} entries", table.len());
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MedsynError::dictionary(format!(
                "Failed to read synonym table file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content).map_err(|e| match e {
            MedsynError::Dictionary(msg) => {
                MedsynError::dictionary(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Synonyms stored under an already normalized key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Whether the normalized key has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys in sorted order.
    pub fn terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        terms.sort_unstable();
        terms
    }

    /// The table with keys in sorted order, for stable serialization.
    pub fn to_sorted_map(&self) -> BTreeMap<&str, &[String]> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect()
    }

    /// Summary statistics over the table.
    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            entries: self.entries.len(),
            ..TableStats::default()
        };

        for (key, synonyms) in &self.entries {
            stats.total_synonyms += synonyms.len();
            stats.max_synonyms = stats.max_synonyms.max(synonyms.len());
            if is_multi_word(key) {
                stats.multi_word_keys += 1;
            }
            stats.multi_word_synonyms += synonyms.iter().filter(|s| is_multi_word(s)).count();
        }

        stats
    }

    /// Report entries that break clique symmetry.
    ///
    /// This is a diagnostic over the data only. Lookups keep their per-key
    /// semantics whatever this returns.
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();

        for term in self.terms() {
            let synonyms = &self.entries[term];
            let mut seen: Vec<&str> = Vec::with_capacity(synonyms.len());

            for synonym in synonyms {
                let kind = if synonym == term {
                    Some(FindingKind::SelfReference)
                } else if seen.contains(&synonym.as_str()) {
                    Some(FindingKind::DuplicateSynonym)
                } else {
                    match self.entries.get(synonym.as_str()) {
                        Some(back) if !back.iter().any(|s| s == term) => {
                            Some(FindingKind::MissingBackReference)
                        }
                        Some(_) => None,
                        None => Some(FindingKind::UnindexedSynonym),
                    }
                };

                if let Some(kind) = kind {
                    findings.push(AuditFinding {
                        term: term.to_string(),
                        synonym: synonym.clone(),
                        kind,
                    });
                }
                seen.push(synonym);
            }
        }

        findings
    }
}

fn is_multi_word(term: &str) -> bool {
    term.split_whitespace().nth(1).is_some()
}

/// Summary statistics for a [`SynonymTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    /// Number of keys.
    pub entries: usize,
    /// Sum of all synonym list lengths.
    pub total_synonyms: usize,
    /// Longest synonym list.
    pub max_synonyms: usize,
    /// Keys containing more than one word. These are only reachable through
    /// direct term expansion, never through query tokenization.
    pub multi_word_keys: usize,
    /// Synonym values containing more than one word.
    pub multi_word_synonyms: usize,
}

/// Kind of clique inconsistency found by [`SynonymTable::audit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// The synonym has its own entry, but that entry does not list the term.
    MissingBackReference,
    /// The synonym has no entry of its own.
    UnindexedSynonym,
    /// The term lists itself.
    SelfReference,
    /// The synonym appears more than once in the same list.
    DuplicateSynonym,
}

/// One inconsistency between a term and one of its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub term: String,
    pub synonym: String,
    pub kind: FindingKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clique_table() -> SynonymTable {
        SynonymTable::from_entries(vec![
            ("big", vec!["large", "huge"]),
            ("large", vec!["big", "huge"]),
            ("huge", vec!["big", "large"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_entries() {
        let table = clique_table();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table.get("big").unwrap(), ["large", "huge"]);
        assert!(table.contains("huge"));
        assert!(table.get("tiny").is_none());
    }

    #[test]
    fn test_keys_are_normalized() {
        let table = SynonymTable::from_entries(vec![(" MI ", vec!["Heart Attack"])]).unwrap();
        assert!(table.contains("mi"));
        // values are stored verbatim
        assert_eq!(table.get("mi").unwrap(), ["Heart Attack"]);
    }

    #[test]
    fn test_duplicate_normalized_keys_rejected() {
        let result = SynonymTable::from_entries(vec![("mi", vec!["stemi"]), ("MI", vec!["nstemi"])]);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = SynonymTable::from_entries(vec![("  ", vec!["nothing"])]);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));
    }

    #[test]
    fn test_from_json_raw_and_wrapped() {
        let raw = SynonymTable::from_json_str(r#"{"pe": ["pulmonary embolism"]}"#).unwrap();
        let wrapped =
            SynonymTable::from_json_str(r#"{"synonyms": {"pe": ["pulmonary embolism"]}}"#).unwrap();
        assert_eq!(raw, wrapped);
        assert_eq!(raw.get("pe").unwrap(), ["pulmonary embolism"]);
    }

    #[test]
    fn test_repeated_json_key_rejected() {
        let result = SynonymTable::from_json_str(r#"{"mi": ["stemi"], "mi": ["nstemi"]}"#);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));

        let result =
            SynonymTable::from_json_str(r#"{"synonyms": {"pe": ["embolism"], "pe": ["clot"]}}"#);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));
    }

    #[test]
    fn test_raw_table_with_synonyms_key() {
        let table =
            SynonymTable::from_json_str(r#"{"synonyms": ["alternatives"], "mi": ["stemi"]}"#)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("synonyms").unwrap(), ["alternatives"]);
    }

    #[test]
    fn test_invalid_json_shape() {
        let result = SynonymTable::from_json_str(r#"[["big", "large"]]"#);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));

        let result = SynonymTable::from_json_str(r#"{"mi": "stemi"}"#);
        assert!(matches!(result, Err(MedsynError::Dictionary(_))));
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let table = SynonymTable::from_entries(vec![("cva", vec!["stroke"])]).unwrap();
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({"cva": ["stroke"]}));

        let back: SynonymTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_terms_sorted() {
        assert_eq!(clique_table().terms(), vec!["big", "huge", "large"]);
    }

    #[test]
    fn test_stats() {
        let table = SynonymTable::from_entries(vec![
            ("mi", vec!["heart attack", "stemi"]),
            ("heart attack", vec!["mi"]),
        ])
        .unwrap();

        let stats = table.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.total_synonyms, 3);
        assert_eq!(stats.max_synonyms, 2);
        assert_eq!(stats.multi_word_keys, 1);
        assert_eq!(stats.multi_word_synonyms, 1);
    }

    #[test]
    fn test_audit_symmetric_clique_is_clean() {
        assert!(clique_table().audit().is_empty());
    }

    #[test]
    fn test_audit_reports_inconsistencies() {
        let table = SynonymTable::from_entries(vec![
            ("fits", vec!["seizure", "fits", "seizure", "convulsion"]),
            ("seizure", vec!["convulsion"]),
            ("convulsion", vec!["seizure", "fits"]),
        ])
        .unwrap();

        let findings = table.audit();
        let kinds: Vec<(&str, &str, FindingKind)> = findings
            .iter()
            .map(|f| (f.term.as_str(), f.synonym.as_str(), f.kind))
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("fits", "seizure", FindingKind::MissingBackReference),
                ("fits", "fits", FindingKind::SelfReference),
                ("fits", "seizure", FindingKind::DuplicateSynonym),
            ]
        );
    }

    #[test]
    fn test_audit_unindexed_synonym() {
        let table = SynonymTable::from_entries(vec![("htn", vec!["hypertension"])]).unwrap();
        let findings = table.audit();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::UnindexedSynonym);
    }

    #[test]
    fn test_bundled_table_loads() {
        assert!(!MEDICAL_SYNONYMS.is_empty());
        assert!(MEDICAL_SYNONYMS.contains("stroke"));
        assert!(MEDICAL_SYNONYMS.contains("mi"));
    }

    #[test]
    fn test_bundled_keys_are_normalized() {
        for term in MEDICAL_SYNONYMS.terms() {
            assert_eq!(normalize_term(term), term);
            assert!(
                !MEDICAL_SYNONYMS.get(term).unwrap().iter().any(|s| s == term),
                "{term} lists itself"
            );
        }
    }
}
