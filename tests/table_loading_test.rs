//! Integration tests for loading custom synonym tables and configuration.

use std::io::Write;

use medsyn::prelude::*;
use medsyn::synonym::FindingKind;
use tempfile::{NamedTempFile, TempDir};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_raw_table_file() -> Result<()> {
    let file = write_temp(
        r#"{
            "tb": ["tuberculosis", "consumption"],
            "tuberculosis": ["tb", "consumption"],
            "consumption": ["tb", "tuberculosis"]
        }"#,
    );

    let table = SynonymTable::load_from_file(file.path())?;
    assert_eq!(table.len(), 3);

    let expander = QueryExpander::with_table(&table);
    assert_eq!(
        expander.expand("TB screening"),
        vec!["tb", "tuberculosis", "consumption", "screening"]
    );
    assert!(table.audit().is_empty());
    Ok(())
}

#[test]
fn test_load_wrapped_table_file() -> Result<()> {
    let file = write_temp(r#"{"synonyms": {"uti": ["urinary tract infection"]}}"#);

    let table = SynonymTable::load_from_file(file.path())?;
    let expander = TermExpander::new(&table);
    assert_eq!(expander.expand("UTI"), vec!["uti", "urinary tract infection"]);
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = SynonymTable::load_from_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(MedsynError::Dictionary(_))));
}

#[test]
fn test_load_malformed_file() {
    let file = write_temp(r#"{"mi": ["stemi", 3]}"#);
    let result = SynonymTable::load_from_file(file.path());

    match result {
        Err(MedsynError::Dictionary(msg)) => {
            assert!(msg.contains(&file.path().display().to_string()));
        }
        other => panic!("Expected dictionary error, got {other:?}"),
    }
}

#[test]
fn test_colliding_keys_rejected() {
    let file = write_temp(r#"{"MI": ["stemi"], "mi ": ["nstemi"]}"#);
    let result = SynonymTable::load_from_file(file.path());
    assert!(matches!(result, Err(MedsynError::Dictionary(_))));
}

#[test]
fn test_repeated_key_in_file_rejected() {
    let file = write_temp(r#"{"mi": ["stemi"], "mi": ["nstemi"]}"#);
    let result = SynonymTable::load_from_file(file.path());
    assert!(matches!(result, Err(MedsynError::Dictionary(_))));

    let file = write_temp(r#"{"synonyms": {"tb": ["tuberculosis"], "tb": []}}"#);
    let result = SynonymTable::load_from_file(file.path());
    assert!(matches!(result, Err(MedsynError::Dictionary(_))));
}

#[test]
fn test_config_with_custom_table() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let table_path = dir.path().join("synonyms.json");
    std::fs::write(&table_path, r#"{"abd": ["abdominal"], "abdominal": ["abd"]}"#)?;

    let config_path = dir.path().join("medsyn.json");
    let config_json = serde_json::json!({
        "min_token_length": 3,
        "table_path": table_path,
    });
    std::fs::write(&config_path, config_json.to_string())?;

    let config = ExpansionConfig::from_file(&config_path)?;
    let table = config.load_table()?;
    let expander = QueryExpander::new(TermExpander::new(&table), &config);

    assert_eq!(expander.expand("ct abd"), vec!["abd", "abdominal"]);
    Ok(())
}

#[test]
fn test_audit_custom_table() -> Result<()> {
    let file = write_temp(r#"{"htn": ["hypertension"], "hypertension": []}"#);
    let table = SynonymTable::load_from_file(file.path())?;

    let findings = table.audit();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].term, "htn");
    assert_eq!(findings[0].synonym, "hypertension");
    assert_eq!(findings[0].kind, FindingKind::MissingBackReference);

    // lookups are unaffected by the asymmetry
    let expander = TermExpander::new(&table);
    assert_eq!(expander.expand("hypertension"), vec!["hypertension"]);
    Ok(())
}

#[test]
fn test_bundled_table_round_trips_through_json() -> Result<()> {
    let json = serde_json::to_string(&*MEDICAL_SYNONYMS)?;
    let reloaded = SynonymTable::from_json_str(&json)?;
    assert_eq!(&reloaded, &*MEDICAL_SYNONYMS);
    Ok(())
}
