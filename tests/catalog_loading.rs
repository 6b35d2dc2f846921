use std::fs;

use differential_core::catalog::{Catalog, CatalogBundle, CatalogError, SymptomEntry};
use tempfile::tempdir;

const CATALOG_JSON: &str = r#"[
  {
    "symptom": "fever",
    "differential_diagnoses": [
      {
        "name": "Pneumonia",
        "interview_points": ["cough", "sputum"],
        "physical_exam_points": ["crackles"]
      }
    ]
  },
  {
    "symptom": "fatigue"
  }
]"#;

const KEYWORDS_JSON: &str = r#"["cough", "crackles", "cough"]"#;

#[test]
fn load_parses_both_files_all_or_nothing() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("medical_data.json");
    let keywords_path = dir.path().join("symptom_keywords.json");
    fs::write(&catalog_path, CATALOG_JSON).unwrap();
    fs::write(&keywords_path, KEYWORDS_JSON).unwrap();

    let bundle = CatalogBundle::load(&catalog_path, &keywords_path).unwrap();

    assert_eq!(bundle.catalog.len(), 2);
    assert_eq!(bundle.catalog.resolve("fever").len(), 1);
    assert_eq!(bundle.keywords.len(), 3);
    assert!(bundle.version.as_str().starts_with("sha256:"));
}

#[test]
fn missing_file_fails_the_whole_load() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("medical_data.json");
    fs::write(&catalog_path, CATALOG_JSON).unwrap();

    let missing = dir.path().join("nope.json");
    let result = CatalogBundle::load(&catalog_path, &missing);
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn malformed_json_fails_the_whole_load() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("medical_data.json");
    let keywords_path = dir.path().join("symptom_keywords.json");
    fs::write(&catalog_path, "not json at all").unwrap();
    fs::write(&keywords_path, KEYWORDS_JSON).unwrap();

    let result = CatalogBundle::load(&catalog_path, &keywords_path);
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[test]
fn record_without_diagnoses_resolves_to_zero_candidates() {
    let entries: Vec<SymptomEntry> = serde_json::from_str(CATALOG_JSON).unwrap();
    let catalog = Catalog::new(entries);

    assert!(catalog.contains("fatigue"));
    assert!(catalog.resolve("fatigue").is_empty());
}

#[test]
fn unknown_symptom_resolves_to_an_empty_slice() {
    let entries: Vec<SymptomEntry> = serde_json::from_str(CATALOG_JSON).unwrap();
    let catalog = Catalog::new(entries);

    assert!(catalog.resolve("vertigo").is_empty());
    assert!(!catalog.contains("vertigo"));
}

#[test]
fn duplicate_symptom_records_keep_the_first() {
    let json = r#"[
      {"symptom": "fever", "differential_diagnoses": [{"name": "Pneumonia"}]},
      {"symptom": "fever", "differential_diagnoses": [{"name": "Influenza"}]}
    ]"#;
    let entries: Vec<SymptomEntry> = serde_json::from_str(json).unwrap();
    let catalog = Catalog::new(entries);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.resolve("fever")[0].name, "Pneumonia");
}

#[test]
fn version_is_stable_for_identical_content() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("medical_data.json");
    let keywords_path = dir.path().join("symptom_keywords.json");
    fs::write(&catalog_path, CATALOG_JSON).unwrap();
    fs::write(&keywords_path, KEYWORDS_JSON).unwrap();

    let first = CatalogBundle::load(&catalog_path, &keywords_path).unwrap();
    let second = CatalogBundle::load(&catalog_path, &keywords_path).unwrap();
    assert_eq!(first.version, second.version);

    fs::write(&keywords_path, r#"["cough"]"#).unwrap();
    let changed = CatalogBundle::load(&catalog_path, &keywords_path).unwrap();
    assert_ne!(first.version, changed.version);
}

#[test]
fn catalog_order_feeds_the_symptom_widget() {
    let entries: Vec<SymptomEntry> = serde_json::from_str(CATALOG_JSON).unwrap();
    let catalog = Catalog::new(entries);

    let symptoms: Vec<&str> = catalog.symptoms().collect();
    assert_eq!(symptoms, vec!["fever", "fatigue"]);
}
