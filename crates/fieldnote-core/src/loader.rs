//! Data-model and alias file loading.
//!
//! All shape validation happens here. By the time a `Vec<Field>` or an
//! `AliasTable` reaches the pipeline it is structurally valid: field names
//! unique, `entity_types` non-empty, thresholds in [0,1], alias value
//! lists non-empty.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::errors::LoaderError;
use crate::types::collections::FxHashSet;
use crate::types::{AliasTable, Field};

/// Top-level shape of a data-model file.
#[derive(Debug, Deserialize)]
struct DataModelFile {
    fields: Vec<Field>,
}

/// Load and validate the data-model field list from a JSON file.
pub fn load_datamodel(path: &Path) -> Result<Vec<Field>, LoaderError> {
    let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: DataModelFile = serde_json::from_str(&raw).map_err(|e| LoaderError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_fields(&file.fields)?;
    debug!(fields = file.fields.len(), "loaded data model");
    Ok(file.fields)
}

/// Load and validate the alias table from a JSON file.
pub fn load_aliases(path: &Path) -> Result<AliasTable, LoaderError> {
    let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: AliasTable = serde_json::from_str(&raw).map_err(|e| LoaderError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_aliases(&table)?;
    debug!(strategies = table.strategies.len(), "loaded alias table");
    Ok(table)
}

/// Enforce the field invariants the pipeline relies on.
pub fn validate_fields(fields: &[Field]) -> Result<(), LoaderError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(LoaderError::DuplicateField { name: field.name.clone() });
        }
        if field.entity_types.is_empty() {
            return Err(LoaderError::InvalidField {
                name: field.name.clone(),
                reason: "entity_types must be non-empty".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&field.min_confidence) {
            return Err(LoaderError::InvalidField {
                name: field.name.clone(),
                reason: format!("min_confidence {} outside [0,1]", field.min_confidence),
            });
        }
    }
    Ok(())
}

/// Enforce the alias invariant: every mapped list is non-empty.
pub fn validate_aliases(table: &AliasTable) -> Result<(), LoaderError> {
    for (strategy, alias_map) in &table.strategies {
        for (key, canonicals) in alias_map {
            if canonicals.is_empty() {
                return Err(LoaderError::EmptyAliasList {
                    strategy: strategy.clone(),
                    key: key.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_datamodel() {
        let file = write_temp(
            r#"{"fields": [
                {"name": "contact_person", "entity_types": ["PERSON"],
                 "normalizer": "generic", "min_confidence": 0.4}
            ]}"#,
        );
        let fields = load_datamodel(file.path()).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "contact_person");
        assert_eq!(fields[0].entity_types, vec!["PERSON"]);
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let file = write_temp(
            r#"{"fields": [
                {"name": "a", "entity_types": ["ORG"], "normalizer": "generic", "min_confidence": 0.1},
                {"name": "a", "entity_types": ["ORG"], "normalizer": "generic", "min_confidence": 0.2}
            ]}"#,
        );
        let err = load_datamodel(file.path()).unwrap_err();
        assert!(matches!(err, LoaderError::DuplicateField { name } if name == "a"));
    }

    #[test]
    fn rejects_empty_entity_types() {
        let file = write_temp(
            r#"{"fields": [
                {"name": "a", "entity_types": [], "normalizer": "generic", "min_confidence": 0.1}
            ]}"#,
        );
        assert!(matches!(
            load_datamodel(file.path()).unwrap_err(),
            LoaderError::InvalidField { .. }
        ));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let file = write_temp(
            r#"{"fields": [
                {"name": "a", "entity_types": ["ORG"], "normalizer": "generic", "min_confidence": 1.5}
            ]}"#,
        );
        assert!(matches!(
            load_datamodel(file.path()).unwrap_err(),
            LoaderError::InvalidField { .. }
        ));
    }

    #[test]
    fn loads_alias_table_and_rejects_empty_lists() {
        let good = write_temp(r#"{"org_alias": {"acme": ["ACME Corp"]}}"#);
        let table = load_aliases(good.path()).unwrap();
        assert_eq!(
            table.strategy("org_alias").unwrap().get("acme").unwrap(),
            &vec!["ACME Corp".to_string()]
        );

        let bad = write_temp(r#"{"org_alias": {"acme": []}}"#);
        assert!(matches!(
            load_aliases(bad.path()).unwrap_err(),
            LoaderError::EmptyAliasList { .. }
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_datamodel(Path::new("/nonexistent/datamodel.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}
