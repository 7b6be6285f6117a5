//! `ObservationStore` — the durable side of the pipeline.
//!
//! Owns the SQLite connection. The field-registry upsert is idempotent
//! (INSERT OR IGNORE then read-back), so concurrent callers racing to
//! register the same field name converge on one row. Observation inserts
//! are append-only; no update or delete path exists.

use std::path::Path;

use rusqlite::{params, Connection};
use tracing::{debug, info};

use fieldnote_core::errors::StorageError;
use fieldnote_core::types::collections::FxHashMap;
use fieldnote_core::types::{Field, Observation};

use crate::queries;
use crate::schema::{PRAGMAS, SCHEMA_STATEMENTS};

/// SQLite-backed observation store.
pub struct ObservationStore {
    conn: Connection,
}

impl ObservationStore {
    /// Open a file-backed store, applying pragmas and ensuring the schema.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(sqe)?;
        let store = Self { conn };
        store.apply_pragmas()?;
        store.ensure_schema()?;
        info!(path = %path.display(), "observation store opened");
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqe)?;
        let store = Self { conn };
        store.ensure_schema()?;
        Ok(store)
    }

    fn apply_pragmas(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(&PRAGMAS.join(";\n")).map_err(sqe)
    }

    /// Apply the schema. Safe to call every run.
    fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA_STATEMENTS {
            self.conn
                .execute(statement, [])
                .map_err(|e| StorageError::SchemaFailed { message: e.to_string() })?;
        }
        Ok(())
    }

    /// Register the data-model fields, returning name → row id.
    ///
    /// Idempotent: a field already present keeps its id and its stored
    /// definition; re-registering never duplicates rows. Safe under
    /// concurrent callers — at-least-once insert, then read-back for the
    /// authoritative id.
    pub fn upsert_fields(&self, fields: &[Field]) -> Result<FxHashMap<String, i64>, StorageError> {
        let mut field_ids = FxHashMap::default();
        for field in fields {
            let entity_types = serde_json::to_string(&field.entity_types)
                .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO datamodel_fields
                     (name, entity_types, normalizer, min_confidence)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![field.name, entity_types, field.normalizer, field.min_confidence],
                )
                .map_err(sqe)?;
            let id: i64 = self
                .conn
                .query_row(
                    "SELECT id FROM datamodel_fields WHERE name = ?1",
                    params![field.name],
                    |row| row.get(0),
                )
                .map_err(sqe)?;
            field_ids.insert(field.name.clone(), id);
        }
        debug!(fields = field_ids.len(), "data model upserted");
        Ok(field_ids)
    }

    /// Append one observation. `created_at` is assigned by the database.
    pub fn insert_observation(
        &self,
        field_id: i64,
        observation: &Observation,
    ) -> Result<i64, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached(
                "INSERT INTO observations
                 (field_id, raw_text, canonical_value, confidence, source, context)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .map_err(sqe)?;
        stmt.execute(params![
            field_id,
            observation.raw_text,
            observation.canonical,
            observation.confidence,
            observation.source,
            observation.context,
        ])
        .map_err(sqe)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Append a batch of observations in one transaction, resolving each
    /// observation's field id through `field_ids`. Returns the number
    /// inserted. An observation naming a field absent from the registry
    /// mapping is a caller defect and fails the batch.
    pub fn insert_observations(
        &mut self,
        field_ids: &FxHashMap<String, i64>,
        observations: &[Observation],
    ) -> Result<usize, StorageError> {
        let tx = self.conn.transaction().map_err(sqe)?;
        let mut count = 0;
        {
            let mut stmt = tx
                .prepare_cached(
                    "INSERT INTO observations
                     (field_id, raw_text, canonical_value, confidence, source, context)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                )
                .map_err(sqe)?;
            for observation in observations {
                let field_id = field_ids.get(&observation.field_name).ok_or_else(|| {
                    StorageError::UnknownField { name: observation.field_name.clone() }
                })?;
                stmt.execute(params![
                    field_id,
                    observation.raw_text,
                    observation.canonical,
                    observation.confidence,
                    observation.source,
                    observation.context,
                ])
                .map_err(sqe)?;
                count += 1;
            }
        }
        tx.commit().map_err(sqe)?;
        debug!(count, "observations appended");
        Ok(count)
    }

    /// All observations for a field, in insertion order.
    pub fn observations_by_field(
        &self,
        field_name: &str,
    ) -> Result<Vec<queries::ObservationRecord>, StorageError> {
        queries::get_observations_by_field(&self.conn, field_name)
    }

    /// Total observation count.
    pub fn count_observations(&self) -> Result<i64, StorageError> {
        queries::count_observations(&self.conn)
    }

    /// Registered field count.
    pub fn count_fields(&self) -> Result<i64, StorageError> {
        queries::count_fields(&self.conn)
    }
}

/// StorageError from a rusqlite error.
pub(crate) fn sqe(e: impl std::fmt::Display) -> StorageError {
    StorageError::SqliteError { message: e.to_string() }
}
