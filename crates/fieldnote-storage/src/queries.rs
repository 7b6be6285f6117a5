//! observations table read queries.

use rusqlite::{params, Connection};

use fieldnote_core::errors::StorageError;

use crate::store::sqe;

/// An observation row from the database.
#[derive(Debug, Clone)]
pub struct ObservationRecord {
    pub id: i64,
    pub field_id: i64,
    pub raw_text: String,
    pub canonical: String,
    pub confidence: f64,
    pub source: Option<String>,
    pub context: Option<String>,
    pub created_at: i64,
}

/// Get all observations for a field name, in insertion order.
pub fn get_observations_by_field(
    conn: &Connection,
    field_name: &str,
) -> Result<Vec<ObservationRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT o.id, o.field_id, o.raw_text, o.canonical_value, o.confidence,
                    o.source, o.context, o.created_at
             FROM observations o
             JOIN datamodel_fields f ON f.id = o.field_id
             WHERE f.name = ?1
             ORDER BY o.id",
        )
        .map_err(sqe)?;

    let rows = stmt
        .query_map(params![field_name], map_observation_row)
        .map_err(sqe)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqe)?);
    }
    Ok(result)
}

/// Count total observations.
pub fn count_observations(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM observations", [], |row| row.get(0))
        .map_err(sqe)
}

/// Count registered fields.
pub fn count_fields(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM datamodel_fields", [], |row| row.get(0))
        .map_err(sqe)
}

/// Shared row mapper for observation queries.
fn map_observation_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ObservationRecord> {
    Ok(ObservationRecord {
        id: row.get(0)?,
        field_id: row.get(1)?,
        raw_text: row.get(2)?,
        canonical: row.get(3)?,
        confidence: row.get(4)?,
        source: row.get(5)?,
        context: row.get(6)?,
        created_at: row.get(7)?,
    })
}
