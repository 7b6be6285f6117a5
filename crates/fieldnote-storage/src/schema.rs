//! Database schema.
//!
//! Applied with `CREATE TABLE IF NOT EXISTS` on every open, so opening an
//! existing database is a no-op. `observations.created_at` is assigned by
//! SQLite at insert time; the insert path never carries a timestamp.

/// Schema statements, applied in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS datamodel_fields (
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        entity_types TEXT NOT NULL,
        normalizer TEXT NOT NULL,
        min_confidence REAL NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS observations (
        id INTEGER PRIMARY KEY,
        field_id INTEGER NOT NULL,
        raw_text TEXT NOT NULL,
        canonical_value TEXT NOT NULL,
        confidence REAL NOT NULL,
        source TEXT,
        context TEXT,
        created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
        FOREIGN KEY(field_id) REFERENCES datamodel_fields(id)
    )",
    "CREATE INDEX IF NOT EXISTS idx_observations_field
        ON observations(field_id)",
    "CREATE TABLE IF NOT EXISTS aliases (
        alias TEXT NOT NULL,
        canonical TEXT NOT NULL,
        type TEXT NOT NULL,
        confidence REAL NOT NULL,
        UNIQUE(alias, canonical, type)
    )",
    "CREATE TABLE IF NOT EXISTS overrides (
        field_id INTEGER NOT NULL,
        raw_text TEXT NOT NULL,
        canonical_value TEXT NOT NULL,
        created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
        UNIQUE(field_id, raw_text)
    )",
];

/// Connection pragmas applied on open.
pub const PRAGMAS: &[&str] = &[
    "PRAGMA journal_mode = WAL",
    "PRAGMA synchronous = NORMAL",
    "PRAGMA foreign_keys = ON",
];
