//! Storage-layer errors for SQLite operations.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Schema setup failed: {message}")]
    SchemaFailed { message: String },

    #[error("Unknown field: {name} (not present in the field registry)")]
    UnknownField { name: String },
}
