//! Loader errors for data-model and alias files.
//!
//! The loader is the only place input shapes are validated; the pipeline
//! assumes structurally valid fields and aliases by contract.

use std::path::PathBuf;

/// Errors that can occur while loading the data model or alias table.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid field '{name}': {reason}")]
    InvalidField { name: String, reason: String },

    #[error("Duplicate field name: {name}")]
    DuplicateField { name: String },

    #[error("Alias key '{key}' in strategy '{strategy}' maps to an empty list")]
    EmptyAliasList { strategy: String, key: String },
}
