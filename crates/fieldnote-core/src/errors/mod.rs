//! Error types for the Fieldnote workspace.

mod loader_error;
mod storage_error;

pub use loader_error::LoaderError;
pub use storage_error::StorageError;
