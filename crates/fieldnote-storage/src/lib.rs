//! # fieldnote-storage
//!
//! SQLite persistence for the Fieldnote pipeline: the data-model field
//! registry (idempotent upsert) and the append-only observation log,
//! plus the read queries the CLI summary uses.

pub mod queries;
pub mod schema;
pub mod store;

pub use queries::ObservationRecord;
pub use store::ObservationStore;
