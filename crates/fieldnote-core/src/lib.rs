//! # fieldnote-core
//!
//! Foundation crate for the Fieldnote observation extraction pipeline.
//! Defines the domain types, configuration, errors, loader, and the
//! recognizer trait seam. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod errors;
pub mod loader;
pub mod traits;
pub mod types;

// Re-export the most commonly used items at the crate root.
pub use config::{ExtractConfig, WeightPair};
pub use errors::{LoaderError, StorageError};
pub use traits::recognizer::EntityRecognizer;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::{AliasTable, Field, NormalizationCandidate, Observation, RecognizedEntity};
