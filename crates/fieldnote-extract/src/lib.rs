//! # fieldnote-extract
//!
//! Extraction pipeline for the Fieldnote system: resolves recognizer
//! labels to data-model fields, normalizes raw matches into canonical
//! candidates, blends confidences, filters by per-field thresholds, and
//! emits observation records.

pub mod builder;
pub mod normalize;
pub mod recognizer;
pub mod resolver;
pub mod scoring;

pub use builder::ObservationBuilder;
pub use normalize::normalize;
pub use recognizer::LexiconRecognizer;
pub use resolver::LabelMap;
pub use scoring::ConfidenceScorer;
