//! Entity recognizer seam.

use crate::types::RecognizedEntity;

/// An external entity recognizer.
///
/// Given a text, returns the labeled spans it found. Emission order is not
/// contractually guaranteed but must be deterministic for a given input —
/// observation output ordering follows it. Implementations that receive a
/// non-numeric confidence from an underlying model must report `None`
/// rather than fail; the builder substitutes the configured default.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entities in `text`.
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}
