//! Domain types shared across the extraction pipeline and storage.

use serde::{Deserialize, Serialize};

pub mod collections {
    //! FxHash-backed collections used throughout the workspace.
    pub use rustc_hash::{FxHashMap, FxHashSet};
}

use self::collections::FxHashMap;

/// A named slot in the data model that recognized entities feed into.
///
/// Loaded once per run from the data-model definition and immutable
/// thereafter. `name` is unique across the model; `entity_types` is
/// non-empty (both enforced by the loader).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Unique field identifier, e.g. `contact_person`.
    pub name: String,
    /// Recognizer labels this field accepts, e.g. `["PERSON"]`.
    pub entity_types: Vec<String>,
    /// Name of the normalization strategy applied to raw matches.
    pub normalizer: String,
    /// Observations scoring below this are discarded for this field.
    pub min_confidence: f64,
}

/// Alias map for one normalization strategy: normalized lookup key
/// (lower-cased, whitespace-collapsed) to an ordered, non-empty list of
/// canonical values. More than one value for a key signals ambiguity.
pub type AliasMap = FxHashMap<String, Vec<String>>;

/// All alias maps, keyed by normalization strategy name.
///
/// Read-only for the duration of an extraction run. A strategy with no
/// entry here falls through to the generic pass-through normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    pub strategies: FxHashMap<String, AliasMap>,
}

impl AliasTable {
    /// Alias map for a strategy, if one is defined.
    pub fn strategy(&self, name: &str) -> Option<&AliasMap> {
        self.strategies.get(name)
    }
}

/// A labeled span of text produced by the external recognizer.
///
/// `confidence` is `None` when the recognizer reported nothing usable —
/// absent and unparseable values both collapse to `None` at the
/// recognizer boundary, and the builder substitutes the configured
/// default.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedEntity {
    /// Raw matched text, exactly as it appeared in the input.
    pub text: String,
    /// Recognizer label, e.g. `PERSON`, `ORG`.
    pub label: String,
    /// Per-entity base confidence in [0,1], when the recognizer reports one.
    pub confidence: Option<f64>,
    /// Enclosing sentence text, when the recognizer has sentence boundaries.
    pub sentence: Option<String>,
}

/// One canonicalization candidate for a raw match.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationCandidate {
    /// Canonical value for this candidate.
    pub canonical: String,
    /// How well-known the raw→canonical mapping is, in [0,1].
    pub alias_confidence: f64,
    /// True when the lookup key maps to more than one canonical value.
    pub ambiguous: bool,
}

/// One extracted fact: a (field, canonical value, confidence, provenance)
/// tuple ready for persistence.
///
/// Observations are immutable and append-only; `created_at` is assigned
/// by the store at insert time, not carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Name of the field this observation belongs to.
    pub field_name: String,
    /// Original, un-normalized entity text.
    pub raw_text: String,
    /// Canonical value after normalization.
    pub canonical: String,
    /// Combined confidence in [0,1], rounded to 4 decimal places.
    pub confidence: f64,
    /// Caller-supplied provenance label.
    pub source: String,
    /// Enclosing sentence text, when the recognizer supplied one.
    pub context: Option<String>,
}
