//! Extraction pipeline configuration.
//!
//! Passed explicitly into the scorer and builder at construction — never
//! read from ambient global state.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

/// A (base, alias) weight pair for blending recognizer confidence with
/// alias confidence. Weights are expected to sum to ~1.0 but this is not
/// enforced; the blend is a plain weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    /// Weight applied to the recognizer's base confidence.
    pub base: f64,
    /// Weight applied to the normalization candidate's alias confidence.
    pub alias: f64,
}

impl Default for WeightPair {
    fn default() -> Self {
        Self { base: 0.6, alias: 0.4 }
    }
}

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractConfig {
    /// Base confidence substituted when an entity reports none. Default: 0.55.
    pub default_base_confidence: Option<f64>,
    /// Subtracted from the combined score on ambiguous matches. Default: 0.1.
    pub ambiguity_penalty: Option<f64>,
    /// Fallback weight pair for strategies with no specific entry.
    pub default_weights: Option<WeightPair>,
    /// Per-strategy weight overrides, keyed by normalizer strategy name.
    #[serde(default)]
    pub weights: FxHashMap<String, WeightPair>,
}

impl ExtractConfig {
    /// Returns the effective default base confidence, defaulting to 0.55.
    pub fn effective_default_base_confidence(&self) -> f64 {
        self.default_base_confidence.unwrap_or(0.55)
    }

    /// Returns the effective ambiguity penalty, defaulting to 0.1.
    pub fn effective_ambiguity_penalty(&self) -> f64 {
        self.ambiguity_penalty.unwrap_or(0.1)
    }

    /// Returns the weight pair for a strategy, falling back to the
    /// configured default pair, then to 0.6/0.4.
    pub fn weights_for(&self, strategy: &str) -> WeightPair {
        self.weights
            .get(strategy)
            .copied()
            .or(self.default_weights)
            .unwrap_or_default()
    }
}
