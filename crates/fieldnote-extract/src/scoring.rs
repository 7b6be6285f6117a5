//! Confidence blending.
//!
//! Combines the recognizer's base confidence with a candidate's alias
//! confidence using strategy-scoped weights, then applies the ambiguity
//! penalty. Per-field thresholds are NOT applied here: weights and
//! penalty are strategy-scoped while thresholds are field-scoped, and one
//! scored candidate can face several fields with different thresholds.

use fieldnote_core::config::ExtractConfig;

/// Strategy-weighted confidence scorer.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    config: ExtractConfig,
}

impl ConfidenceScorer {
    /// Create a scorer over an explicit configuration.
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Blend `base_confidence` and `alias_confidence` under the weights
    /// configured for `strategy`.
    ///
    /// Ambiguous matches pay the configured penalty; the result is
    /// clamped at 0 below and not clamped above.
    pub fn score(
        &self,
        base_confidence: f64,
        alias_confidence: f64,
        ambiguous: bool,
        strategy: &str,
    ) -> f64 {
        let weights = self.config.weights_for(strategy);
        let mut combined = base_confidence * weights.base + alias_confidence * weights.alias;
        if ambiguous {
            combined = (combined - self.config.effective_ambiguity_penalty()).max(0.0);
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldnote_core::config::WeightPair;

    #[test]
    fn default_weights_blend() {
        let scorer = ConfidenceScorer::new(ExtractConfig::default());
        let score = scorer.score(0.8, 0.5, false, "generic");
        assert!((score - (0.8 * 0.6 + 0.5 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn ambiguity_penalty_is_subtracted() {
        let scorer = ConfidenceScorer::new(ExtractConfig::default());
        let unpenalized = scorer.score(0.8, 0.75, false, "org_alias");
        let penalized = scorer.score(0.8, 0.75, true, "org_alias");
        assert!((unpenalized - penalized - 0.1).abs() < 1e-12);
    }

    #[test]
    fn penalty_clamps_at_zero() {
        let scorer = ConfidenceScorer::new(ExtractConfig {
            ambiguity_penalty: Some(0.9),
            ..Default::default()
        });
        assert_eq!(scorer.score(0.0, 0.1, true, "generic"), 0.0);
    }

    #[test]
    fn strategy_specific_weights_apply() {
        let mut config = ExtractConfig::default();
        config
            .weights
            .insert("org_alias".to_string(), WeightPair { base: 0.3, alias: 0.7 });
        let scorer = ConfidenceScorer::new(config);

        let score = scorer.score(0.8, 0.9, false, "org_alias");
        assert!((score - (0.8 * 0.3 + 0.9 * 0.7)).abs() < 1e-12);

        // Other strategies still get the default pair.
        let fallback = scorer.score(0.8, 0.9, false, "other");
        assert!((fallback - (0.8 * 0.6 + 0.9 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn no_upper_clamp() {
        let scorer = ConfidenceScorer::new(ExtractConfig {
            default_weights: Some(WeightPair { base: 1.0, alias: 1.0 }),
            ..Default::default()
        });
        assert!(scorer.score(1.0, 1.0, false, "generic") > 1.0);
    }
}
