//! `ObservationBuilder` — end-to-end extraction orchestrator.
//!
//! Per recognized entity: resolve candidate fields, normalize, score,
//! filter by each field's threshold, emit observations. Stateless across
//! calls; output ordering is entity emission order, then field
//! declaration order, then candidate order.

use tracing::{debug, trace};

use fieldnote_core::config::ExtractConfig;
use fieldnote_core::traits::recognizer::EntityRecognizer;
use fieldnote_core::types::{AliasTable, Field, Observation};

use crate::normalize::normalize;
use crate::resolver::LabelMap;
use crate::scoring::ConfidenceScorer;

/// Extraction pipeline orchestrator.
///
/// Holds no mutable state between calls; concurrent calls over different
/// texts need no coordination.
pub struct ObservationBuilder {
    config: ExtractConfig,
    scorer: ConfidenceScorer,
}

impl ObservationBuilder {
    /// Create a builder over an explicit configuration.
    pub fn new(config: ExtractConfig) -> Self {
        let scorer = ConfidenceScorer::new(config.clone());
        Self { config, scorer }
    }

    /// Extract scored observations from `text`.
    ///
    /// `source` is recorded as provenance on every emitted observation.
    /// Entities whose label matches no field, and candidates scoring
    /// below a field's threshold, are silently skipped — both are
    /// expected filtering outcomes, not errors. Producing zero
    /// observations is a normal result.
    pub fn build(
        &self,
        text: &str,
        source: &str,
        fields: &[Field],
        aliases: &AliasTable,
        recognizer: &dyn EntityRecognizer,
    ) -> Vec<Observation> {
        let label_map = LabelMap::build(fields);
        let default_base = self.config.effective_default_base_confidence();
        let mut observations = Vec::new();

        for entity in recognizer.recognize(text) {
            let candidate_fields = label_map.resolve(&entity.label);
            if candidate_fields.is_empty() {
                trace!(label = %entity.label, "no field accepts label, skipping entity");
                continue;
            }
            let base_confidence = entity.confidence.unwrap_or(default_base);

            for field in candidate_fields {
                for candidate in normalize(&field.normalizer, &entity.text, aliases) {
                    let combined = self.scorer.score(
                        base_confidence,
                        candidate.alias_confidence,
                        candidate.ambiguous,
                        &field.normalizer,
                    );
                    if combined < field.min_confidence {
                        trace!(
                            field = %field.name,
                            canonical = %candidate.canonical,
                            combined,
                            threshold = field.min_confidence,
                            "below threshold, discarding candidate"
                        );
                        continue;
                    }
                    observations.push(Observation {
                        field_name: field.name.clone(),
                        raw_text: entity.text.clone(),
                        canonical: candidate.canonical,
                        confidence: round4(combined),
                        source: source.to_string(),
                        context: entity.sentence.clone(),
                    });
                }
            }
        }

        debug!(source, count = observations.len(), "extraction complete");
        observations
    }
}

/// Round to 4 decimal places for persistence.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
