//! Normalizer registry — turns raw matched text into canonical candidates.
//!
//! Strategy selection is by exact name match against the alias table:
//! a strategy with an alias map uses alias lookup, anything else falls
//! through to the generic pass-through. The registry never returns an
//! empty candidate list.

use smallvec::{smallvec, SmallVec};

use fieldnote_core::types::{AliasMap, AliasTable, NormalizationCandidate};

/// Alias confidence for an exact, unambiguous dictionary hit.
const UNIQUE_HIT_CONFIDENCE: f64 = 0.9;
/// Alias confidence when the key maps to more than one canonical value.
const AMBIGUOUS_HIT_CONFIDENCE: f64 = 0.75;
/// Alias confidence for unknown text — low but nonzero, so the threshold
/// stage judges it rather than dropping it here.
const PASS_THROUGH_CONFIDENCE: f64 = 0.5;

/// Candidate list; one element in the common case, two on ambiguity.
pub type Candidates = SmallVec<[NormalizationCandidate; 2]>;

/// Normalize `raw_text` under the named strategy.
///
/// Always returns at least one candidate.
pub fn normalize(strategy: &str, raw_text: &str, aliases: &AliasTable) -> Candidates {
    match aliases.strategy(strategy) {
        Some(alias_map) => normalize_with_aliases(raw_text, alias_map),
        None => smallvec![pass_through(raw_text)],
    }
}

/// Alias-lookup strategy: one candidate per mapped canonical value, or
/// the pass-through candidate when the key is unknown.
fn normalize_with_aliases(raw_text: &str, alias_map: &AliasMap) -> Candidates {
    let key = normalize_key(raw_text);
    match alias_map.get(&key) {
        Some(canonicals) => {
            let ambiguous = canonicals.len() > 1;
            let alias_confidence = if ambiguous {
                AMBIGUOUS_HIT_CONFIDENCE
            } else {
                UNIQUE_HIT_CONFIDENCE
            };
            canonicals
                .iter()
                .map(|canonical| NormalizationCandidate {
                    canonical: canonical.clone(),
                    alias_confidence,
                    ambiguous,
                })
                .collect()
        }
        None => smallvec![pass_through(raw_text)],
    }
}

/// Generic pass-through candidate: trimmed raw text, low confidence.
fn pass_through(raw_text: &str) -> NormalizationCandidate {
    NormalizationCandidate {
        canonical: raw_text.trim().to_string(),
        alias_confidence: PASS_THROUGH_CONFIDENCE,
        ambiguous: false,
    }
}

/// Lookup key: trimmed, lower-cased, internal whitespace runs collapsed
/// to a single space.
pub fn normalize_key(text: &str) -> String {
    let mut key = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        for c in word.chars() {
            key.extend(c.to_lowercase());
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldnote_core::types::collections::FxHashMap;
    use proptest::prelude::*;

    fn alias_table(strategy: &str, entries: &[(&str, &[&str])]) -> AliasTable {
        let mut alias_map: AliasMap = FxHashMap::default();
        for (key, canonicals) in entries {
            alias_map.insert(
                key.to_string(),
                canonicals.iter().map(|c| c.to_string()).collect(),
            );
        }
        let mut strategies = FxHashMap::default();
        strategies.insert(strategy.to_string(), alias_map);
        AliasTable { strategies }
    }

    #[test]
    fn key_normalization_trims_lowers_and_collapses() {
        assert_eq!(normalize_key("  Acme   Corp \t Ltd "), "acme corp ltd");
        assert_eq!(normalize_key("ACME"), "acme");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn unique_alias_hit() {
        let aliases = alias_table("org_alias", &[("acme", &["ACME Corporation"])]);
        let candidates = normalize("org_alias", " ACME ", &aliases);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].canonical, "ACME Corporation");
        assert_eq!(candidates[0].alias_confidence, 0.9);
        assert!(!candidates[0].ambiguous);
    }

    #[test]
    fn ambiguous_alias_hit_yields_one_candidate_per_value() {
        let aliases = alias_table("org_alias", &[("ms", &["Microsoft", "Morgan Stanley"])]);
        let candidates = normalize("org_alias", "MS", &aliases);
        assert_eq!(candidates.len(), 2);
        for candidate in &candidates {
            assert_eq!(candidate.alias_confidence, 0.75);
            assert!(candidate.ambiguous);
        }
        assert_eq!(candidates[0].canonical, "Microsoft");
        assert_eq!(candidates[1].canonical, "Morgan Stanley");
    }

    #[test]
    fn unmapped_key_falls_back_to_pass_through() {
        let aliases = alias_table("org_alias", &[("acme", &["ACME Corporation"])]);
        let candidates = normalize("org_alias", "  Initech  ", &aliases);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].canonical, "Initech");
        assert_eq!(candidates[0].alias_confidence, 0.5);
        assert!(!candidates[0].ambiguous);
    }

    #[test]
    fn unknown_strategy_uses_generic_pass_through() {
        let aliases = AliasTable::default();
        let candidates = normalize("no_such_strategy", " Jane Doe ", &aliases);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].canonical, "Jane Doe");
        assert_eq!(candidates[0].alias_confidence, 0.5);
    }

    proptest! {
        // The registry contract: never an empty candidate list, for any
        // input text and any strategy name.
        #[test]
        fn never_returns_empty(strategy in ".{0,12}", raw in ".{0,64}") {
            let aliases = alias_table("org_alias", &[("ms", &["Microsoft", "Morgan Stanley"])]);
            let candidates = normalize(&strategy, &raw, &aliases);
            prop_assert!(!candidates.is_empty());
        }

        // Alias hits produce exactly one candidate per mapped value.
        #[test]
        fn candidate_count_matches_mapping(values in prop::collection::vec("[a-z]{1,8}", 1..5)) {
            let value_refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let aliases = alias_table("s", &[("key", &value_refs)]);
            let candidates = normalize("s", "KEY", &aliases);
            prop_assert_eq!(candidates.len(), values.len());
        }
    }
}
