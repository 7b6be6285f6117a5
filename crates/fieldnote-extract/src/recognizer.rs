//! Built-in lexicon recognizer.
//!
//! A deterministic gazetteer matcher so the CLI and the end-to-end tests
//! have a recognizer without an external model: case-insensitive
//! whole-word matching over a term list, with naive sentence splitting
//! for context. Real NER stays behind the `EntityRecognizer` trait.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use fieldnote_core::errors::LoaderError;
use fieldnote_core::traits::recognizer::EntityRecognizer;
use fieldnote_core::types::RecognizedEntity;

/// One gazetteer entry: a surface term and the label it carries.
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconEntry {
    /// Surface term to match, case-insensitively, on word boundaries.
    pub term: String,
    /// Label reported for matches, e.g. `ORG`.
    pub label: String,
    /// Optional per-entry confidence reported on every match.
    pub confidence: Option<f64>,
}

/// Gazetteer-backed recognizer.
pub struct LexiconRecognizer {
    entries: Vec<LexiconEntry>,
    patterns: Vec<Regex>,
}

impl LexiconRecognizer {
    /// Build a recognizer over a term list.
    pub fn new(entries: Vec<LexiconEntry>) -> Result<Self, regex::Error> {
        let patterns = entries
            .iter()
            .map(|entry| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&entry.term))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries, patterns })
    }

    /// Load a lexicon from a JSON file: an array of `{term, label,
    /// confidence?}` objects.
    pub fn from_file(path: &Path) -> Result<Self, LoaderError> {
        let raw = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<LexiconEntry> =
            serde_json::from_str(&raw).map_err(|e| LoaderError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::new(entries).map_err(|e| LoaderError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut entities = Vec::new();
        for sentence in split_sentences(text) {
            let trimmed = sentence.trim();
            if trimmed.is_empty() {
                continue;
            }
            // Collect matches across all entries, then order left-to-right
            // (entry order breaks ties) for deterministic emission.
            let mut hits: Vec<(usize, usize, RecognizedEntity)> = Vec::new();
            for (index, (entry, pattern)) in self.entries.iter().zip(&self.patterns).enumerate() {
                for m in pattern.find_iter(sentence) {
                    hits.push((
                        m.start(),
                        index,
                        RecognizedEntity {
                            text: m.as_str().to_string(),
                            label: entry.label.clone(),
                            confidence: entry.confidence,
                            sentence: Some(trimmed.to_string()),
                        },
                    ));
                }
            }
            hits.sort_by_key(|(start, index, _)| (*start, *index));
            entities.extend(hits.into_iter().map(|(_, _, entity)| entity));
        }
        entities
    }
}

/// Split on sentence terminators, keeping the terminator with the
/// sentence. No abbreviation handling — this is a test/CLI convenience,
/// not linguistics.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let end = i + c.len_utf8();
            sentences.push(&text[start..end]);
            start = end;
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str, label: &str, confidence: Option<f64>) -> LexiconEntry {
        LexiconEntry {
            term: term.to_string(),
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn matches_case_insensitively_with_sentence_context() {
        let recognizer = LexiconRecognizer::new(vec![entry("acme", "ORG", Some(0.8))]).unwrap();
        let entities = recognizer.recognize("We met ACME yesterday. Nothing else happened.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "ACME");
        assert_eq!(entities[0].label, "ORG");
        assert_eq!(entities[0].confidence, Some(0.8));
        assert_eq!(entities[0].sentence.as_deref(), Some("We met ACME yesterday."));
    }

    #[test]
    fn emits_left_to_right_within_a_sentence() {
        let recognizer = LexiconRecognizer::new(vec![
            entry("Bob", "PERSON", None),
            entry("ACME", "ORG", None),
        ])
        .unwrap();
        let entities = recognizer.recognize("ACME hired Bob.");

        let labels: Vec<&str> = entities.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["ORG", "PERSON"]);
    }

    #[test]
    fn whole_word_only() {
        let recognizer = LexiconRecognizer::new(vec![entry("art", "TOPIC", None)]).unwrap();
        assert!(recognizer.recognize("The startup party.").is_empty());
        assert_eq!(recognizer.recognize("Modern art is odd.").len(), 1);
    }

    #[test]
    fn deterministic_across_calls() {
        let recognizer = LexiconRecognizer::new(vec![
            entry("ACME", "ORG", None),
            entry("Bob", "PERSON", None),
        ])
        .unwrap();
        let text = "Bob left ACME. ACME hired Bob again!";
        assert_eq!(recognizer.recognize(text), recognizer.recognize(text));
    }
}
