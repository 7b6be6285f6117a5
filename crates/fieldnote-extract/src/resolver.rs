//! Label-to-field resolution.
//!
//! A label may feed multiple fields and a field may accept multiple
//! labels, so the relation is indexed once per run rather than recomputed
//! per entity.

use fieldnote_core::types::collections::FxHashMap;
use fieldnote_core::types::Field;

/// Index from recognizer label to the fields interested in it.
///
/// Field declaration order is preserved within each bucket — output
/// ordering downstream depends on it.
#[derive(Debug)]
pub struct LabelMap<'a> {
    buckets: FxHashMap<&'a str, Vec<&'a Field>>,
}

impl<'a> LabelMap<'a> {
    /// Build the index from the field list.
    pub fn build(fields: &'a [Field]) -> Self {
        let mut buckets: FxHashMap<&'a str, Vec<&'a Field>> = FxHashMap::default();
        for field in fields {
            for label in &field.entity_types {
                buckets.entry(label.as_str()).or_default().push(field);
            }
        }
        Self { buckets }
    }

    /// Fields that accept `label`, in declaration order.
    ///
    /// A label no field accepts resolves to the empty slice — the
    /// expected "field not defined for this label" case, not an error.
    pub fn resolve(&self, label: &str) -> &[&'a Field] {
        self.buckets.get(label).map(Vec::as_slice).unwrap_or(&[])
    }
}
