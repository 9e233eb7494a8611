//! Keyed reconciliation of per-language child records.
//!
//! # Responsibility
//! - Diff the keys an aggregate holds against the keys a dataset declares.
//! - Create, overwrite, or drop child records so both key sets agree.
//!
//! # Invariants
//! - After `reconcile`, the record key set equals the dataset key set, in
//!   dataset order.
//! - Updates are full overwrites, so reconciling twice changes nothing.
//! - Records are owned by the aggregate and carry only their language key.

use crate::model::dataset::{TranslationNode, Translations};
use crate::model::language::LanguageCode;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Persistent child record mirrored by one translation node.
pub trait TranslationRecord {
    type Node: TranslationNode;

    /// Builds a new record from a node, taking the node's language as key.
    fn from_node(node: &Self::Node) -> Self;

    /// Overwrites every field from `node`.
    fn apply(&mut self, node: &Self::Node);

    /// Builds the node exported for this record.
    fn to_node(&self) -> Self::Node;
}

/// Aggregate-owned index of child records by language.
pub type RecordSet<R> = IndexMap<LanguageCode, R>;

/// Partition of the union of two key sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff<K> {
    /// Desired only.
    pub create: Vec<K>,
    /// Present on both sides.
    pub update: Vec<K>,
    /// Current only.
    pub remove: Vec<K>,
}

impl<K> Default for KeyDiff<K> {
    fn default() -> Self {
        Self {
            create: Vec::new(),
            update: Vec::new(),
            remove: Vec::new(),
        }
    }
}

impl<K> KeyDiff<K> {
    /// True when no language was added or dropped. Updated records are
    /// still rewritten.
    pub fn keys_unchanged(&self) -> bool {
        self.create.is_empty() && self.remove.is_empty()
    }
}

/// Outcome of one translation reconciliation.
pub type ReconcileReport = KeyDiff<LanguageCode>;

/// Splits `current ∪ desired` into create/update/remove buckets.
///
/// `create` and `update` follow `desired` order; `remove` follows `current` order.
pub fn diff_keys<'a, K, C, D>(current: C, desired: D) -> KeyDiff<K>
where
    K: Ord + Clone + 'a,
    C: IntoIterator<Item = &'a K>,
    D: IntoIterator<Item = &'a K>,
{
    let current: Vec<&K> = current.into_iter().collect();
    let desired: Vec<&K> = desired.into_iter().collect();
    let current_set: BTreeSet<&K> = current.iter().copied().collect();
    let desired_set: BTreeSet<&K> = desired.iter().copied().collect();

    let mut diff = KeyDiff::default();
    for key in desired {
        if current_set.contains(key) {
            diff.update.push(key.clone());
        } else {
            diff.create.push(key.clone());
        }
    }
    for key in current {
        if !desired_set.contains(key) {
            diff.remove.push(key.clone());
        }
    }
    diff
}

/// Brings `records` in line with `nodes`.
pub fn reconcile<R: TranslationRecord>(
    records: &mut RecordSet<R>,
    nodes: &Translations<R::Node>,
) -> ReconcileReport {
    let diff = diff_keys(records.keys(), nodes.keys());

    for lang in &diff.remove {
        records.shift_remove(lang);
    }
    for lang in &diff.update {
        if let (Some(record), Some(node)) = (records.get_mut(lang), nodes.get(lang.as_str())) {
            record.apply(node);
        }
    }
    for lang in &diff.create {
        if let Some(node) = nodes.get(lang.as_str()) {
            records.insert(lang.clone(), R::from_node(node));
        }
    }
    records.sort_by(|left, _, right, _| {
        nodes
            .index_of(left.as_str())
            .cmp(&nodes.index_of(right.as_str()))
    });

    diff
}

/// Builds the dataset translation mapping from aggregate records.
pub fn export_translations<R: TranslationRecord>(records: &RecordSet<R>) -> Translations<R::Node> {
    records.values().map(R::to_node).collect()
}
