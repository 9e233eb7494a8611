//! Shared dataset contracts and the keyed translation mapping.
//!
//! # Responsibility
//! - Expose identity and completeness of every dataset through one trait.
//! - Hold translation nodes in insertion order, keyed by language.
//!
//! # Invariants
//! - `Translations` never stores a node under a key other than its own language.
//! - Completeness is never read from the wire; producers set it explicitly.

use crate::model::language::LanguageCode;
use crate::model::RecordId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identity and completeness surface shared by all datasets.
pub trait Dataset {
    /// Declared identifier, present only once the record was persisted.
    fn id(&self) -> Option<RecordId>;

    /// Whether upstream validation marked this dataset safe to import.
    fn is_complete(&self) -> bool;

    /// Sets the completeness marker. Reserved for validators and `export`.
    fn set_complete(&mut self, complete: bool);
}

/// One language's localized content inside a dataset.
pub trait TranslationNode {
    fn lang(&self) -> &LanguageCode;
}

/// Insertion-ordered `language -> node` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<LanguageCode, N>",
    bound(deserialize = "N: TranslationNode + Deserialize<'de>")
)]
pub struct Translations<N>(IndexMap<LanguageCode, N>);

impl<N> Default for Translations<N> {
    fn default() -> Self {
        Self(IndexMap::new())
    }
}

impl<N: TranslationNode> Translations<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under its own language, replacing any previous node.
    ///
    /// A replaced node keeps its original insertion position.
    pub fn insert(&mut self, node: N) -> Option<N> {
        self.0.insert(node.lang().clone(), node)
    }

    /// Removes the node for `lang`, preserving the order of the rest.
    pub fn remove(&mut self, lang: &str) -> Option<N> {
        self.0.shift_remove(lang)
    }
}

impl<N> Translations<N> {
    pub fn get(&self, lang: &str) -> Option<&N> {
        self.0.get(lang)
    }

    pub fn get_mut(&mut self, lang: &str) -> Option<&mut N> {
        self.0.get_mut(lang)
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.0.contains_key(lang)
    }

    /// Position of `lang` in insertion order.
    pub fn index_of(&self, lang: &str) -> Option<usize> {
        self.0.get_index_of(lang)
    }

    /// First node in insertion order.
    pub fn first(&self) -> Option<&N> {
        self.0.first().map(|(_, node)| node)
    }

    pub fn keys(&self) -> impl Iterator<Item = &LanguageCode> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &N> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LanguageCode, &N)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: TranslationNode> FromIterator<N> for Translations<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut translations = Self::new();
        for node in iter {
            translations.insert(node);
        }
        translations
    }
}

impl<N: TranslationNode> TryFrom<IndexMap<LanguageCode, N>> for Translations<N> {
    type Error = TranslationKeyMismatch;

    fn try_from(value: IndexMap<LanguageCode, N>) -> Result<Self, Self::Error> {
        if let Some((key, node)) = value.iter().find(|(key, node)| *key != node.lang()) {
            return Err(TranslationKeyMismatch {
                key: key.clone(),
                node_lang: node.lang().clone(),
            });
        }
        Ok(Self(value))
    }
}

/// Translation entry keyed under a language other than its node's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationKeyMismatch {
    pub key: LanguageCode,
    pub node_lang: LanguageCode,
}

impl Display for TranslationKeyMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "translation keyed `{}` carries language `{}`",
            self.key, self.node_lang
        )
    }
}

impl Error for TranslationKeyMismatch {}
