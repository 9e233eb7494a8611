//! Entity (protected resource type) dataset.

use crate::model::dataset::{Dataset, TranslationNode, Translations};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Complete snapshot of one protected resource type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityData {
    pub id: Option<RecordId>,
    /// Machine name, e.g. `invoice`.
    pub name: String,
    pub enabled: bool,
    /// Access rules, opaque to this crate.
    pub rules: OptionMap,
    pub translations: Translations<EntityTranslationNode>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    /// Set by the producer once the dataset is checked; never serialized.
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for EntityData {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTranslationNode {
    lang: LanguageCode,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl EntityTranslationNode {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            title: String::new(),
            slug: None,
            description: None,
        }
    }
}

impl TranslationNode for EntityTranslationNode {
    fn lang(&self) -> &LanguageCode {
        &self.lang
    }
}
