//! Action (permission on an entity type) dataset.

use crate::model::dataset::{Dataset, TranslationNode, Translations};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Complete snapshot of one action.
///
/// Action names are unique per entity, not globally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionData {
    pub id: Option<RecordId>,
    /// Required reference to the entity type this action applies to.
    pub entity_id: RecordId,
    pub name: String,
    pub enabled: bool,
    pub rules: OptionMap,
    pub translations: Translations<ActionTranslationNode>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for ActionData {
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
pub struct ActionTranslationNode {
    lang: LanguageCode,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ActionTranslationNode {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            title: String::new(),
            slug: None,
            description: None,
        }
    }
}

impl TranslationNode for ActionTranslationNode {
    fn lang(&self) -> &LanguageCode {
        &self.lang
    }
}
