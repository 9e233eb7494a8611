//! Position dataset.

use crate::model::dataset::{Dataset, TranslationNode, Translations};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Complete snapshot of one job position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionData {
    pub id: Option<RecordId>,
    pub name: String,
    pub enabled: bool,
    pub options: OptionMap,
    pub translations: Translations<PositionTranslationNode>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for PositionData {
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
pub struct PositionTranslationNode {
    lang: LanguageCode,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Short summary shown in listings.
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PositionTranslationNode {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            title: String::new(),
            slug: None,
            short: None,
            description: None,
        }
    }
}

impl TranslationNode for PositionTranslationNode {
    fn lang(&self) -> &LanguageCode {
        &self.lang
    }
}
