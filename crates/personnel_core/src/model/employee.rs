//! Employee dataset and its per-language node.
//!
//! Credential fields (`salt`, `password`) are carried opaquely: hashing and
//! verification happen outside this crate.

use crate::model::dataset::{Dataset, TranslationNode, Translations};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// Complete snapshot of one employee account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeData {
    pub id: Option<RecordId>,
    pub username: String,
    pub username_canonical: String,
    pub email: String,
    pub email_canonical: String,
    pub enabled: bool,
    pub locked: bool,
    pub salt: String,
    pub password: String,
    /// Required reference to the employee's position.
    pub position_id: RecordId,
    pub options: OptionMap,
    /// Authorization roles in declaration order.
    pub roles: Vec<String>,
    pub translations: Translations<EmployeeTranslationNode>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    /// Last successful login, if any.
    pub logged_at: Option<Timestamp>,
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for EmployeeData {
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

/// Localized employee name and biography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTranslationNode {
    lang: LanguageCode,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: OptionMap,
}

impl EmployeeTranslationNode {
    pub fn new(lang: LanguageCode) -> Self {
        Self {
            lang,
            firstname: String::new(),
            lastname: String::new(),
            slug: None,
            brief: None,
            description: None,
            options: OptionMap::new(),
        }
    }
}

impl TranslationNode for EmployeeTranslationNode {
    fn lang(&self) -> &LanguageCode {
        &self.lang
    }
}
