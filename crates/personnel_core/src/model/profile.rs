//! Read-only employee projection for account and display code.
//!
//! # Responsibility
//! - Answer "what is this employee called in language X" with fallbacks.
//! - Expose account flags and options without handing out the dataset mutably.
//!
//! # Invariants
//! - Strict lookups never fall back to another language.
//! - Non-strict lookups try the requested language, then the preferred
//!   language, then the first translation in insertion order.

use crate::model::employee::{EmployeeData, EmployeeTranslationNode};
use crate::model::language::LanguageCode;
use crate::model::{RecordId, Timestamp};
use serde_json::Value;

/// Employee account view over an exported dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProfile {
    data: EmployeeData,
    preferred_lang: Option<LanguageCode>,
}

impl EmployeeProfile {
    pub fn new(data: EmployeeData, preferred_lang: Option<LanguageCode>) -> Self {
        Self {
            data,
            preferred_lang,
        }
    }

    pub fn set_preferred_language(&mut self, lang: Option<LanguageCode>) -> &mut Self {
        self.preferred_lang = lang;
        self
    }

    pub fn preferred_language(&self) -> Option<&LanguageCode> {
        self.preferred_lang.as_ref()
    }

    pub fn id(&self) -> Option<RecordId> {
        self.data.id
    }

    pub fn username(&self) -> &str {
        &self.data.username
    }

    pub fn email(&self) -> &str {
        &self.data.email
    }

    pub fn is_enabled(&self) -> bool {
        self.data.enabled
    }

    pub fn is_account_non_locked(&self) -> bool {
        !self.data.locked
    }

    pub fn roles(&self) -> &[String] {
        &self.data.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.data.roles.iter().any(|value| value == role)
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.data.options.contains_key(name)
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.data.options.get(name)
    }

    pub fn created_at(&self) -> Option<Timestamp> {
        self.data.created_at
    }

    pub fn updated_at(&self) -> Option<Timestamp> {
        self.data.updated_at
    }

    pub fn logged_at(&self) -> Option<Timestamp> {
        self.data.logged_at
    }

    pub fn firstname(&self, lang: Option<&str>, strict: bool) -> Option<&str> {
        self.translation(lang, strict)
            .map(|node| node.firstname.as_str())
    }

    pub fn lastname(&self, lang: Option<&str>, strict: bool) -> Option<&str> {
        self.translation(lang, strict)
            .map(|node| node.lastname.as_str())
    }

    /// Resolves the translation to display for `lang`.
    pub fn translation(&self, lang: Option<&str>, strict: bool) -> Option<&EmployeeTranslationNode> {
        let translations = &self.data.translations;

        if let Some(lang) = lang {
            match translations.get(lang) {
                Some(node) => return Some(node),
                None if strict => return None,
                None => {}
            }
        }

        if let Some(preferred) = &self.preferred_lang {
            match translations.get(preferred.as_str()) {
                Some(node) => return Some(node),
                None if strict => return None,
                None => {}
            }
        }

        if strict {
            None
        } else {
            translations.first()
        }
    }

    pub fn dataset(&self) -> &EmployeeData {
        &self.data
    }

    pub fn into_dataset(self) -> EmployeeData {
        self.data
    }
}
