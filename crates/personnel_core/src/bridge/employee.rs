//! Employee aggregate and its per-language child records.
//!
//! # Invariants
//! - `position` is set by the first successful import and always names an
//!   existing position at the time of that import.
//! - `logged_at` is only changed by `update_logged_at`, never by `import`.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::reconcile::{export_translations, reconcile, RecordSet, TranslationRecord};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::dataset::TranslationNode;
use crate::model::employee::{EmployeeData, EmployeeTranslationNode};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::{AggregateKind, Reference};

/// Persistent per-language employee content.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTranslation {
    lang: LanguageCode,
    firstname: String,
    lastname: String,
    slug: Option<String>,
    brief: Option<String>,
    description: Option<String>,
    options: OptionMap,
}

impl EmployeeTranslation {
    pub fn lang(&self) -> &LanguageCode {
        &self.lang
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }
}

impl TranslationRecord for EmployeeTranslation {
    type Node = EmployeeTranslationNode;

    fn from_node(node: &EmployeeTranslationNode) -> Self {
        let mut record = Self {
            lang: node.lang().clone(),
            firstname: String::new(),
            lastname: String::new(),
            slug: None,
            brief: None,
            description: None,
            options: OptionMap::new(),
        };
        record.apply(node);
        record
    }

    fn apply(&mut self, node: &EmployeeTranslationNode) {
        self.firstname = node.firstname.clone();
        self.lastname = node.lastname.clone();
        self.slug = node.slug.clone();
        self.brief = node.brief.clone();
        self.description = node.description.clone();
        self.options = node.options.clone();
    }

    fn to_node(&self) -> EmployeeTranslationNode {
        let mut node = EmployeeTranslationNode::new(self.lang.clone());
        node.firstname = self.firstname.clone();
        node.lastname = self.lastname.clone();
        node.slug = self.slug.clone();
        node.brief = self.brief.clone();
        node.description = self.description.clone();
        node.options = self.options.clone();
        node
    }
}

/// Employee account aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeBridge {
    id: Option<RecordId>,
    username: String,
    username_canonical: String,
    email: String,
    email_canonical: String,
    enabled: bool,
    locked: bool,
    salt: String,
    password: String,
    position: Option<Reference>,
    options: OptionMap,
    roles: Vec<String>,
    translations: RecordSet<EmployeeTranslation>,
    created_at: Timestamp,
    updated_at: Timestamp,
    logged_at: Option<Timestamp>,
}

impl EmployeeBridge {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn position(&self) -> Option<Reference> {
        self.position
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn translations(&self) -> &RecordSet<EmployeeTranslation> {
        &self.translations
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn logged_at(&self) -> Option<Timestamp> {
        self.logged_at
    }

    /// Stamps the last successful login with the clock's current time.
    pub fn update_logged_at(&mut self, clock: &dyn Clock) -> &mut Self {
        self.logged_at = Some(clock.now_ms());
        self
    }
}

impl Bridge for EmployeeBridge {
    type Data = EmployeeData;

    const KIND: AggregateKind = AggregateKind::Employee;

    fn new(clock: &dyn Clock) -> Self {
        let now = clock.now_ms();
        Self {
            id: None,
            username: String::new(),
            username_canonical: String::new(),
            email: String::new(),
            email_canonical: String::new(),
            enabled: false,
            locked: false,
            salt: String::new(),
            password: String::new(),
            position: None,
            options: OptionMap::new(),
            roles: Vec::new(),
            translations: RecordSet::new(),
            created_at: now,
            updated_at: now,
            logged_at: None,
        }
    }

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) -> BridgeResult<()> {
        match_ids(Self::KIND, self.id, Some(id))?;
        self.id = Some(id);
        Ok(())
    }

    fn import(&mut self, dataset: &EmployeeData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;
        let position = ctx
            .resolver
            .resolve(AggregateKind::Position, dataset.position_id)?;

        self.position = Some(position);
        self.username = dataset.username.clone();
        self.username_canonical = dataset.username_canonical.clone();
        self.email = dataset.email.clone();
        self.email_canonical = dataset.email_canonical.clone();
        self.enabled = dataset.enabled;
        self.locked = dataset.locked;
        self.salt = dataset.salt.clone();
        self.password = dataset.password.clone();
        self.options = dataset.options.clone();
        self.roles = dataset.roles.clone();
        let report = reconcile(&mut self.translations, &dataset.translations);
        self.updated_at = ctx.clock.now_ms();

        log_import(Self::KIND, self.id, Some(&report));
        Ok(self)
    }

    fn export(&self) -> EmployeeData {
        log_export(Self::KIND, self.id);
        EmployeeData {
            id: self.id,
            username: self.username.clone(),
            username_canonical: self.username_canonical.clone(),
            email: self.email.clone(),
            email_canonical: self.email_canonical.clone(),
            enabled: self.enabled,
            locked: self.locked,
            salt: self.salt.clone(),
            password: self.password.clone(),
            position_id: self.position.map_or(0, |position| position.id()),
            options: self.options.clone(),
            roles: self.roles.clone(),
            translations: export_translations(&self.translations),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            logged_at: self.logged_at,
            complete: true,
        }
    }
}
