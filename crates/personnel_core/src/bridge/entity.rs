//! Entity (protected resource type) aggregate.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::reconcile::{export_translations, reconcile, RecordSet, TranslationRecord};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::dataset::TranslationNode;
use crate::model::entity::{EntityData, EntityTranslationNode};
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::AggregateKind;

#[derive(Debug, Clone, PartialEq)]
pub struct EntityTranslation {
    lang: LanguageCode,
    title: String,
    slug: Option<String>,
    description: Option<String>,
}

impl EntityTranslation {
    pub fn lang(&self) -> &LanguageCode {
        &self.lang
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl TranslationRecord for EntityTranslation {
    type Node = EntityTranslationNode;

    fn from_node(node: &EntityTranslationNode) -> Self {
        Self {
            lang: node.lang().clone(),
            title: node.title.clone(),
            slug: node.slug.clone(),
            description: node.description.clone(),
        }
    }

    fn apply(&mut self, node: &EntityTranslationNode) {
        self.title = node.title.clone();
        self.slug = node.slug.clone();
        self.description = node.description.clone();
    }

    fn to_node(&self) -> EntityTranslationNode {
        let mut node = EntityTranslationNode::new(self.lang.clone());
        node.title = self.title.clone();
        node.slug = self.slug.clone();
        node.description = self.description.clone();
        node
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityBridge {
    id: Option<RecordId>,
    name: String,
    enabled: bool,
    rules: OptionMap,
    translations: RecordSet<EntityTranslation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl EntityBridge {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rules(&self) -> &OptionMap {
        &self.rules
    }

    pub fn translations(&self) -> &RecordSet<EntityTranslation> {
        &self.translations
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl Bridge for EntityBridge {
    type Data = EntityData;

    const KIND: AggregateKind = AggregateKind::Entity;

    fn new(clock: &dyn Clock) -> Self {
        let now = clock.now_ms();
        Self {
            id: None,
            name: String::new(),
            enabled: false,
            rules: OptionMap::new(),
            translations: RecordSet::new(),
            created_at: now,
            updated_at: now,
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

    fn import(&mut self, dataset: &EntityData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;

        self.name = dataset.name.clone();
        self.enabled = dataset.enabled;
        self.rules = dataset.rules.clone();
        let report = reconcile(&mut self.translations, &dataset.translations);
        self.updated_at = ctx.clock.now_ms();

        log_import(Self::KIND, self.id, Some(&report));
        Ok(self)
    }

    fn export(&self) -> EntityData {
        log_export(Self::KIND, self.id);
        EntityData {
            id: self.id,
            name: self.name.clone(),
            enabled: self.enabled,
            rules: self.rules.clone(),
            translations: export_translations(&self.translations),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            complete: true,
        }
    }
}
