//! Action aggregate: one permission on an entity type.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::reconcile::{export_translations, reconcile, RecordSet, TranslationRecord};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::action::{ActionData, ActionTranslationNode};
use crate::model::dataset::TranslationNode;
use crate::model::language::LanguageCode;
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::{AggregateKind, Reference};

#[derive(Debug, Clone, PartialEq)]
pub struct ActionTranslation {
    lang: LanguageCode,
    title: String,
    slug: Option<String>,
    description: Option<String>,
}

impl ActionTranslation {
    pub fn lang(&self) -> &LanguageCode {
        &self.lang
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl TranslationRecord for ActionTranslation {
    type Node = ActionTranslationNode;

    fn from_node(node: &ActionTranslationNode) -> Self {
        Self {
            lang: node.lang().clone(),
            title: node.title.clone(),
            slug: node.slug.clone(),
            description: node.description.clone(),
        }
    }

    fn apply(&mut self, node: &ActionTranslationNode) {
        self.title = node.title.clone();
        self.slug = node.slug.clone();
        self.description = node.description.clone();
    }

    fn to_node(&self) -> ActionTranslationNode {
        let mut node = ActionTranslationNode::new(self.lang.clone());
        node.title = self.title.clone();
        node.slug = self.slug.clone();
        node.description = self.description.clone();
        node
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionBridge {
    id: Option<RecordId>,
    entity: Option<Reference>,
    name: String,
    enabled: bool,
    rules: OptionMap,
    translations: RecordSet<ActionTranslation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ActionBridge {
    pub fn entity(&self) -> Option<Reference> {
        self.entity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn translations(&self) -> &RecordSet<ActionTranslation> {
        &self.translations
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl Bridge for ActionBridge {
    type Data = ActionData;

    const KIND: AggregateKind = AggregateKind::Action;

    fn new(clock: &dyn Clock) -> Self {
        let now = clock.now_ms();
        Self {
            id: None,
            entity: None,
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

    fn import(&mut self, dataset: &ActionData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;
        let entity = ctx
            .resolver
            .resolve(AggregateKind::Entity, dataset.entity_id)?;

        self.entity = Some(entity);
        self.name = dataset.name.clone();
        self.enabled = dataset.enabled;
        self.rules = dataset.rules.clone();
        let report = reconcile(&mut self.translations, &dataset.translations);
        self.updated_at = ctx.clock.now_ms();

        log_import(Self::KIND, self.id, Some(&report));
        Ok(self)
    }

    fn export(&self) -> ActionData {
        log_export(Self::KIND, self.id);
        ActionData {
            id: self.id,
            entity_id: self.entity.map_or(0, |entity| entity.id()),
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
