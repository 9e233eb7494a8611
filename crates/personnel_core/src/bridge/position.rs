//! Position aggregate.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::reconcile::{export_translations, reconcile, RecordSet, TranslationRecord};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::dataset::TranslationNode;
use crate::model::language::LanguageCode;
use crate::model::position::{PositionData, PositionTranslationNode};
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::AggregateKind;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionTranslation {
    lang: LanguageCode,
    title: String,
    slug: Option<String>,
    short: Option<String>,
    description: Option<String>,
}

impl PositionTranslation {
    pub fn lang(&self) -> &LanguageCode {
        &self.lang
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl TranslationRecord for PositionTranslation {
    type Node = PositionTranslationNode;

    fn from_node(node: &PositionTranslationNode) -> Self {
        Self {
            lang: node.lang().clone(),
            title: node.title.clone(),
            slug: node.slug.clone(),
            short: node.short.clone(),
            description: node.description.clone(),
        }
    }

    fn apply(&mut self, node: &PositionTranslationNode) {
        self.title = node.title.clone();
        self.slug = node.slug.clone();
        self.short = node.short.clone();
        self.description = node.description.clone();
    }

    fn to_node(&self) -> PositionTranslationNode {
        let mut node = PositionTranslationNode::new(self.lang.clone());
        node.title = self.title.clone();
        node.slug = self.slug.clone();
        node.short = self.short.clone();
        node.description = self.description.clone();
        node
    }
}

/// Job position aggregate. Holds no references to other aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBridge {
    id: Option<RecordId>,
    name: String,
    enabled: bool,
    options: OptionMap,
    translations: RecordSet<PositionTranslation>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PositionBridge {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn translations(&self) -> &RecordSet<PositionTranslation> {
        &self.translations
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl Bridge for PositionBridge {
    type Data = PositionData;

    const KIND: AggregateKind = AggregateKind::Position;

    fn new(clock: &dyn Clock) -> Self {
        let now = clock.now_ms();
        Self {
            id: None,
            name: String::new(),
            enabled: false,
            options: OptionMap::new(),
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

    fn import(&mut self, dataset: &PositionData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;

        self.name = dataset.name.clone();
        self.enabled = dataset.enabled;
        self.options = dataset.options.clone();
        let report = reconcile(&mut self.translations, &dataset.translations);
        self.updated_at = ctx.clock.now_ms();

        log_import(Self::KIND, self.id, Some(&report));
        Ok(self)
    }

    fn export(&self) -> PositionData {
        log_export(Self::KIND, self.id);
        PositionData {
            id: self.id,
            name: self.name.clone(),
            enabled: self.enabled,
            options: self.options.clone(),
            translations: export_translations(&self.translations),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            complete: true,
        }
    }
}
