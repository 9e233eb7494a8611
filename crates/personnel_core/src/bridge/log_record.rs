//! Audit log aggregate.
//!
//! Log records have no translations and no `updated_at`: once written they
//! only ever change through a full re-import.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::log_record::LogData;
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::{AggregateKind, Reference};

#[derive(Debug, Clone, PartialEq)]
pub struct LogBridge {
    id: Option<RecordId>,
    object_id: RecordId,
    entity: Option<Reference>,
    action: Option<Reference>,
    version_id: Option<RecordId>,
    employee: Option<Reference>,
    params: OptionMap,
    created_at: Timestamp,
}

impl LogBridge {
    pub fn object_id(&self) -> RecordId {
        self.object_id
    }

    pub fn entity(&self) -> Option<Reference> {
        self.entity
    }

    pub fn action(&self) -> Option<Reference> {
        self.action
    }

    pub fn employee(&self) -> Option<Reference> {
        self.employee
    }

    pub fn version_id(&self) -> Option<RecordId> {
        self.version_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Bridge for LogBridge {
    type Data = LogData;

    const KIND: AggregateKind = AggregateKind::Log;

    fn new(clock: &dyn Clock) -> Self {
        Self {
            id: None,
            object_id: 0,
            entity: None,
            action: None,
            version_id: None,
            employee: None,
            params: OptionMap::new(),
            created_at: clock.now_ms(),
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

    fn import(&mut self, dataset: &LogData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;
        let entity = ctx
            .resolver
            .resolve(AggregateKind::Entity, dataset.entity_id)?;
        let action = ctx
            .resolver
            .resolve(AggregateKind::Action, dataset.action_id)?;
        let employee = ctx
            .resolver
            .resolve(AggregateKind::Employee, dataset.employee_id)?;

        self.entity = Some(entity);
        self.action = Some(action);
        self.employee = Some(employee);
        self.object_id = dataset.object_id;
        self.version_id = dataset.version_id;
        self.params = dataset.params.clone();

        log_import(Self::KIND, self.id, None);
        Ok(self)
    }

    fn export(&self) -> LogData {
        log_export(Self::KIND, self.id);
        LogData {
            id: self.id,
            object_id: self.object_id,
            entity_id: self.entity.map_or(0, |entity| entity.id()),
            action_id: self.action.map_or(0, |action| action.id()),
            version_id: self.version_id,
            employee_id: self.employee.map_or(0, |employee| employee.id()),
            params: self.params.clone(),
            created_at: Some(self.created_at),
            complete: true,
        }
    }
}
