//! Authentication log aggregate.

use crate::bridge::guard::{admit, match_ids};
use crate::bridge::{log_export, log_import, Bridge, BridgeContext, BridgeResult};
use crate::clock::Clock;
use crate::model::auth_log::AuthLogData;
use crate::model::{OptionMap, RecordId, Timestamp};
use crate::repo::reference::{AggregateKind, Reference};

#[derive(Debug, Clone, PartialEq)]
pub struct AuthLogBridge {
    id: Option<RecordId>,
    employee: Option<Reference>,
    ip: String,
    params: OptionMap,
    created_at: Timestamp,
}

impl AuthLogBridge {
    pub fn employee(&self) -> Option<Reference> {
        self.employee
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Bridge for AuthLogBridge {
    type Data = AuthLogData;

    const KIND: AggregateKind = AggregateKind::AuthLog;

    fn new(clock: &dyn Clock) -> Self {
        Self {
            id: None,
            employee: None,
            ip: String::new(),
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

    fn import(&mut self, dataset: &AuthLogData, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self> {
        admit(Self::KIND, self.id, dataset)?;
        let employee = ctx
            .resolver
            .resolve(AggregateKind::Employee, dataset.employee_id)?;

        self.employee = Some(employee);
        self.ip = dataset.ip.clone();
        self.params = dataset.params.clone();

        log_import(Self::KIND, self.id, None);
        Ok(self)
    }

    fn export(&self) -> AuthLogData {
        log_export(Self::KIND, self.id);
        AuthLogData {
            id: self.id,
            employee_id: self.employee.map_or(0, |employee| employee.id()),
            ip: self.ip.clone(),
            params: self.params.clone(),
            created_at: Some(self.created_at),
            complete: true,
        }
    }
}
