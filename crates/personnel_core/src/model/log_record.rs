//! Audit log dataset: one employee action performed on one record.

use crate::model::dataset::Dataset;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogData {
    pub id: Option<RecordId>,
    /// Identifier of the audited record inside its entity type.
    pub object_id: RecordId,
    pub entity_id: RecordId,
    pub action_id: RecordId,
    /// External revision of the audited record, when versioned.
    pub version_id: Option<RecordId>,
    pub employee_id: RecordId,
    pub params: OptionMap,
    pub created_at: Option<Timestamp>,
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for LogData {
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
