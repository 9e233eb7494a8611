//! Authentication log dataset.

use crate::model::dataset::Dataset;
use crate::model::{OptionMap, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthLogData {
    pub id: Option<RecordId>,
    pub employee_id: RecordId,
    /// Client address, IPv4 or IPv6 text form.
    pub ip: String,
    pub params: OptionMap,
    pub created_at: Option<Timestamp>,
    #[serde(skip)]
    pub complete: bool,
}

impl Dataset for AuthLogData {
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
