//! Personnel and access-control data core.
//!
//! Aggregates (employees, positions, entities, actions and their logs) are
//! only ever read and written through flat datasets; bridges own the
//! translation between the two.

pub mod bridge;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use bridge::action::ActionBridge;
pub use bridge::auth_log::AuthLogBridge;
pub use bridge::employee::EmployeeBridge;
pub use bridge::entity::EntityBridge;
pub use bridge::log_record::LogBridge;
pub use bridge::position::PositionBridge;
pub use bridge::reconcile::ReconcileReport;
pub use bridge::{Bridge, BridgeContext, BridgeError, BridgeResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::dataset::{Dataset, Translations};
pub use model::language::{LanguageCode, LanguageCodeError};
pub use model::profile::EmployeeProfile;
pub use model::{OptionMap, RecordId, Timestamp};
pub use repo::reference::{AggregateKind, Reference, ReferenceNotFound, ReferenceResolver};
pub use repo::store::{MemoryStore, PersistenceStore, RepoError, RepoResult};
pub use service::dataset_service::{DatasetService, ServiceError, ServiceResult};

/// Liveness answer for hosts checking that the core library is linked.
pub fn ping() -> &'static str {
    "pong"
}

/// Package version of `personnel_core`, as printed by the CLI.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
