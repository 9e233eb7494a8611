//! Aggregate store contract and in-process implementation.
//!
//! # Responsibility
//! - Commit mutated aggregates and hand back stored copies.
//! - Resolve references against committed aggregates.
//!
//! # Invariants
//! - First commit assigns the next id of the aggregate's table, starting at 1.
//! - Committing an aggregate whose id is unknown to the store fails with `NotFound`.
//! - A reference resolves only once its target has been committed.

use crate::bridge::action::ActionBridge;
use crate::bridge::auth_log::AuthLogBridge;
use crate::bridge::employee::EmployeeBridge;
use crate::bridge::entity::EntityBridge;
use crate::bridge::log_record::LogBridge;
use crate::bridge::position::PositionBridge;
use crate::bridge::{Bridge, BridgeError};
use crate::model::RecordId;
use crate::repo::reference::{AggregateKind, Reference, ReferenceNotFound, ReferenceResolver};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store failure for commit operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound { kind: AggregateKind, id: RecordId },
    Identity(BridgeError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Identity(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Identity(err) => Some(err),
        }
    }
}

impl From<BridgeError> for RepoError {
    fn from(value: BridgeError) -> Self {
        Self::Identity(value)
    }
}

/// Downstream persistence contract for one aggregate type.
pub trait PersistenceStore<B: Bridge> {
    /// Returns a detached copy of the stored aggregate.
    fn load(&self, id: RecordId) -> Option<B>;

    /// Stores the aggregate, assigning an id on first commit.
    fn commit(&mut self, aggregate: B) -> RepoResult<RecordId>;
}

/// Rows of one aggregate type keyed by id.
#[derive(Debug, Clone)]
pub struct Table<B> {
    rows: BTreeMap<RecordId, B>,
    next_id: RecordId,
}

impl<B> Default for Table<B> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<B: Bridge + Clone> Table<B> {
    fn load(&self, id: RecordId) -> Option<B> {
        self.rows.get(&id).cloned()
    }

    fn commit(&mut self, mut aggregate: B) -> RepoResult<RecordId> {
        let id = match aggregate.id() {
            Some(id) if self.rows.contains_key(&id) => id,
            Some(id) => return Err(RepoError::NotFound { kind: B::KIND, id }),
            None => {
                let id = self.next_id;
                aggregate.assign_id(id)?;
                self.next_id += 1;
                id
            }
        };
        self.rows.insert(id, aggregate);
        Ok(id)
    }
}

impl<B> Table<B> {
    fn contains(&self, id: RecordId) -> bool {
        self.rows.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// In-process store holding one table per aggregate kind.
///
/// Single-threaded: callers serialize access, as with any aggregate.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Table<EmployeeBridge>,
    positions: Table<PositionBridge>,
    entities: Table<EntityBridge>,
    actions: Table<ActionBridge>,
    logs: Table<LogBridge>,
    auth_logs: Table<AuthLogBridge>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: AggregateKind, id: RecordId) -> bool {
        match kind {
            AggregateKind::Employee => self.employees.contains(id),
            AggregateKind::Position => self.positions.contains(id),
            AggregateKind::Entity => self.entities.contains(id),
            AggregateKind::Action => self.actions.contains(id),
            AggregateKind::Log => self.logs.contains(id),
            AggregateKind::AuthLog => self.auth_logs.contains(id),
        }
    }

    /// Number of stored aggregates of `kind`.
    pub fn count(&self, kind: AggregateKind) -> usize {
        match kind {
            AggregateKind::Employee => self.employees.len(),
            AggregateKind::Position => self.positions.len(),
            AggregateKind::Entity => self.entities.len(),
            AggregateKind::Action => self.actions.len(),
            AggregateKind::Log => self.logs.len(),
            AggregateKind::AuthLog => self.auth_logs.len(),
        }
    }
}

impl ReferenceResolver for MemoryStore {
    fn resolve(&self, kind: AggregateKind, id: RecordId) -> Result<Reference, ReferenceNotFound> {
        if self.contains(kind, id) {
            Ok(Reference::new(kind, id))
        } else {
            Err(ReferenceNotFound { kind, id })
        }
    }
}

impl PersistenceStore<EmployeeBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<EmployeeBridge> {
        self.employees.load(id)
    }

    fn commit(&mut self, aggregate: EmployeeBridge) -> RepoResult<RecordId> {
        self.employees.commit(aggregate)
    }
}

impl PersistenceStore<PositionBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<PositionBridge> {
        self.positions.load(id)
    }

    fn commit(&mut self, aggregate: PositionBridge) -> RepoResult<RecordId> {
        self.positions.commit(aggregate)
    }
}

impl PersistenceStore<EntityBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<EntityBridge> {
        self.entities.load(id)
    }

    fn commit(&mut self, aggregate: EntityBridge) -> RepoResult<RecordId> {
        self.entities.commit(aggregate)
    }
}

impl PersistenceStore<ActionBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<ActionBridge> {
        self.actions.load(id)
    }

    fn commit(&mut self, aggregate: ActionBridge) -> RepoResult<RecordId> {
        self.actions.commit(aggregate)
    }
}

impl PersistenceStore<LogBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<LogBridge> {
        self.logs.load(id)
    }

    fn commit(&mut self, aggregate: LogBridge) -> RepoResult<RecordId> {
        self.logs.commit(aggregate)
    }
}

impl PersistenceStore<AuthLogBridge> for MemoryStore {
    fn load(&self, id: RecordId) -> Option<AuthLogBridge> {
        self.auth_logs.load(id)
    }

    fn commit(&mut self, aggregate: AuthLogBridge) -> RepoResult<RecordId> {
        self.auth_logs.commit(aggregate)
    }
}
