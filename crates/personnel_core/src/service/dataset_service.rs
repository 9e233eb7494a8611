//! Dataset use-case service.
//!
//! # Responsibility
//! - Save datasets through the matching bridge and store.
//! - Read stored aggregates back as complete datasets.
//!
//! # Invariants
//! - A failed import never reaches the store; the stored aggregate stays as it was.
//! - Saved results are always read back from the store, never echoed from input.

use crate::bridge::employee::EmployeeBridge;
use crate::bridge::{Bridge, BridgeContext, BridgeError};
use crate::clock::Clock;
use crate::model::dataset::Dataset;
use crate::model::employee::EmployeeData;
use crate::model::RecordId;
use crate::repo::reference::{AggregateKind, ReferenceResolver};
use crate::repo::store::{PersistenceStore, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for dataset use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Import rejected by a guard or an unresolved reference.
    Bridge(BridgeError),
    /// Dataset or request names an aggregate the store does not hold.
    NotFound { kind: AggregateKind, id: RecordId },
    /// Store rejected the commit.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bridge(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent store state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bridge(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BridgeError> for ServiceError {
    fn from(value: BridgeError) -> Self {
        Self::Bridge(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }
}

/// Dataset service facade over a store and a clock.
pub struct DatasetService<S, C> {
    store: S,
    clock: C,
}

impl<S, C: Clock> DatasetService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Imports `dataset` into a new or stored aggregate and commits it.
    ///
    /// # Contract
    /// - Without an id, a fresh aggregate is created and assigned one on commit.
    /// - With an id, the stored aggregate is updated; an unknown id is `NotFound`.
    /// - Returns the committed aggregate's export.
    pub fn save<B>(&mut self, dataset: &B::Data) -> ServiceResult<B::Data>
    where
        B: Bridge,
        S: PersistenceStore<B> + ReferenceResolver,
    {
        let mut aggregate = match dataset.id() {
            Some(id) => self
                .store
                .load(id)
                .ok_or(ServiceError::NotFound { kind: B::KIND, id })?,
            None => B::new(&self.clock),
        };

        let ctx = BridgeContext::new(&self.store, &self.clock);
        aggregate.import(dataset, &ctx)?;

        let created = aggregate.id().is_none();
        let id = self.store.commit(aggregate)?;
        info!(
            "event=dataset_commit module=service status=ok kind={} id={} created={}",
            B::KIND,
            id,
            created
        );

        self.get::<B>(id)
            .ok_or(ServiceError::InconsistentState("committed aggregate not found in read-back"))
    }

    /// Exports one stored aggregate.
    pub fn get<B>(&self, id: RecordId) -> Option<B::Data>
    where
        B: Bridge,
        S: PersistenceStore<B>,
    {
        self.store.load(id).map(|aggregate| aggregate.export())
    }

    /// Stamps an employee's last login with the current time and commits it.
    pub fn record_login(&mut self, employee_id: RecordId) -> ServiceResult<EmployeeData>
    where
        S: PersistenceStore<EmployeeBridge>,
    {
        let mut employee: EmployeeBridge =
            self.store
                .load(employee_id)
                .ok_or(ServiceError::NotFound {
                    kind: AggregateKind::Employee,
                    id: employee_id,
                })?;
        employee.update_logged_at(&self.clock);
        let id = self.store.commit(employee)?;
        info!(
            "event=employee_login module=service status=ok id={}",
            id
        );

        self.get::<EmployeeBridge>(id)
            .ok_or(ServiceError::InconsistentState("logged-in employee not found in read-back"))
    }
}
