//! Aggregate bridges between persistent state and datasets.
//!
//! # Responsibility
//! - Own the mutable persistent representation of every aggregate.
//! - Convert it to and from datasets through `import`/`export`.
//!
//! # Invariants
//! - Guards and reference resolution run before any field is written, so a
//!   failed import leaves the aggregate untouched.
//! - `export` never mutates and always returns a complete dataset.
//! - Bridges never persist; committing is the caller's concern.

pub mod action;
pub mod auth_log;
pub mod employee;
pub mod entity;
pub mod guard;
pub mod log_record;
pub mod position;
pub mod reconcile;

use crate::bridge::reconcile::ReconcileReport;
use crate::clock::Clock;
use crate::model::dataset::Dataset;
use crate::model::RecordId;
use crate::repo::reference::{AggregateKind, ReferenceNotFound, ReferenceResolver};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Import failures. None of them is retried by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Aggregate and dataset disagree on identity.
    IdentifierMismatch {
        kind: AggregateKind,
        current: RecordId,
        incoming: RecordId,
    },
    /// Dataset was not marked complete by its producer.
    IncompleteDataset { kind: AggregateKind },
    /// A foreign-key id in the dataset does not resolve.
    ReferenceNotFound(ReferenceNotFound),
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierMismatch {
                kind,
                current,
                incoming,
            } => write!(
                f,
                "{kind} identifier mismatch: aggregate has {current}, dataset declares {incoming}"
            ),
            Self::IncompleteDataset { kind } => {
                write!(f, "{kind} dataset is not marked complete")
            }
            Self::ReferenceNotFound(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReferenceNotFound(err) => Some(err),
            Self::IdentifierMismatch { .. } | Self::IncompleteDataset { .. } => None,
        }
    }
}

impl From<ReferenceNotFound> for BridgeError {
    fn from(value: ReferenceNotFound) -> Self {
        Self::ReferenceNotFound(value)
    }
}

/// Collaborators consulted during one import.
#[derive(Clone, Copy)]
pub struct BridgeContext<'a> {
    pub resolver: &'a dyn ReferenceResolver,
    pub clock: &'a dyn Clock,
}

impl<'a> BridgeContext<'a> {
    pub fn new(resolver: &'a dyn ReferenceResolver, clock: &'a dyn Clock) -> Self {
        Self { resolver, clock }
    }
}

/// Uniform import/export contract implemented by every aggregate.
pub trait Bridge: Sized {
    type Data: Dataset;

    const KIND: AggregateKind;

    /// Creates an unsaved aggregate stamped with the clock's current time.
    fn new(clock: &dyn Clock) -> Self;

    /// Identifier assigned by persistence, `None` before the first save.
    fn id(&self) -> Option<RecordId>;

    /// Records the identifier assigned by persistence on first save.
    ///
    /// Re-assigning the same id is a no-op; a different id is rejected.
    fn assign_id(&mut self, id: RecordId) -> BridgeResult<()>;

    /// Overwrites aggregate state from a complete dataset.
    fn import(&mut self, dataset: &Self::Data, ctx: &BridgeContext<'_>) -> BridgeResult<&mut Self>;

    /// Builds a fresh, complete dataset from aggregate state.
    fn export(&self) -> Self::Data;
}

fn id_label(id: Option<RecordId>) -> String {
    id.map_or_else(|| "new".to_string(), |id| id.to_string())
}

/// Emits the metadata-only success event for one import.
pub(crate) fn log_import(kind: AggregateKind, id: Option<RecordId>, report: Option<&ReconcileReport>) {
    match report {
        Some(report) => debug!(
            "event=dataset_import module=bridge status=ok kind={} id={} t9n_created={} t9n_updated={} t9n_removed={}",
            kind,
            id_label(id),
            report.create.len(),
            report.update.len(),
            report.remove.len()
        ),
        None => debug!(
            "event=dataset_import module=bridge status=ok kind={} id={}",
            kind,
            id_label(id)
        ),
    }
}

pub(crate) fn log_export(kind: AggregateKind, id: Option<RecordId>) {
    debug!(
        "event=dataset_export module=bridge status=ok kind={} id={}",
        kind,
        id_label(id)
    );
}
