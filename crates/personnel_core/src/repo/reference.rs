//! Cross-aggregate references and their resolver contract.
//!
//! # Responsibility
//! - Turn a foreign-key id from a dataset into a typed reference handle.
//! - Never load the referenced aggregate itself.
//!
//! # Invariants
//! - A `Reference` is only produced by a resolver that confirmed the target exists.

use crate::model::RecordId;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Aggregate categories managed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AggregateKind {
    Employee,
    Position,
    Entity,
    Action,
    Log,
    AuthLog,
}

impl AggregateKind {
    /// Stable name used in log events and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Position => "position",
            Self::Entity => "entity",
            Self::Action => "action",
            Self::Log => "log",
            Self::AuthLog => "auth_log",
        }
    }
}

impl Display for AggregateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightweight handle to another aggregate, identified by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    kind: AggregateKind,
    id: RecordId,
}

impl Reference {
    /// Builds a handle. Intended for resolver implementations.
    pub fn new(kind: AggregateKind, id: RecordId) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> AggregateKind {
        self.kind
    }

    pub fn id(&self) -> RecordId {
        self.id
    }
}

/// Foreign-key id that does not name an existing aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceNotFound {
    pub kind: AggregateKind,
    pub id: RecordId,
}

impl Display for ReferenceNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "referenced {} not found: {}", self.kind, self.id)
    }
}

impl Error for ReferenceNotFound {}

/// Resolves foreign-key ids into references.
///
/// Each call is treated as one blocking lookup; callers do not retry.
pub trait ReferenceResolver {
    fn resolve(&self, kind: AggregateKind, id: RecordId) -> Result<Reference, ReferenceNotFound>;
}

/// Resolver over a fixed set of known `(kind, id)` pairs.
#[derive(Debug, Clone, Default)]
pub struct KnownReferences {
    known: BTreeSet<(AggregateKind, RecordId)>,
}

impl KnownReferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: AggregateKind, id: RecordId) -> Self {
        self.insert(kind, id);
        self
    }

    pub fn insert(&mut self, kind: AggregateKind, id: RecordId) {
        self.known.insert((kind, id));
    }

    pub fn remove(&mut self, kind: AggregateKind, id: RecordId) {
        self.known.remove(&(kind, id));
    }
}

impl ReferenceResolver for KnownReferences {
    fn resolve(&self, kind: AggregateKind, id: RecordId) -> Result<Reference, ReferenceNotFound> {
        if self.known.contains(&(kind, id)) {
            Ok(Reference::new(kind, id))
        } else {
            Err(ReferenceNotFound { kind, id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AggregateKind, KnownReferences, ReferenceNotFound, ReferenceResolver};

    #[test]
    fn resolves_only_registered_pairs() {
        let resolver = KnownReferences::new().with(AggregateKind::Position, 7);

        let reference = resolver
            .resolve(AggregateKind::Position, 7)
            .expect("registered position should resolve");
        assert_eq!(reference.kind(), AggregateKind::Position);
        assert_eq!(reference.id(), 7);

        let err = resolver
            .resolve(AggregateKind::Entity, 7)
            .expect_err("kind is part of the key");
        assert_eq!(
            err,
            ReferenceNotFound {
                kind: AggregateKind::Entity,
                id: 7
            }
        );
        assert_eq!(err.to_string(), "referenced entity not found: 7");
    }
}
