//! Pre-import guards shared by all bridges.
//!
//! Guards are pure checks: they never touch aggregate state.

use crate::bridge::{BridgeError, BridgeResult};
use crate::model::dataset::Dataset;
use crate::model::RecordId;
use crate::repo::reference::AggregateKind;

/// Fails when a persisted aggregate receives a dataset declaring another id.
///
/// An aggregate without an id accepts any dataset id (first import), and a
/// dataset without an id is accepted by any aggregate.
pub fn match_ids(
    kind: AggregateKind,
    current: Option<RecordId>,
    incoming: Option<RecordId>,
) -> BridgeResult<()> {
    match (current, incoming) {
        (Some(current), Some(incoming)) if current != incoming => {
            Err(BridgeError::IdentifierMismatch {
                kind,
                current,
                incoming,
            })
        }
        _ => Ok(()),
    }
}

/// Fails when the dataset was not marked complete.
pub fn ensure_complete<D: Dataset>(kind: AggregateKind, dataset: &D) -> BridgeResult<()> {
    if dataset.is_complete() {
        Ok(())
    } else {
        Err(BridgeError::IncompleteDataset { kind })
    }
}

/// Runs the identifier guard, then the completion guard.
pub fn admit<D: Dataset>(
    kind: AggregateKind,
    current: Option<RecordId>,
    dataset: &D,
) -> BridgeResult<()> {
    match_ids(kind, current, dataset.id())?;
    ensure_complete(kind, dataset)
}

#[cfg(test)]
mod tests {
    use super::{admit, ensure_complete, match_ids};
    use crate::bridge::BridgeError;
    use crate::model::dataset::Dataset;
    use crate::model::entity::EntityData;
    use crate::repo::reference::AggregateKind;

    const KIND: AggregateKind = AggregateKind::Entity;

    #[test]
    fn match_ids_accepts_absent_or_equal_ids() {
        assert_eq!(match_ids(KIND, None, None), Ok(()));
        assert_eq!(match_ids(KIND, None, Some(4)), Ok(()));
        assert_eq!(match_ids(KIND, Some(4), None), Ok(()));
        assert_eq!(match_ids(KIND, Some(4), Some(4)), Ok(()));
    }

    #[test]
    fn match_ids_rejects_different_present_ids() {
        assert_eq!(
            match_ids(KIND, Some(4), Some(5)),
            Err(BridgeError::IdentifierMismatch {
                kind: KIND,
                current: 4,
                incoming: 5,
            })
        );
    }

    #[test]
    fn ensure_complete_checks_marker() {
        let mut data = EntityData::default();
        assert_eq!(
            ensure_complete(KIND, &data),
            Err(BridgeError::IncompleteDataset { kind: KIND })
        );
        data.set_complete(true);
        assert_eq!(ensure_complete(KIND, &data), Ok(()));
    }

    #[test]
    fn admit_reports_identifier_mismatch_before_incompleteness() {
        let mut data = EntityData::default();
        data.id = Some(9);
        let err = admit(KIND, Some(1), &data).unwrap_err();
        assert!(matches!(err, BridgeError::IdentifierMismatch { .. }));
    }
}
