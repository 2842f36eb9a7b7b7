use crate::catalog::CatalogError;
use crate::models::PlayerId;
use crate::store::StoreError;
use thiserror::Error;

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(PlayerId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rejection taxonomy of the roster engine.
///
/// Every variant rejects a single request and is recoverable by the
/// caller; none are process-fatal and the engine never retries on its own.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Fewer than the required six slots were filled. Carries only the
    /// aggregate shortfall, not which slots are empty.
    #[error("{missing} positions must be filled")]
    IncompleteRoster { missing: usize },

    /// One or more referenced player ids did not resolve in the catalog.
    #[error("Unknown player reference: {}", join_ids(.ids))]
    UnknownPlayerReference { ids: Vec<PlayerId> },

    /// The assignment's aggregate cost is over the credit ceiling.
    #[error("Budget exceeded. Total: {total}/100")]
    BudgetExceeded { total: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = RosterError::IncompleteRoster { missing: 2 };
        assert_eq!(err.to_string(), "2 positions must be filled");

        let err = RosterError::BudgetExceeded { total: 105 };
        assert_eq!(err.to_string(), "Budget exceeded. Total: 105/100");

        let err = RosterError::UnknownPlayerReference {
            ids: vec![PlayerId::new("ghost1"), PlayerId::new("ghost2")],
        };
        assert_eq!(err.to_string(), "Unknown player reference: ghost1, ghost2");
    }
}
