//! Player catalog capability.
//!
//! The catalog is a read-only collaborator: the roster engine resolves
//! player-id references against it and never mutates its records. Hosts
//! inject an implementation; `InMemoryCatalog` covers both tests and the
//! file-loaded deployment shape.

pub mod file;
pub mod memory;

pub use file::{load_catalog, load_catalog_from_env, DEFAULT_PLAYER_CATALOG_REL_PATH, PLAYER_CATALOG_ENV};
pub use memory::InMemoryCatalog;

use crate::models::{Player, PlayerId, Position};
use thiserror::Error;

/// Maximum number of players a browse query returns.
pub const MAX_BROWSE_RESULTS: usize = 100;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate player id: {0}")]
    DuplicateId(PlayerId),
}

/// Sort order for browse queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    CreditCost,
}

/// Browse query over the catalog.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub position: Option<Position>,
    /// Case-insensitive substring match on the player name.
    pub search: Option<String>,
    pub sort_by: SortKey,
}

pub trait PlayerCatalog: Send + Sync {
    /// Resolve a set of ids to player records.
    ///
    /// Unknown ids are silently omitted, so the returned set may be smaller
    /// than the requested one; callers decide whether that is an error.
    fn fetch_by_ids(&self, ids: &[PlayerId]) -> Result<Vec<Player>, CatalogError>;

    /// Browse the catalog. Results are ordered by `filter.sort_by` and
    /// capped at `MAX_BROWSE_RESULTS` entries.
    fn fetch_by_filter(&self, filter: &PlayerFilter) -> Result<Vec<Player>, CatalogError>;
}
