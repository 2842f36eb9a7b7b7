//! # fv_core - Fantasy Volleyball Roster Engine
//!
//! This library implements roster composition and budget validation for a
//! fantasy volleyball game: a roster fills six fixed court positions from a
//! shared player catalog under a 100-credit budget, and every user keeps
//! exactly one saved roster (each save replaces the previous one in full).
//!
//! ## Features
//! - Pure validate-and-cost pass over an injected, read-only player catalog
//! - Upsert persistence: one roster row per owner, last write wins in full
//! - Atomic file-backed store with a checksummed MessagePack + LZ4 format
//! - JSON entry points for easy host integration

pub mod api;
pub mod catalog;
pub mod error;
pub mod models;
pub mod roster;
pub mod store;

// Re-export main API functions
pub use api::{get_player_json, list_players_json, load_roster_json, save_roster_json};

// Re-export the engine and its error taxonomy
pub use error::RosterError;
pub use roster::{RosterComposer, ValidatedRoster};

// Re-export domain types
pub use models::{
    CostSummary, OwnerId, Player, PlayerId, PlayerStats, Position, RosterAssignment, RosterView,
    StoredRoster, BUDGET, SLOT_COUNT,
};

// Re-export collaborator capabilities and their implementations
pub use catalog::{CatalogError, InMemoryCatalog, PlayerCatalog, PlayerFilter, SortKey};
pub use store::{FileRosterStore, InMemoryRosterStore, RosterStore, StoreError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
