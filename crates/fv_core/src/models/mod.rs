pub mod player;
pub mod roster;

pub use player::{Player, PlayerId, PlayerStats, Position};
pub use roster::{
    CostSummary, OwnerId, RosterAssignment, RosterView, StoredRoster, BUDGET, SLOT_COUNT,
};
