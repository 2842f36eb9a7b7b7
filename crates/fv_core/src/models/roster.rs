use super::player::{Player, PlayerId, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credit ceiling a roster's aggregate cost must not exceed.
pub const BUDGET: u32 = 100;

/// Number of positional slots a complete roster fills.
pub const SLOT_COUNT: usize = 6;

/// Stable identity of an authenticated user.
///
/// Verification happens upstream; the roster engine only keys storage by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Candidate slot-to-player mapping submitted for validation.
///
/// A fixed array indexed by `Position::index`, so slot handling stays
/// exhaustive over the closed position set instead of six independently
/// named optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterAssignment {
    slots: [Option<PlayerId>; SLOT_COUNT],
}

impl RosterAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style slot assignment.
    pub fn with(mut self, position: Position, id: impl Into<PlayerId>) -> Self {
        self.set(position, id);
        self
    }

    pub fn set(&mut self, position: Position, id: impl Into<PlayerId>) {
        self.slots[position.index()] = Some(id.into());
    }

    pub fn clear(&mut self, position: Position) {
        self.slots[position.index()] = None;
    }

    pub fn get(&self, position: Position) -> Option<&PlayerId> {
        self.slots[position.index()].as_ref()
    }

    /// Slots in canonical order, paired with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&PlayerId>)> {
        Position::ALL
            .into_iter()
            .map(move |position| (position, self.get(position)))
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn missing_count(&self) -> usize {
        SLOT_COUNT - self.filled_count()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Copy of the raw slot array, for building a `StoredRoster`.
    pub fn to_slots(&self) -> [Option<PlayerId>; SLOT_COUNT] {
        self.slots.clone()
    }
}

/// Persisted roster row. At most one exists per owner; every successful
/// save replaces the whole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRoster {
    pub owner: OwnerId,
    pub slots: [Option<PlayerId>; SLOT_COUNT],
    /// Aggregate credit cost at the time of the last successful save.
    pub credits_used: u32,
    pub remaining: u32,
    pub updated_at: DateTime<Utc>,
}

impl StoredRoster {
    pub fn slot(&self, position: Position) -> Option<&PlayerId> {
        self.slots[position.index()].as_ref()
    }

    /// Storage invariant: the two counters always split the full budget.
    pub fn is_consistent(&self) -> bool {
        self.credits_used + self.remaining == BUDGET
    }
}

/// Outcome summary of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    pub credits_used: u32,
    pub remaining: u32,
}

/// Fully resolved roster for display: one player record per filled slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterView {
    pub slots: [Option<Player>; SLOT_COUNT],
    pub credits_used: u32,
    pub remaining: u32,
}

impl RosterView {
    /// Virtual default for owners who never saved: all slots empty, full
    /// budget available.
    pub fn empty() -> Self {
        Self {
            slots: Default::default(),
            credits_used: 0,
            remaining: BUDGET,
        }
    }

    pub fn slot(&self, position: Position) -> Option<&Player> {
        self.slots[position.index()].as_ref()
    }
}

impl Default for RosterView {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_counts() {
        let mut assignment = RosterAssignment::new();
        assert_eq!(assignment.filled_count(), 0);
        assert_eq!(assignment.missing_count(), SLOT_COUNT);
        assert!(!assignment.is_complete());

        assignment.set(Position::Setter, "S1");
        assignment.set(Position::Libero, "L1");
        assert_eq!(assignment.filled_count(), 2);
        assert_eq!(assignment.missing_count(), 4);

        assignment.clear(Position::Setter);
        assert_eq!(assignment.filled_count(), 1);
    }

    #[test]
    fn test_assignment_iter_order() {
        let assignment = RosterAssignment::new()
            .with(Position::Setter, "S1")
            .with(Position::DefensiveSpecialist, "DS1");

        let positions: Vec<Position> = assignment.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, Position::ALL.to_vec());

        assert_eq!(assignment.get(Position::Setter), Some(&PlayerId::new("S1")));
        assert_eq!(assignment.get(Position::Libero), None);
    }

    #[test]
    fn test_empty_view_has_full_budget() {
        let view = RosterView::empty();
        assert_eq!(view.credits_used, 0);
        assert_eq!(view.remaining, BUDGET);
        assert!(view.slots.iter().all(|slot| slot.is_none()));
    }

    #[test]
    fn test_stored_roster_consistency() {
        let roster = StoredRoster {
            owner: OwnerId::new("u1"),
            slots: Default::default(),
            credits_used: 90,
            remaining: 10,
            updated_at: Utc::now(),
        };
        assert!(roster.is_consistent());

        let torn = StoredRoster { remaining: 20, ..roster };
        assert!(!torn.is_consistent());
    }
}
