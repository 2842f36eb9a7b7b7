use crate::catalog::PlayerCatalog;
use crate::error::RosterError;
use crate::models::{
    CostSummary, OwnerId, Player, PlayerId, Position, RosterAssignment, RosterView, StoredRoster,
    BUDGET, SLOT_COUNT,
};
use crate::store::RosterStore;

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of a successful validation pass: the six resolved players in
/// slot order plus the aggregate cost.
#[derive(Debug, Clone)]
pub struct ValidatedRoster {
    pub players: [Player; SLOT_COUNT],
    pub total_cost: u32,
}

impl ValidatedRoster {
    pub fn remaining(&self) -> u32 {
        BUDGET - self.total_cost
    }

    pub fn player(&self, position: Position) -> &Player {
        &self.players[position.index()]
    }
}

/// Composes, validates and persists one roster per owner.
///
/// Collaborators are injected so hosts can swap catalog and storage
/// implementations, and tests can run against in-memory doubles.
pub struct RosterComposer {
    catalog: Arc<dyn PlayerCatalog>,
    store: Arc<dyn RosterStore>,
}

impl RosterComposer {
    pub fn new(catalog: Arc<dyn PlayerCatalog>, store: Arc<dyn RosterStore>) -> Self {
        Self { catalog, store }
    }

    /// Validate an assignment and price it against the catalog.
    ///
    /// Checks run in order: completeness, id resolution, budget. Nothing is
    /// written; the result is pure over the assignment and catalog state.
    pub fn validate_and_cost(
        &self,
        assignment: &RosterAssignment,
    ) -> Result<ValidatedRoster, RosterError> {
        let mut slot_ids: Vec<&PlayerId> = Vec::with_capacity(SLOT_COUNT);
        for (_, id) in assignment.iter() {
            if let Some(id) = id {
                slot_ids.push(id);
            }
        }

        let missing = SLOT_COUNT - slot_ids.len();
        if missing > 0 {
            return Err(RosterError::IncompleteRoster { missing });
        }

        // Collapse duplicates for the lookup call. The same player may sit
        // in two slots; it still resolves once here and is costed per slot
        // below.
        let mut distinct: Vec<PlayerId> = Vec::with_capacity(SLOT_COUNT);
        for id in &slot_ids {
            if !distinct.contains(*id) {
                distinct.push((*id).clone());
            }
        }

        let resolved = self.catalog.fetch_by_ids(&distinct)?;
        let by_id: HashMap<&PlayerId, &Player> =
            resolved.iter().map(|player| (&player.id, player)).collect();

        // Sum over slots: a player occupying two slots is counted twice.
        let mut unresolved: Vec<PlayerId> = Vec::new();
        let mut total_cost: u32 = 0;
        let mut players: Vec<Player> = Vec::with_capacity(SLOT_COUNT);
        for id in &slot_ids {
            match by_id.get(*id) {
                Some(player) => {
                    total_cost += player.credit_cost;
                    players.push((*player).clone());
                }
                None => {
                    if !unresolved.contains(*id) {
                        unresolved.push((*id).clone());
                    }
                }
            }
        }

        if !unresolved.is_empty() {
            unresolved.sort();
            return Err(RosterError::UnknownPlayerReference { ids: unresolved });
        }

        if total_cost > BUDGET {
            return Err(RosterError::BudgetExceeded { total: total_cost });
        }

        let players: [Player; SLOT_COUNT] = match players.try_into() {
            Ok(players) => players,
            // The loop above pushes exactly one player per slot.
            Err(_) => unreachable!(),
        };

        Ok(ValidatedRoster { players, total_cost })
    }

    /// Validate, price and persist `assignment` as the single roster row
    /// for `owner`, replacing any previous row in full.
    ///
    /// The only mutating operation in the engine.
    pub fn save_roster(
        &self,
        owner: &OwnerId,
        assignment: &RosterAssignment,
    ) -> Result<CostSummary, RosterError> {
        let validated = self.validate_and_cost(assignment)?;

        let summary = CostSummary {
            credits_used: validated.total_cost,
            remaining: validated.remaining(),
        };

        self.store.upsert(StoredRoster {
            owner: owner.clone(),
            slots: assignment.to_slots(),
            credits_used: summary.credits_used,
            remaining: summary.remaining,
            updated_at: Utc::now(),
        })?;

        Ok(summary)
    }

    /// Resolve the stored roster for `owner` into full player records.
    ///
    /// An owner who never saved gets the virtual default view. A stored id
    /// that no longer resolves in the catalog degrades to an empty slot;
    /// `credits_used`/`remaining` come back as stored, never recomputed.
    pub fn load_roster(&self, owner: &OwnerId) -> Result<RosterView, RosterError> {
        let stored = match self.store.get(owner)? {
            Some(stored) => stored,
            None => return Ok(RosterView::empty()),
        };

        let mut wanted: Vec<PlayerId> = Vec::with_capacity(SLOT_COUNT);
        for id in stored.slots.iter().flatten() {
            if !wanted.contains(id) {
                wanted.push(id.clone());
            }
        }

        let resolved = self.catalog.fetch_by_ids(&wanted)?;
        let by_id: HashMap<&PlayerId, &Player> =
            resolved.iter().map(|player| (&player.id, player)).collect();

        let mut view = RosterView::empty();
        for position in Position::ALL {
            view.slots[position.index()] = stored
                .slot(position)
                .and_then(|id| by_id.get(id).map(|player| (*player).clone()));
        }
        view.credits_used = stored.credits_used;
        view.remaining = stored.remaining;

        Ok(view)
    }
}
