//! JSON boundary for host integration.
//!
//! String-in/string-out entry points: the host hands over an already
//! authenticated owner id plus the request payload, and gets back either a
//! response document or a `CODE: message` error string it can map onto its
//! own surface. Wire field names match what the original clients send.

use crate::catalog::{PlayerCatalog, PlayerFilter, SortKey};
use crate::error::RosterError;
use crate::models::{OwnerId, Player, PlayerId, Position, RosterAssignment, RosterView};
use crate::roster::RosterComposer;
use serde::{Deserialize, Serialize};

pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INCOMPLETE_ROSTER: &str = "INCOMPLETE_ROSTER";
    pub const UNKNOWN_PLAYER: &str = "UNKNOWN_PLAYER";
    pub const BUDGET_EXCEEDED: &str = "BUDGET_EXCEEDED";
    pub const PLAYER_NOT_FOUND: &str = "PLAYER_NOT_FOUND";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn map_roster_error(err: &RosterError) -> String {
    let code = match err {
        RosterError::IncompleteRoster { .. } => error_codes::INCOMPLETE_ROSTER,
        RosterError::UnknownPlayerReference { .. } => error_codes::UNKNOWN_PLAYER,
        RosterError::BudgetExceeded { .. } => error_codes::BUDGET_EXCEEDED,
        RosterError::Store(_) => error_codes::STORE_ERROR,
        RosterError::Catalog(_) => error_codes::CATALOG_ERROR,
    };
    err_code(code, err)
}

/// Wire shape of a save request: one optional player id per position.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRosterRequest {
    #[serde(default)]
    pub setter: Option<String>,
    #[serde(default)]
    pub outside_hitter: Option<String>,
    #[serde(default)]
    pub opposite_hitter: Option<String>,
    #[serde(default)]
    pub middle_blocker: Option<String>,
    #[serde(default)]
    pub libero: Option<String>,
    #[serde(default)]
    pub defensive_specialist: Option<String>,
}

impl SaveRosterRequest {
    /// Convert the named wire fields into the closed slot mapping.
    pub fn into_assignment(self) -> RosterAssignment {
        let fields = [
            (Position::Setter, self.setter),
            (Position::OutsideHitter, self.outside_hitter),
            (Position::OppositeHitter, self.opposite_hitter),
            (Position::MiddleBlocker, self.middle_blocker),
            (Position::Libero, self.libero),
            (Position::DefensiveSpecialist, self.defensive_specialist),
        ];

        let mut assignment = RosterAssignment::new();
        for (position, id) in fields {
            if let Some(id) = id {
                assignment.set(position, id);
            }
        }
        assignment
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRosterResponse {
    pub message: String,
    pub credits_used: u32,
    pub remaining: u32,
}

/// Resolved roster document: one full player record (or null) per slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterViewResponse {
    pub setter: Option<Player>,
    pub outside_hitter: Option<Player>,
    pub opposite_hitter: Option<Player>,
    pub middle_blocker: Option<Player>,
    pub libero: Option<Player>,
    pub defensive_specialist: Option<Player>,
    pub credits_used: u32,
    pub remaining: u32,
}

impl From<RosterView> for RosterViewResponse {
    fn from(view: RosterView) -> Self {
        let RosterView { slots, credits_used, remaining } = view;
        // Destructure in Position::ALL order.
        let [setter, outside_hitter, opposite_hitter, middle_blocker, libero, defensive_specialist] =
            slots;

        Self {
            setter,
            outside_hitter,
            opposite_hitter,
            middle_blocker,
            libero,
            defensive_specialist,
            credits_used,
            remaining,
        }
    }
}

/// Validate and save the caller's roster.
///
/// `owner_id` must already be authenticated by the host; the engine only
/// keys storage by it.
pub fn save_roster_json(
    composer: &RosterComposer,
    owner_id: &str,
    request_json: &str,
) -> Result<String, String> {
    let request: SaveRosterRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::BAD_REQUEST, e))?;

    let summary = composer
        .save_roster(&OwnerId::new(owner_id), &request.into_assignment())
        .map_err(|e| map_roster_error(&e))?;

    let response = SaveRosterResponse {
        message: "Roster saved successfully".to_string(),
        credits_used: summary.credits_used,
        remaining: summary.remaining,
    };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::INTERNAL, e))
}

/// Load the caller's roster with full player detail.
///
/// Never fails for an empty or partially resolvable roster; only transport
/// failures from the collaborators surface as errors.
pub fn load_roster_json(composer: &RosterComposer, owner_id: &str) -> Result<String, String> {
    let view = composer
        .load_roster(&OwnerId::new(owner_id))
        .map_err(|e| map_roster_error(&e))?;

    let response = RosterViewResponse::from(view);
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::INTERNAL, e))
}

/// Browse query wire shape (`position`, `search`, `sortBy`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuery {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl PlayerQuery {
    fn into_filter(self) -> Result<PlayerFilter, String> {
        let position = match self.position.as_deref() {
            Some(code) => Some(Position::from_code(code).ok_or_else(|| {
                err_code(
                    error_codes::BAD_REQUEST,
                    format!("unknown position code '{code}'"),
                )
            })?),
            None => None,
        };

        // Unknown sort keys fall back to name ordering.
        let sort_by = match self.sort_by.as_deref() {
            Some("creditCost") => SortKey::CreditCost,
            _ => SortKey::Name,
        };

        Ok(PlayerFilter { position, search: self.search, sort_by })
    }
}

/// Browse the player catalog. An empty `query_json` lists everything in
/// name order.
pub fn list_players_json(catalog: &dyn PlayerCatalog, query_json: &str) -> Result<String, String> {
    let query: PlayerQuery = if query_json.trim().is_empty() {
        PlayerQuery::default()
    } else {
        serde_json::from_str(query_json).map_err(|e| err_code(error_codes::BAD_REQUEST, e))?
    };

    let players = catalog
        .fetch_by_filter(&query.into_filter()?)
        .map_err(|e| err_code(error_codes::CATALOG_ERROR, e))?;

    serde_json::to_string(&players).map_err(|e| err_code(error_codes::INTERNAL, e))
}

/// Fetch a single player by id. Unlike roster loading, an unknown id here
/// is a real error.
pub fn get_player_json(catalog: &dyn PlayerCatalog, player_id: &str) -> Result<String, String> {
    let ids = [PlayerId::new(player_id)];
    let players = catalog
        .fetch_by_ids(&ids)
        .map_err(|e| err_code(error_codes::CATALOG_ERROR, e))?;

    let player = players.into_iter().next().ok_or_else(|| {
        err_code(
            error_codes::PLAYER_NOT_FOUND,
            format!("Player not found: {player_id}"),
        )
    })?;

    serde_json::to_string(&player).map_err(|e| err_code(error_codes::INTERNAL, e))
}
