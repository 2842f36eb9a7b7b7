use serde::{Deserialize, Serialize};
use std::fmt;

use super::roster::SLOT_COUNT;

/// Opaque player identifier handed out by the catalog.
///
/// The engine never interprets the contents; it only compares ids and
/// stores them as foreign-key-style references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Court position a roster slot is bound to.
///
/// This is a closed set: a roster fills exactly one slot per position and
/// there is no way to extend it at runtime. Wire codes match the catalog
/// data ("S", "OH", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    #[serde(rename = "S")]
    Setter,
    #[serde(rename = "OH")]
    OutsideHitter,
    #[serde(rename = "OPP")]
    OppositeHitter,
    #[serde(rename = "MB")]
    MiddleBlocker,
    #[serde(rename = "L")]
    Libero,
    #[serde(rename = "DS")]
    DefensiveSpecialist,
}

impl Position {
    /// Canonical slot order used everywhere a roster is laid out.
    pub const ALL: [Position; SLOT_COUNT] = [
        Position::Setter,
        Position::OutsideHitter,
        Position::OppositeHitter,
        Position::MiddleBlocker,
        Position::Libero,
        Position::DefensiveSpecialist,
    ];

    /// Slot index in `Position::ALL` order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::Setter => "S",
            Position::OutsideHitter => "OH",
            Position::OppositeHitter => "OPP",
            Position::MiddleBlocker => "MB",
            Position::Libero => "L",
            Position::DefensiveSpecialist => "DS",
        }
    }

    /// Decode from the short codes used in catalog data and browse queries.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "S" => Some(Position::Setter),
            "OH" => Some(Position::OutsideHitter),
            "OPP" => Some(Position::OppositeHitter),
            "MB" => Some(Position::MiddleBlocker),
            "L" => Some(Position::Libero),
            "DS" => Some(Position::DefensiveSpecialist),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-set performance numbers shown on player cards.
///
/// Display payload only; the engine stores and returns these untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub matches: u32,
    pub sets: u32,
    pub kills_per_set: f32,
    pub digs_per_set: f32,
    pub blocks_per_set: f32,
    pub aces_per_set: f32,
}

/// Catalog player record.
///
/// Immutable from the engine's perspective: rosters hold `PlayerId`
/// references and never copy or mutate catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub team_name: String,
    /// Positive credit price counted against the roster budget.
    pub credit_cost: u32,
    pub bio: String,
    #[serde(default)]
    pub image_base64: String,
    pub stats: PlayerStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_wire_codes() {
        let json = serde_json::to_string(&Position::OutsideHitter).unwrap();
        assert_eq!(json, "\"OH\"");

        let parsed: Position = serde_json::from_str("\"DS\"").unwrap();
        assert_eq!(parsed, Position::DefensiveSpecialist);
    }

    #[test]
    fn test_position_from_code() {
        assert_eq!(Position::from_code("opp"), Some(Position::OppositeHitter));
        assert_eq!(Position::from_code("MB"), Some(Position::MiddleBlocker));
        assert_eq!(Position::from_code("GK"), None);
    }

    #[test]
    fn test_position_index_matches_all_order() {
        for (i, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.index(), i);
        }
    }

    #[test]
    fn test_player_wire_field_names() {
        let player = Player {
            id: PlayerId::new("p1"),
            name: "Alex Chen".to_string(),
            jersey_number: 9,
            position: Position::Setter,
            team_name: "Phoenix Fire".to_string(),
            credit_cost: 15,
            bio: String::new(),
            image_base64: String::new(),
            stats: PlayerStats::default(),
        };

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["jerseyNumber"], 9);
        assert_eq!(value["teamName"], "Phoenix Fire");
        assert_eq!(value["creditCost"], 15);
        assert_eq!(value["position"], "S");
    }
}
