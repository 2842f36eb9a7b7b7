//! Player catalog loader for JSON catalog exports.
//!
//! Source artifact: `data/players.json` — a JSON array of player records
//! produced by the catalog tooling.

use super::{CatalogError, InMemoryCatalog};
use crate::models::Player;
use std::env;
use std::path::{Path, PathBuf};

/// Env var overriding the catalog file path.
pub const PLAYER_CATALOG_ENV: &str = "FV_PLAYER_CATALOG_PATH";

/// Default relative path used when `FV_PLAYER_CATALOG_PATH` is not set.
pub const DEFAULT_PLAYER_CATALOG_REL_PATH: &str = "data/players.json";

fn resolve_catalog_path() -> PathBuf {
    if let Ok(path) = env::var(PLAYER_CATALOG_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_PLAYER_CATALOG_REL_PATH)
}

/// Load a catalog from the JSON file at `path`.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, CatalogError> {
    let bytes = std::fs::read(path)?;
    let players: Vec<Player> = serde_json::from_slice(&bytes)?;
    let catalog = InMemoryCatalog::from_players(players)?;

    log::info!("Loaded {} players from {:?}", catalog.len(), path);
    Ok(catalog)
}

/// Load a catalog using the env override or the default relative path.
///
/// Resolution order:
/// 1) `FV_PLAYER_CATALOG_PATH` if set and non-empty
/// 2) `data/players.json` (relative)
pub fn load_catalog_from_env() -> Result<InMemoryCatalog, CatalogError> {
    load_catalog(&resolve_catalog_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn catalog_json() -> serde_json::Value {
        json!([
            {
                "id": "p1",
                "name": "Jordan Kim",
                "jerseyNumber": 4,
                "position": "S",
                "teamName": "Thunder Storm",
                "creditCost": 14,
                "bio": "Technical expert with precise ball control.",
                "imageBase64": "",
                "stats": {
                    "matches": 120,
                    "sets": 340,
                    "kills_per_set": 2.4,
                    "digs_per_set": 1.9,
                    "blocks_per_set": 0.7,
                    "aces_per_set": 0.8
                }
            },
            {
                "id": "p2",
                "name": "Alex Chen",
                "jerseyNumber": 11,
                "position": "OH",
                "teamName": "Sky Hawks",
                "creditCost": 21,
                "bio": "A powerful attacker with exceptional court vision.",
                "stats": {
                    "matches": 95,
                    "sets": 310,
                    "kills_per_set": 4.1,
                    "digs_per_set": 2.2,
                    "blocks_per_set": 1.1,
                    "aces_per_set": 1.0
                }
            }
        ])
    }

    #[test]
    fn test_load_catalog_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("players.json");
        fs::write(&path, catalog_json().to_string()).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let player = catalog.get(&"p2".into()).unwrap();
        assert_eq!(player.credit_cost, 21);
        // imageBase64 was omitted for p2 and defaults to empty.
        assert!(player.image_base64.is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_catalog_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("players.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_catalog(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
