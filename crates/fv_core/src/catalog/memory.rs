use super::{CatalogError, PlayerCatalog, PlayerFilter, SortKey, MAX_BROWSE_RESULTS};
use crate::models::{Player, PlayerId};
use std::collections::HashMap;

/// In-memory player catalog.
///
/// Backs the file loader and doubles as the catalog implementation for
/// tests. Records are immutable once loaded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    players: HashMap<PlayerId, Player>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from player records, rejecting duplicate ids.
    pub fn from_players(
        players: impl IntoIterator<Item = Player>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for player in players {
            let id = player.id.clone();
            if map.insert(id.clone(), player).is_some() {
                return Err(CatalogError::DuplicateId(id));
            }
        }
        Ok(Self { players: map })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }
}

impl PlayerCatalog for InMemoryCatalog {
    fn fetch_by_ids(&self, ids: &[PlayerId]) -> Result<Vec<Player>, CatalogError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.players.get(id).cloned())
            .collect())
    }

    fn fetch_by_filter(&self, filter: &PlayerFilter) -> Result<Vec<Player>, CatalogError> {
        let needle = filter.search.as_ref().map(|s| s.to_lowercase());

        let mut hits: Vec<Player> = self
            .players
            .values()
            .filter(|player| {
                filter
                    .position
                    .map_or(true, |position| player.position == position)
            })
            .filter(|player| {
                needle
                    .as_ref()
                    .map_or(true, |needle| player.name.to_lowercase().contains(needle))
            })
            .cloned()
            .collect();

        match filter.sort_by {
            SortKey::Name => hits.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))),
            SortKey::CreditCost => hits.sort_by(|a, b| {
                a.credit_cost
                    .cmp(&b.credit_cost)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }

        hits.truncate(MAX_BROWSE_RESULTS);
        Ok(hits)
    }
}
