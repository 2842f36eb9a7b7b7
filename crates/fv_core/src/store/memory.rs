use super::{RosterStore, StoreError};
use crate::models::{OwnerId, StoredRoster};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory roster store.
///
/// Rows live only as long as the process; the map insert gives the same
/// whole-row replacement semantics as the file store. This is the test
/// double for the engine.
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    rosters: Mutex<HashMap<OwnerId, StoredRoster>>,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster_count(&self) -> usize {
        self.rosters.lock().unwrap().len()
    }
}

impl RosterStore for InMemoryRosterStore {
    fn get(&self, owner: &OwnerId) -> Result<Option<StoredRoster>, StoreError> {
        Ok(self.rosters.lock().unwrap().get(owner).cloned())
    }

    fn upsert(&self, roster: StoredRoster) -> Result<(), StoreError> {
        let mut rosters = self.rosters.lock().unwrap();
        rosters.insert(roster.owner.clone(), roster);
        Ok(())
    }
}
