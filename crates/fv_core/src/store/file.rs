use super::error::StoreError;
use super::format::{decompress_and_deserialize, serialize_and_compress, RosterBook};
use super::RosterStore;
use crate::models::{OwnerId, StoredRoster};

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed roster store.
///
/// The whole book lives in memory behind a mutex; every upsert rewrites
/// the file through a temp-file-and-rename cycle, so a crash leaves either
/// the previous book or the new one on disk, never a torn write. The
/// in-memory book only advances once the write has landed.
pub struct FileRosterStore {
    path: PathBuf,
    book: Mutex<RosterBook>,
}

impl FileRosterStore {
    /// Open a store at `path`, loading the existing book if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let book = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            RosterBook::new()
        };

        log::info!("Opened roster store at {:?} ({} rosters)", path, book.rosters.len());
        Ok(Self { path, book: Mutex::new(book) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roster_count(&self) -> usize {
        self.book.lock().unwrap().rosters.len()
    }

    fn load_from_path(path: &Path) -> Result<RosterBook, StoreError> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let book = decompress_and_deserialize(&data)?;

        log::debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(book)
    }

    fn save_to_path(path: &Path, book: &RosterBook) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = serialize_and_compress(book)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }
}

impl RosterStore for FileRosterStore {
    fn get(&self, owner: &OwnerId) -> Result<Option<StoredRoster>, StoreError> {
        Ok(self.book.lock().unwrap().rosters.get(owner).cloned())
    }

    fn upsert(&self, roster: StoredRoster) -> Result<(), StoreError> {
        let owner = roster.owner.clone();
        let mut book = self.book.lock().unwrap();

        let mut next = book.clone();
        next.rosters.insert(owner.clone(), roster);
        next.touch();

        Self::save_to_path(&self.path, &next)?;
        *book = next;

        log::info!("Roster saved for owner {}", owner);
        Ok(())
    }
}
