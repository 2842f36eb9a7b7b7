// Roster persistence: MessagePack + LZ4 with versioning and integrity checks.

pub mod error;
pub mod file;
pub mod format;
pub mod memory;

pub use error::StoreError;
pub use file::FileRosterStore;
pub use format::{decompress_and_deserialize, serialize_and_compress, RosterBook};
pub use memory::InMemoryRosterStore;

use crate::models::{OwnerId, StoredRoster};

pub const STORE_VERSION: u32 = 1;

/// Persistence capability for roster rows.
///
/// `upsert` replaces every field of the row for its owner in one step: a
/// concurrent reader sees either the old row or the new one, never a mix.
/// Writes for different owners are independent, and the last write for an
/// owner wins in full.
pub trait RosterStore: Send + Sync {
    /// Fetch the stored roster for `owner`, if one was ever saved.
    fn get(&self, owner: &OwnerId) -> Result<Option<StoredRoster>, StoreError>;

    /// Insert or fully replace the roster row keyed by `roster.owner`.
    fn upsert(&self, roster: StoredRoster) -> Result<(), StoreError>;
}
