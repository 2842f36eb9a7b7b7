use super::error::StoreError;
use super::STORE_VERSION;
use crate::models::{OwnerId, StoredRoster};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use chrono::Utc;
use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};

/// Full persisted roster state: one row per owner.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterBook {
    /// Store format version for migration
    pub version: u32,

    /// Last write timestamp (unix milliseconds)
    pub timestamp: u64,

    /// Roster rows keyed by owner id
    pub rosters: HashMap<OwnerId, StoredRoster>,
}

impl Default for RosterBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBook {
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            timestamp: current_timestamp(),
            rosters: HashMap::new(),
        }
    }

    pub fn touch(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        for (owner, roster) in &self.rosters {
            // A row must be keyed by its own owner and its counters must
            // split the full budget.
            if owner != &roster.owner || !roster.is_consistent() {
                return Err(StoreError::Corrupted);
            }
        }
        Ok(())
    }
}

/// Serialize and compress the roster book
pub fn serialize_and_compress(book: &RosterBook) -> Result<Vec<u8>, StoreError> {
    // Validate before serialization
    book.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(book).map_err(StoreError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize a roster book
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<RosterBook, StoreError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(StoreError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(StoreError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| StoreError::Decompression)?;

    // Deserialize
    let book: RosterBook = from_slice(&msgpack).map_err(StoreError::Deserialization)?;

    // Validate version
    if book.version > STORE_VERSION {
        return Err(StoreError::VersionMismatch {
            found: book.version,
            expected: STORE_VERSION,
        });
    }

    book.validate()?;

    Ok(book)
}

pub fn current_timestamp() -> u64 {
    Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerId, Position, BUDGET, SLOT_COUNT};

    fn roster(owner: &str, credits_used: u32) -> StoredRoster {
        let mut slots: [Option<PlayerId>; SLOT_COUNT] = Default::default();
        for position in Position::ALL {
            slots[position.index()] = Some(PlayerId::new(format!("{}-{position}", owner)));
        }
        StoredRoster {
            owner: OwnerId::new(owner),
            slots,
            credits_used,
            remaining: BUDGET - credits_used,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let mut book = RosterBook::new();
        book.rosters.insert(OwnerId::new("u1"), roster("u1", 90));
        book.rosters.insert(OwnerId::new("u2"), roster("u2", 72));

        let serialized = serialize_and_compress(&book).unwrap();
        let deserialized = decompress_and_deserialize(&serialized).unwrap();

        assert_eq!(book.version, deserialized.version);
        assert_eq!(book.rosters.len(), deserialized.rosters.len());
        assert_eq!(
            book.rosters[&OwnerId::new("u1")],
            deserialized.rosters[&OwnerId::new("u1")]
        );
    }

    #[test]
    fn test_checksum_validation() {
        let book = RosterBook::new();
        let mut serialized = serialize_and_compress(&book).unwrap();

        // Corrupt the checksum
        if let Some(last) = serialized.last_mut() {
            *last = last.wrapping_add(1);
        }

        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(result, Err(StoreError::ChecksumMismatch)));
    }

    #[test]
    fn test_future_version_rejected() {
        let mut book = RosterBook::new();
        book.version = STORE_VERSION + 1;

        let serialized = serialize_and_compress(&book).unwrap();
        let result = decompress_and_deserialize(&serialized);
        assert!(matches!(
            result,
            Err(StoreError::VersionMismatch { found, .. }) if found == STORE_VERSION + 1
        ));
    }

    #[test]
    fn test_inconsistent_counters_rejected() {
        let mut book = RosterBook::new();
        let mut row = roster("u1", 90);
        row.remaining = 20;
        book.rosters.insert(OwnerId::new("u1"), row);

        let result = serialize_and_compress(&book);
        assert!(matches!(result, Err(StoreError::Corrupted)));
    }

    #[test]
    fn test_mismatched_owner_key_rejected() {
        let mut book = RosterBook::new();
        book.rosters.insert(OwnerId::new("u2"), roster("u1", 50));

        let result = serialize_and_compress(&book);
        assert!(matches!(result, Err(StoreError::Corrupted)));
    }

    #[test]
    fn test_truncated_data_rejected() {
        let result = decompress_and_deserialize(&[0u8; 10]);
        assert!(matches!(result, Err(StoreError::Corrupted)));
    }
}
