//! redb-backed slot storage
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `slots` | slot key | JSON bytes | One row per store collection |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: once `commit()`
//! returns the row survives power loss.

use super::{Slot, SlotStorage, StorageResult};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table for slots: key = slot key, value = JSON-serialized collection
const SLOTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("slots");

#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStorage").field("db", &"<Database>").finish()
    }
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // 建表，保证之后的读事务能打开
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl SlotStorage for RedbStorage {
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        let value = table.get(slot.key())?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    fn write(&self, slot: Slot, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(slot.key(), bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_roundtrip() {
        let storage = RedbStorage::open_in_memory().unwrap();
        assert_eq!(storage.read(Slot::Listings).unwrap(), None);

        storage.write(Slot::Listings, br#"[{"id":"1"}]"#).unwrap();
        storage.write(Slot::Listings, b"[]").unwrap();

        assert_eq!(storage.read(Slot::Listings).unwrap(), Some(b"[]".to_vec()));
        assert_eq!(storage.read(Slot::Transactions).unwrap(), None);
    }

    #[test]
    fn test_reopen_file_keeps_slots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("market.redb");
        {
            let storage = RedbStorage::open(&path).unwrap();
            storage.write(Slot::Transactions, b"[1,2]").unwrap();
        }
        let storage = RedbStorage::open(&path).unwrap();
        assert_eq!(
            storage.read(Slot::Transactions).unwrap(),
            Some(b"[1,2]".to_vec())
        );
    }
}
