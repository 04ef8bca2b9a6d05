//! Slot-based persistence for the marketplace stores
//!
//! Each store owns one slot holding its whole collection as a JSON array.
//! Slots are independent: there is no cross-slot transaction.
//!
//! | Slot | Key | Value |
//! |------|-----|-------|
//! | [`Slot::Listings`] | `listings` | `Vec<Listing>` as JSON |
//! | [`Slot::Transactions`] | `transactions` | `Vec<Transaction>` as JSON |
//!
//! # Backends
//!
//! - [`MemoryStorage`]: process-local, used by tests and `memory` mode
//! - [`JsonFileStorage`]: one `<slot>.json` file per slot
//! - [`RedbStorage`]: one `slots` table in an embedded redb database

pub mod json_file;
pub mod memory;
pub mod redb_store;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use redb_store::RedbStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{ErrorCode, Listing, Transaction};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// redb database file name inside the data directory
pub const REDB_FILE_NAME: &str = "marketplace.redb";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StorageError::Serialization(_) => ErrorCode::StorageCorrupted,
            _ => ErrorCode::StorageError,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Named persistence slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Listings,
    Transactions,
}

impl Slot {
    pub const fn key(&self) -> &'static str {
        match self {
            Slot::Listings => "listings",
            Slot::Transactions => "transactions",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw byte storage addressed by slot
pub trait SlotStorage: Send + Sync {
    /// Stored bytes, `None` when the slot was never written
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the slot contents
    fn write(&self, slot: Slot, bytes: &[u8]) -> StorageResult<()>;
}

/// Which backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Json,
    Redb,
    Memory,
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "redb" => Ok(StorageKind::Redb),
            "memory" => Ok(StorageKind::Memory),
            other => Err(format!("unknown storage kind: {other}")),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageKind::Json => "json",
            StorageKind::Redb => "redb",
            StorageKind::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// Typed access to the two slots
#[derive(Clone)]
pub struct Repository {
    backend: Arc<dyn SlotStorage>,
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("backend", &"<SlotStorage>")
            .finish()
    }
}

impl Repository {
    pub fn new(backend: Arc<dyn SlotStorage>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Open the configured backend under `data_dir`
    pub fn open(kind: StorageKind, data_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let data_dir = data_dir.as_ref();
        let backend: Arc<dyn SlotStorage> = match kind {
            StorageKind::Memory => Arc::new(MemoryStorage::new()),
            StorageKind::Json => Arc::new(JsonFileStorage::open(data_dir)?),
            StorageKind::Redb => {
                std::fs::create_dir_all(data_dir)?;
                Arc::new(RedbStorage::open(data_dir.join(REDB_FILE_NAME))?)
            }
        };
        tracing::debug!(kind = %kind, data_dir = %data_dir.display(), "Repository opened");
        Ok(Self::new(backend))
    }

    pub fn load_listings(&self) -> StorageResult<Option<Vec<Listing>>> {
        self.load(Slot::Listings)
    }

    pub fn save_listings(&self, listings: &[Listing]) -> StorageResult<()> {
        self.save(Slot::Listings, listings)
    }

    pub fn load_transactions(&self) -> StorageResult<Option<Vec<Transaction>>> {
        self.load(Slot::Transactions)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> StorageResult<()> {
        self.save(Slot::Transactions, transactions)
    }

    fn load<T: DeserializeOwned>(&self, slot: Slot) -> StorageResult<Option<Vec<T>>> {
        match self.backend.read(slot)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, slot: Slot, records: &[T]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(records)?;
        self.backend.write(slot, &bytes)
    }
}
