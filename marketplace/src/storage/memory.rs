//! In-process slot storage

use super::{Slot, SlotStorage, StorageResult};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Slots kept in a map; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<Slot, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.read().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, bytes: &[u8]) -> StorageResult<()> {
        self.slots.write().insert(slot, bytes.to_vec());
        Ok(())
    }
}
