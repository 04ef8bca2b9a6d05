//! JSON file per slot
//!
//! ```text
//! <data_dir>/
//! ├── listings.json
//! └── transactions.json
//! ```
//!
//! Writes go to `<slot>.json.tmp` first and are renamed over the target, so a
//! crash mid-write leaves the previous file intact.

use super::{Slot, SlotStorage, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Use `dir` as the data directory, creating it if needed
    pub fn open(dir: impl AsRef<Path>) -> StorageResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl SlotStorage for JsonFileStorage {
    fn read(&self, slot: Slot) -> StorageResult<Option<Vec<u8>>> {
        match fs::read(self.slot_path(slot)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, slot: Slot, bytes: &[u8]) -> StorageResult<()> {
        let target = self.slot_path(slot);
        let tmp = target.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }
}
