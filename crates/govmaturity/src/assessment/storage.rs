//! Snapshot persistence boundary: two named slots holding JSON-serialized
//! copies of the assessment collection and the organisation record.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// The two persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotSlot {
    Assessments,
    Organisation,
}

impl SnapshotSlot {
    pub const fn key(self) -> &'static str {
        match self {
            SnapshotSlot::Assessments => "assessments",
            SnapshotSlot::Organisation => "organisation",
        }
    }
}

/// Error enumeration for snapshot backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot storage unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction so the lifecycle store can be exercised with test
/// doubles and swapped between in-memory and on-disk backends.
pub trait SnapshotStorage: Send + Sync {
    /// Best-effort read; `Ok(None)` means the slot has never been written.
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError>;
    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for Box<T> {
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(slot)
    }

    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).store(slot, bytes)
    }
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for Arc<T> {
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).load(slot)
    }

    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).store(slot, bytes)
    }
}

/// Process-local backend. Clones share the same slots, which lets tests
/// reopen a "session" against the bytes a previous store instance wrote.
#[derive(Debug, Default, Clone)]
pub struct MemorySnapshotStorage {
    slots: Arc<Mutex<HashMap<&'static str, Vec<u8>>>>,
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError> {
        let guard = self.slots.lock().expect("snapshot mutex poisoned");
        Ok(guard.get(slot.key()).cloned())
    }

    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError> {
        let mut guard = self.slots.lock().expect("snapshot mutex poisoned");
        guard.insert(slot.key(), bytes.to_vec());
        Ok(())
    }
}

/// On-disk backend writing one JSON file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    dir: PathBuf,
}

impl FileSnapshotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, slot: SnapshotSlot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl SnapshotStorage for FileSnapshotStorage {
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(self.slot_path(slot)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(slot), bytes)?;
        Ok(())
    }
}
