use govmaturity::assessment::{
    FileSnapshotStorage, MemorySnapshotStorage, SnapshotSlot, SnapshotStorage, StorageError,
};
use govmaturity::config::StorageConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot backend selected at startup from configuration.
#[derive(Debug, Clone)]
pub(crate) enum ApiSnapshotStorage {
    Memory(MemorySnapshotStorage),
    File(FileSnapshotStorage),
}

impl ApiSnapshotStorage {
    pub(crate) fn from_config(config: &StorageConfig) -> Self {
        match &config.data_dir {
            Some(dir) => Self::File(FileSnapshotStorage::new(dir.clone())),
            None => Self::Memory(MemorySnapshotStorage::default()),
        }
    }
}

impl SnapshotStorage for ApiSnapshotStorage {
    fn load(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, StorageError> {
        match self {
            Self::Memory(storage) => storage.load(slot),
            Self::File(storage) => storage.load(slot),
        }
    }

    fn store(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), StorageError> {
        match self {
            Self::Memory(storage) => storage.store(slot, bytes),
            Self::File(storage) => storage.store(slot, bytes),
        }
    }
}
