use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{RecordStore, StoreError};
use crate::models::Entry;

/// In-process store. `None` until the first write, mirroring a missing file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Option<Vec<Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already exists and holds `entries`.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Mutex::new(Some(entries)),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(self.entries.lock().await.is_some())
    }

    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.entries.lock().await.clone().unwrap_or_default())
    }

    async fn append(&self, entry: &Entry) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .get_or_insert_with(Vec::new)
            .push(entry.clone());
        Ok(())
    }

    async fn rewrite(&self, entries: &[Entry]) -> Result<(), StoreError> {
        *self.entries.lock().await = Some(entries.to_vec());
        Ok(())
    }
}
