use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use super::{decode_lines, encode_lines, RecordStore, StoreError};
use crate::models::Entry;

/// Newline-delimited JSON file, one entry per line.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn exists(&self) -> Result<bool, StoreError> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }

    async fn list(&self) -> Result<Vec<Entry>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        decode_lines(&content)
    }

    async fn append(&self, entry: &Entry) -> Result<(), StoreError> {
        self.ensure_parent().await?;
        let line = encode_lines(std::slice::from_ref(entry))?;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn rewrite(&self, entries: &[Entry]) -> Result<(), StoreError> {
        self.ensure_parent().await?;
        tokio::fs::write(&self.path, encode_lines(entries)?).await?;
        Ok(())
    }
}
