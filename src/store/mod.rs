//! Persistence for carbon check entries.
//!
//! The API only talks to [`RecordStore`]. There is no locking around the
//! list-then-write cycles the handlers perform, so concurrent writers can
//! overwrite each other.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::Entry;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// A stored line that is not a valid entry. `line` is 1-based.
    Parse { line: usize, source: serde_json::Error },
    Encode(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O failed: {e}"),
            StoreError::Parse { line, source } => write!(f, "corrupt entry on line {line}: {source}"),
            StoreError::Encode(e) => write!(f, "failed to encode entry: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse { source, .. } => Some(source),
            StoreError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Whether the store has ever been written.
    async fn exists(&self) -> Result<bool, StoreError>;

    /// All entries in insertion order; empty when the store does not exist.
    async fn list(&self) -> Result<Vec<Entry>, StoreError>;

    async fn append(&self, entry: &Entry) -> Result<(), StoreError>;

    /// Replace the whole store with `entries`.
    async fn rewrite(&self, entries: &[Entry]) -> Result<(), StoreError>;
}

/// Encode entries as newline-delimited JSON, one trailing newline per entry.
pub(crate) fn encode_lines(entries: &[Entry]) -> Result<String, StoreError> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry).map_err(StoreError::Encode)?);
        out.push('\n');
    }
    Ok(out)
}

/// Decode newline-delimited JSON, skipping blank lines.
pub(crate) fn decode_lines(content: &str) -> Result<Vec<Entry>, StoreError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| StoreError::Parse { line: i + 1, source })
        })
        .collect()
}
