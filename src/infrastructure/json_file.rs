use crate::domain::ports::LedgerStore;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Persistent store backed by a single JSON file.
///
/// The file holds the whole ledger as one JSON array, the on-disk equivalent
/// of a single key-value slot. A missing file reads as an empty ledger; a file
/// that exists but does not parse is a fatal load error, never silently
/// discarded. Saves replace the blob atomically by writing a sibling temp file
/// and renaming it over the target.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Transaction>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                let ledger: Vec<Transaction> = serde_json::from_slice(&bytes)?;
                debug!(path = %self.path.display(), count = ledger.len(), "loaded ledger");
                Ok(ledger)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, ledger: &[Transaction]) -> Result<()> {
        let json = serde_json::to_vec_pretty(ledger)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), count = ledger.len(), "saved ledger");
        Ok(())
    }
}
