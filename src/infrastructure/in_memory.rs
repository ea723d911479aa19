use crate::domain::ports::LedgerStore;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory ledger slot.
///
/// Uses `Arc<RwLock<Vec<Transaction>>>` so clones share the same blob. Ideal
/// for tests and ephemeral sessions where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryLedgerStore {
    ledger: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryLedgerStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn load(&self) -> Result<Vec<Transaction>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.clone())
    }

    async fn save(&self, ledger: &[Transaction]) -> Result<()> {
        let mut slot = self.ledger.write().await;
        *slot = ledger.to_vec();
        Ok(())
    }
}
