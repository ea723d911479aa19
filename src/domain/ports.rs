use super::transaction::{Transaction, TxId};
use crate::error::Result;
use async_trait::async_trait;

/// The single persisted key-value slot holding the whole ledger.
///
/// `load` and `save` are the entire contract: mutations are expressed by the
/// caller as read-modify-write over the full sequence. Single-writer access is
/// assumed; implementations do not need any locking discipline.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Returns the persisted ledger, or an empty one when no blob exists yet.
    async fn load(&self) -> Result<Vec<Transaction>>;
    /// Replaces the entire persisted blob. No partial write may be observable.
    async fn save(&self, ledger: &[Transaction]) -> Result<()>;
}

/// Produces unique opaque ids, namespaced per entity kind.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> TxId;
}

pub type LedgerStoreBox = Box<dyn LedgerStore>;
pub type IdGeneratorBox = Box<dyn IdGenerator>;
