use crate::domain::ports::IdGenerator;
use crate::domain::transaction::TxId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Namespace prefix for transaction ids.
pub const TX_ID_PREFIX: &str = "txn_";

/// Produces opaque, globally unique transaction ids (`txn_<uuid>`).
#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> TxId {
        TxId::new(format!("{TX_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }
}

/// Deterministic counter-based ids (`txn_1`, `txn_2`, ...) for tests.
#[derive(Default)]
pub struct SequenceIdGenerator {
    counter: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> TxId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        TxId::new(format!("{TX_ID_PREFIX}{n}"))
    }
}
