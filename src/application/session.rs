use crate::domain::ports::{IdGeneratorBox, LedgerStoreBox};
use crate::domain::transaction::{Transaction, TransactionDraft, TxId};
use crate::domain::validation::{ValidatedTransaction, validate};
use crate::error::{LedgerError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Whether a submitted draft creates a new record or overwrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(TxId),
}

/// Single-use handle for a pending edit or delete confirmation.
///
/// The session hands one out on `request_*` and the surrounding UI decides how
/// to obtain confirmation before calling `confirm_*` or `cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfirmToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKind {
    Edit,
    Delete,
}

#[derive(Debug, Clone)]
struct PendingAction {
    kind: PendingKind,
    id: TxId,
}

/// A single-actor editing session over the ledger.
///
/// Owns the storage port and an id generator. Every mutation is a full
/// read-modify-write over the persisted sequence and returns the fresh
/// snapshot, so callers explicitly recompute derived views from it. The
/// session also tracks the create/edit mode and outstanding confirmations.
pub struct LedgerSession {
    store: LedgerStoreBox,
    ids: IdGeneratorBox,
    editing: Option<TxId>,
    pending: HashMap<ConfirmToken, PendingAction>,
    next_token: u64,
}

impl LedgerSession {
    pub fn new(store: LedgerStoreBox, ids: IdGeneratorBox) -> Self {
        Self {
            store,
            ids,
            editing: None,
            pending: HashMap::new(),
            next_token: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.editing {
            Some(id) => Mode::Edit(id.clone()),
            None => Mode::Create,
        }
    }

    /// Current persisted snapshot.
    pub async fn ledger(&self) -> Result<Vec<Transaction>> {
        self.store.load().await
    }

    /// Validates and commits a draft.
    ///
    /// In create mode the record is appended under a fresh id; in edit mode it
    /// overwrites every field of the record being edited, keeping its id. A
    /// successful edit submit returns the session to create mode. Validation
    /// failure leaves the ledger and the session untouched.
    pub async fn submit(&mut self, draft: &TransactionDraft) -> Result<Vec<Transaction>> {
        let validated = validate(draft).map_err(LedgerError::Validation)?;
        let mut ledger = self.store.load().await?;

        match self.editing.take() {
            Some(id) => {
                let Some(slot) = ledger.iter_mut().find(|tx| tx.id == id) else {
                    return Err(LedgerError::UnknownId(id));
                };
                *slot = build(id.clone(), validated);
                debug!(%id, "replaced transaction");
            }
            None => {
                let id = self.ids.next_id();
                debug!(%id, "appended transaction");
                ledger.push(build(id, validated));
            }
        }

        self.store.save(&ledger).await?;
        Ok(ledger)
    }

    /// Starts a two-phase edit; the token must be confirmed before the edit
    /// session actually opens.
    pub async fn request_edit(&mut self, id: &TxId) -> Result<ConfirmToken> {
        self.request(PendingKind::Edit, id).await
    }

    /// Starts a two-phase delete.
    pub async fn request_delete(&mut self, id: &TxId) -> Result<ConfirmToken> {
        self.request(PendingKind::Delete, id).await
    }

    async fn request(&mut self, kind: PendingKind, id: &TxId) -> Result<ConfirmToken> {
        let ledger = self.store.load().await?;
        if !ledger.iter().any(|tx| tx.id == *id) {
            return Err(LedgerError::UnknownId(id.clone()));
        }
        let token = ConfirmToken(self.next_token);
        self.next_token += 1;
        self.pending.insert(token, PendingAction { kind, id: id.clone() });
        Ok(token)
    }

    /// Opens the edit session for the confirmed record and returns it so the
    /// surrounding form can prefill its fields.
    pub async fn confirm_edit(&mut self, token: ConfirmToken) -> Result<Transaction> {
        let id = self.spend(token, PendingKind::Edit)?;
        let ledger = self.store.load().await?;
        let Some(tx) = ledger.into_iter().find(|tx| tx.id == id) else {
            return Err(LedgerError::UnknownId(id));
        };
        self.editing = Some(id);
        Ok(tx)
    }

    /// Removes the confirmed record and returns the fresh snapshot.
    ///
    /// Deleting the record currently being edited cancels the edit session,
    /// returning the form to create mode.
    pub async fn confirm_delete(&mut self, token: ConfirmToken) -> Result<Vec<Transaction>> {
        let id = self.spend(token, PendingKind::Delete)?;
        let mut ledger = self.store.load().await?;
        let Some(position) = ledger.iter().position(|tx| tx.id == id) else {
            return Err(LedgerError::UnknownId(id));
        };
        ledger.remove(position);
        if self.editing == Some(id.clone()) {
            self.editing = None;
        }
        self.store.save(&ledger).await?;
        debug!(%id, "deleted transaction");
        Ok(ledger)
    }

    /// Drops a pending confirmation without mutating anything.
    pub fn cancel(&mut self, token: ConfirmToken) -> Result<()> {
        self.pending
            .remove(&token)
            .map(|_| ())
            .ok_or(LedgerError::UnknownToken)
    }

    /// Leaves edit mode without committing.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    fn spend(&mut self, token: ConfirmToken, kind: PendingKind) -> Result<TxId> {
        match self.pending.remove(&token) {
            Some(action) if action.kind == kind => Ok(action.id),
            _ => Err(LedgerError::UnknownToken),
        }
    }
}

fn build(id: TxId, validated: ValidatedTransaction) -> Transaction {
    Transaction {
        id,
        partner_name: validated.partner_name,
        direction: validated.direction,
        amount: validated.amount,
        date: validated.date,
        description: validated.description,
    }
}
