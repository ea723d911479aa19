//! Application layer orchestrating the ledger.
//!
//! `LedgerSession` is the single entry point for mutations: it validates
//! drafts, applies read-modify-write changes through the injected store, and
//! hands every caller a fresh snapshot to recompute derived views from. The
//! derived views themselves live in `aggregate` and `filter` as pure
//! functions over a snapshot.

pub mod aggregate;
pub mod filter;
pub mod session;
