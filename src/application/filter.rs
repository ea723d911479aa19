use crate::domain::transaction::Transaction;

/// Search-matched subsequence of the ledger, original order preserved.
///
/// A transaction matches when `term` is empty or appears case-insensitively
/// inside its partner name or description. An empty term returns the full
/// ledger unchanged.
pub fn filter<'a>(ledger: &'a [Transaction], term: &str) -> Vec<&'a Transaction> {
    if term.is_empty() {
        return ledger.iter().collect();
    }
    let needle = term.to_lowercase();
    ledger
        .iter()
        .filter(|tx| {
            tx.partner_name.to_lowercase().contains(&needle)
                || tx.description.to_lowercase().contains(&needle)
        })
        .collect()
}
