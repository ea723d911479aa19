use crate::domain::transaction::{Direction, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Ledger-wide sums, one bucket per direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub received: Decimal,
    pub given: Decimal,
}

impl Totals {
    pub fn net(&self) -> Decimal {
        self.received - self.given
    }
}

/// Received/given buckets for a single partner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartnerBalance {
    pub received: Decimal,
    pub given: Decimal,
}

impl PartnerBalance {
    pub fn net(&self) -> Decimal {
        self.received - self.given
    }
}

/// Sums all amounts by direction in one pass.
pub fn totals(ledger: &[Transaction]) -> Totals {
    ledger.iter().fold(Totals::default(), |mut acc, tx| {
        match tx.direction {
            Direction::Received => acc.received += tx.amount.value(),
            Direction::Given => acc.given += tx.amount.value(),
        }
        acc
    })
}

/// Total received minus total given.
pub fn net_balance(ledger: &[Transaction]) -> Decimal {
    totals(ledger).net()
}

/// Accumulates a received/given bucket per partner name.
///
/// Buckets start at zero on first sighting of a partner; the `BTreeMap` keys
/// double as the sorted distinct-partner set.
pub fn partner_balances(ledger: &[Transaction]) -> BTreeMap<String, PartnerBalance> {
    let mut balances: BTreeMap<String, PartnerBalance> = BTreeMap::new();
    for tx in ledger {
        let bucket = balances.entry(tx.partner_name.clone()).or_default();
        match tx.direction {
            Direction::Received => bucket.received += tx.amount.value(),
            Direction::Given => bucket.given += tx.amount.value(),
        }
    }
    balances
}

/// Net position against one partner, if any transactions mention them.
pub fn per_partner_net(
    balances: &BTreeMap<String, PartnerBalance>,
    name: &str,
) -> Option<Decimal> {
    balances.get(name).map(PartnerBalance::net)
}

/// Every partner name appearing in the ledger, sorted.
pub fn distinct_partners(ledger: &[Transaction]) -> Vec<String> {
    partner_balances(ledger).into_keys().collect()
}
