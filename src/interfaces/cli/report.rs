use crate::application::aggregate::{PartnerBalance, Totals};
use crate::domain::transaction::Transaction;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Display formatting for amounts: thousands grouping, 0 decimal places.
///
/// Presentation only; never fed back into arithmetic.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One line per transaction, in ledger order.
pub fn render_transactions(transactions: &[&Transaction]) -> String {
    let mut out = String::new();
    for tx in transactions {
        let _ = writeln!(
            out,
            "{} | {} | {:<8} | {:>12} | {} | {}",
            tx.id,
            tx.date,
            tx.direction.to_string(),
            format_amount(tx.amount.value()),
            tx.partner_name,
            tx.description
        );
    }
    out
}

/// One line per partner, sorted by name.
pub fn render_balances(balances: &BTreeMap<String, PartnerBalance>) -> String {
    let mut out = String::new();
    for (name, balance) in balances {
        let _ = writeln!(
            out,
            "{name}: received {}, given {}, net {}",
            format_amount(balance.received),
            format_amount(balance.given),
            format_amount(balance.net())
        );
    }
    out
}

pub fn render_totals(totals: &Totals) -> String {
    format!(
        "received: {}\ngiven: {}\nnet: {}\n",
        format_amount(totals.received),
        format_amount(totals.given),
        format_amount(totals.net())
    )
}
