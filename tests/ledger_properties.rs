use partner_ledger::application::aggregate::{net_balance, partner_balances, totals};
use partner_ledger::application::filter::filter;
use partner_ledger::application::session::LedgerSession;
use partner_ledger::domain::transaction::{Direction, Transaction, TransactionDraft};
use partner_ledger::infrastructure::id::UuidIdGenerator;
use partner_ledger::infrastructure::json_file::JsonFileStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn draft(partner: &str, direction: Direction, amount: &str, description: &str) -> TransactionDraft {
    TransactionDraft {
        partner_name: partner.to_string(),
        direction,
        amount: amount.to_string(),
        date: "2024-01-15".to_string(),
        description: description.to_string(),
    }
}

async fn build_ledger(session: &mut LedgerSession, entries: usize) -> Vec<Transaction> {
    let partners = ["Ram", "Shyam", "Hari", "Gita"];
    let mut ledger = Vec::new();
    for i in 1..=entries {
        let direction = if i % 3 == 0 {
            Direction::Given
        } else {
            Direction::Received
        };
        let candidate = draft(
            partners[i % partners.len()],
            direction,
            &format!("{}.25", i * 10),
            &format!("entry {i}"),
        );
        ledger = session.submit(&candidate).await.unwrap();
    }
    ledger
}

fn session_in(dir: &std::path::Path) -> LedgerSession {
    LedgerSession::new(
        Box::new(JsonFileStore::new(dir.join("ledger.json"))),
        Box::new(UuidIdGenerator),
    )
}

#[tokio::test]
async fn test_totals_partition_every_ledger() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());
    let ledger = build_ledger(&mut session, 50).await;

    let totals = totals(&ledger);
    let whole: Decimal = ledger.iter().map(|tx| tx.amount.value()).sum();
    assert_eq!(totals.received + totals.given, whole);
    assert_eq!(net_balance(&ledger), totals.received - totals.given);

    // Per-partner buckets partition the same sum
    let balances = partner_balances(&ledger);
    let bucketed: Decimal = balances.values().map(|b| b.received + b.given).sum();
    assert_eq!(bucketed, whole);
}

#[tokio::test]
async fn test_filter_identity_and_idempotence() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());
    let ledger = build_ledger(&mut session, 20).await;

    let all: Vec<Transaction> = filter(&ledger, "").into_iter().cloned().collect();
    assert_eq!(all, ledger);

    let once: Vec<Transaction> = filter(&ledger, "ram").into_iter().cloned().collect();
    let twice: Vec<Transaction> = filter(&once, "ram").into_iter().cloned().collect();
    assert_eq!(once, twice);
    assert!(!once.is_empty());
}

#[tokio::test]
async fn test_two_partner_scenario_through_the_store() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .submit(&draft("Ram", Direction::Received, "5000", "Loan repayment"))
        .await
        .unwrap();
    let ledger = session
        .submit(&draft("Ram", Direction::Given, "6000", "Stock advance"))
        .await
        .unwrap();

    let balances = partner_balances(&ledger);
    let ram = &balances["Ram"];
    assert_eq!(ram.received, dec!(5000));
    assert_eq!(ram.given, dec!(6000));
    assert_eq!(ram.net(), dec!(-1000));
    assert_eq!(net_balance(&ledger), dec!(-1000));

    // A fresh session over the same blob sees the same ledger
    let reopened = session_in(dir.path());
    assert_eq!(reopened.ledger().await.unwrap(), ledger);
}
