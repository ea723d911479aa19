use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;
use common::{add, add_returning_id, ledger_cmd};

#[test]
fn test_ledger_survives_across_runs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let ledger = dir.path().join("ledger.json");

    // Two separate process invocations against the same blob
    add(&ledger, "Ram", "received", "100", "first run");
    add(&ledger, "Ram", "received", "50", "second run");

    ledger_cmd(&ledger)
        .arg("totals")
        .assert()
        .success()
        .stdout(predicate::str::contains("received: 150"));

    // The blob itself is the documented wire shape
    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&ledger)?)?;
    assert_eq!(raw.as_array().map(Vec::len), Some(2));
    assert_eq!(raw[0]["partnerName"], "Ram");
    assert_eq!(raw[0]["type"], "received");
    assert_eq!(raw[0]["amount"], 100.0);
    assert_eq!(raw[0]["date"], "2024-01-15");

    Ok(())
}

#[test]
fn test_malformed_blob_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let ledger = dir.path().join("ledger.json");
    std::fs::write(&ledger, "{ not a ledger")?;

    ledger_cmd(&ledger)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));

    // The broken blob is left in place, not silently replaced
    assert_eq!(std::fs::read_to_string(&ledger)?, "{ not a ledger");

    Ok(())
}

#[test]
fn test_edit_overwrites_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let ledger = dir.path().join("ledger.json");

    let id = add_returning_id(&ledger, "Ram", "received", "5000", "Loan repayment");
    add(&ledger, "Shyam", "given", "250", "Office supplies");

    ledger_cmd(&ledger)
        .args(["edit", &id, "--partner", "Hari", "--direction", "given"])
        .args(["--amount", "9000", "--date", "2024-02-01"])
        .args(["--description", "Corrected entry"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("updated {id}")));

    // Same id, same ledger length, every other field replaced
    let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&ledger)?)?;
    assert_eq!(raw.as_array().map(Vec::len), Some(2));
    assert_eq!(raw[0]["id"], id.as_str());
    assert_eq!(raw[0]["partnerName"], "Hari");
    assert_eq!(raw[0]["type"], "given");
    assert_eq!(raw[0]["amount"], 9000.0);
    assert_eq!(raw[0]["date"], "2024-02-01");

    Ok(())
}

#[test]
fn test_delete_confirmation_flow() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let ledger = dir.path().join("ledger.json");

    let id = add_returning_id(&ledger, "Ram", "received", "5000", "Loan repayment");
    add(&ledger, "Shyam", "given", "250", "Office supplies");

    // Answering "n" at the prompt cancels the pending delete
    ledger_cmd(&ledger)
        .args(["delete", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cancelled"));

    ledger_cmd(&ledger)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan repayment"));

    // --yes confirms immediately and removes exactly that record
    ledger_cmd(&ledger)
        .args(["delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("deleted {id}")));

    ledger_cmd(&ledger)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loan repayment").not())
        .stdout(predicate::str::contains("Office supplies"));

    Ok(())
}

#[test]
fn test_delete_unknown_id_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let ledger = dir.path().join("ledger.json");
    add(&ledger, "Ram", "received", "100", "only entry");

    ledger_cmd(&ledger)
        .args(["delete", "txn_does_not_exist", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no transaction with id"));

    Ok(())
}
