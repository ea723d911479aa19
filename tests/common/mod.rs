use assert_cmd::Command;
use assert_cmd::cargo_bin;
use std::path::Path;

pub fn ledger_cmd(ledger: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("partner-ledger"));
    cmd.arg("--ledger").arg(ledger);
    cmd
}

pub fn add(ledger: &Path, partner: &str, direction: &str, amount: &str, description: &str) {
    let output = ledger_cmd(ledger)
        .args(["add", "--partner", partner, "--direction", direction])
        .args(["--amount", amount, "--date", "2024-01-15"])
        .args(["--description", description])
        .output()
        .expect("failed to run add");
    assert!(output.status.success(), "add failed: {output:?}");
}

/// Runs `add` and returns the id printed as `recorded <id>`.
pub fn add_returning_id(
    ledger: &Path,
    partner: &str,
    direction: &str,
    amount: &str,
    description: &str,
) -> String {
    let output = ledger_cmd(ledger)
        .args(["add", "--partner", partner, "--direction", direction])
        .args(["--amount", amount, "--date", "2024-01-15"])
        .args(["--description", description])
        .output()
        .expect("failed to run add");
    assert!(output.status.success(), "add failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("recorded "))
        .expect("add did not print the new id")
        .trim()
        .to_string()
}
