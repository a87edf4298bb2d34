use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("paystation"));
    cmd.arg("tests/fixtures/session.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("event,minutes,amount,coins"))
        // 60 cents inserted buys 24 minutes
        .stdout(predicate::str::contains("display,24,,"))
        .stdout(predicate::str::contains("receipt,24,,"))
        // The quarter inserted after the purchase is cancelled
        .stdout(predicate::str::contains("refund,,,25x1"))
        // Only the purchased 60 cents count as earnings
        .stdout(predicate::str::contains("collected,,60,"));

    Ok(())
}
