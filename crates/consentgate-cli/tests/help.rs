use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the consentgate binary.
#[allow(deprecated)]
fn consentgate_cmd() -> Command {
    Command::cargo_bin("consentgate").unwrap()
}

#[test]
fn help_works() {
    consentgate_cmd().arg("--help").assert().success();
}

#[test]
fn help_lists_subcommands() {
    consentgate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("check")
                .and(predicate::str::contains("ads"))
                .and(predicate::str::contains("purposes"))
                .and(predicate::str::contains("explain")),
        );
}
