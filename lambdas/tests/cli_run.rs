//! CLI tests for the `lambdas` binary.
//!
//! Spawns the binary and checks stdout contents and exit codes.

use std::process::{Command, Output};

use lambdas::exit_codes;
use lambdas::test_support::write_config_fixture;
use lambdas::transcript::{Entry, Section};

fn lambdas(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lambdas"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn lambdas")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn no_arguments_prints_thirteen_lines_and_exits_ok() {
    let output = lambdas(&[]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let rule = "===============================================================================";
    assert_eq!(
        stdout_lines(&output),
        [
            rule,
            "=== Testing and training lambda expressions.                                ===",
            rule,
            "Code within lambda1 expression ",
            "Code within lambda2 expression ",
            "Code within lambda3 expression ",
            "Code within lambda4 expression ",
            "sum of 1 and 2 is: 3",
            "Number of elements greater than 5 is: 11",
            "Number of elements greater than 5 is: 11",
            "Number of elements greater than 5 is: 11",
            "Capture x by value: x=1",
            "Capture x by reference: x=13",
        ]
    );
}

#[test]
fn run_subcommand_matches_default_output() {
    assert_eq!(lambdas(&["run"]).stdout, lambdas(&[]).stdout);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_lambdas"))
        .env("RUST_LOG", "lambdas=debug")
        .output()
        .expect("spawn lambdas");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output).len(), 13);
}

#[test]
fn json_format_tags_each_line() {
    let output = lambdas(&["run", "--format", "json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let entries: Vec<Entry> = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(entries.len(), 13);
    assert_eq!(entries[7].section, Section::Sum);
    assert_eq!(entries[12].text, "Capture x by reference: x=13");
}

#[test]
fn config_file_overrides_inputs() {
    let (_temp, path) = write_config_fixture(
        "numbers = [10, 20]\n\n[capture]\ninitial = 4\nreassigned = 8\n",
    )
    .expect("fixture");
    let output = lambdas(&["run", "--config", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let lines = stdout_lines(&output);
    assert_eq!(lines[8], "Number of elements greater than 5 is: 2");
    assert_eq!(lines[11], "Capture x by value: x=4");
    assert_eq!(lines[12], "Capture x by reference: x=8");
}

#[test]
fn invalid_config_exits_with_invalid_code() {
    let (_temp, path) =
        write_config_fixture("[capture]\ninitial = 3\nreassigned = 3\n").expect("fixture");
    let output = lambdas(&["run", "--config", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load demo config"));
    assert!(stderr.contains("capture.reassigned must differ"));
}

#[test]
fn missing_config_path_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("typo.toml");
    let output = lambdas(&["run", "--config", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("typo.toml not found"));
}

#[test]
fn config_subcommand_prints_effective_toml() {
    let output = lambdas(&["config"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("reassigned = 13"));
    assert!(stdout.contains("[sum]"));
}
