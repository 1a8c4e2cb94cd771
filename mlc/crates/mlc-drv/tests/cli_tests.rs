//! CLI Interface E2E Tests
//!
//! These tests run the `mlc-lex` binary against the fixture programs and
//! check the artifacts it writes, its stderr output and its exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A command running in a fresh temporary directory, so the default
/// `lexer.logs` and any `mlc.toml` lookup stay inside it.
fn mlc_lex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mlc-lex").expect("binary should be built");
    cmd.current_dir(dir.path())
        .env_remove("MLC_CONFIG")
        .env_remove("MLC_VERBOSE")
        .env_remove("RUST_LOG")
        .env("MLC_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    mlc_lex(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--log-file")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    mlc_lex(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mlc-lex"));
}

#[test]
fn test_cli_missing_arguments() {
    let dir = TempDir::new().unwrap();
    mlc_lex(&dir).assert().failure();
}

#[test]
fn test_cli_clean_program_writes_artifacts() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("lexer.out");

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error at").not());

    let result = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = result.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0 1 10 ");
    assert_eq!(lines[1], "sum i total ");
    assert!(lines[2].starts_with("1,1,0 1,4,0 1,2,9 2,1,3 "));
    assert!(lines[2].ends_with("9,2,8 10,1,2 10,2,10 "));

    let log = std::fs::read_to_string(dir.path().join("lexer.logs")).unwrap();
    assert!(log.starts_with("[Identificators]\n0: sum\n1: i\n2: total\n\n[Numbers]\n0: 0\n"));
    assert!(log.contains("[Tokens]\n(1,0) : program\n(4,0) : sum\n(2,9) : ;\n"));
}

#[test]
fn test_cli_all_number_formats() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("lexer.out");

    mlc_lex(&dir)
        .arg(fixtures_dir().join("formats.mlc"))
        .arg(&output)
        .assert()
        .success();

    let result = std::fs::read_to_string(&output).unwrap();
    assert_eq!(result.lines().next(), Some("101B 17O 42D 0FFH .5E+2 "));
    assert_eq!(result.lines().nth(1), Some("b o d h f "));
}

#[test]
fn test_cli_errors_block_artifacts() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("lexer.out");

    mlc_lex(&dir)
        .arg(fixtures_dir().join("errors.mlc"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Error at [3,8]: '1.2.3' undefined identifier")
                .and(predicate::str::contains("Error at [4,10]: '#' undefined identifier")),
        );

    assert!(!output.exists());
    assert!(!dir.path().join("lexer.logs").exists());
}

#[test]
fn test_cli_diagnostics_printed_once() {
    let dir = TempDir::new().unwrap();

    let out = mlc_lex(&dir)
        .arg(fixtures_dir().join("errors.mlc"))
        .arg("lexer.out")
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("Error at [3,8]").count(), 1);
    assert_eq!(stderr.matches("Error at [4,10]").count(), 1);
}

#[test]
fn test_cli_latin1_comment_is_accepted() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.mlc");
    std::fs::write(&input, b"program p;\n/* r\xe9sum\xe9 */\nbegin x := 1 end.\n").unwrap();
    let output = dir.path().join("lexer.out");

    mlc_lex(&dir)
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error at").not());

    let result = std::fs::read_to_string(&output).unwrap();
    assert_eq!(result.lines().nth(1), Some("p x "));
    assert!(dir.path().join("lexer.logs").exists());
}

#[test]
fn test_cli_missing_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("lexer.out");

    mlc_lex(&dir)
        .arg(dir.path().join("nope.mlc"))
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:").and(predicate::str::contains("nope.mlc")));

    assert!(!output.exists());
}

#[test]
fn test_cli_io_cause_printed_once() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.mlc");
    let cause = std::fs::read(&missing).unwrap_err().to_string();

    let out = mlc_lex(&dir).arg(&missing).arg("lexer.out").output().unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches(cause.as_str()).count(), 1);
}

#[test]
fn test_cli_custom_log_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("lexer.out");
    let log = dir.path().join("custom.log");

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg(&output)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    assert!(log.exists());
    assert!(!dir.path().join("lexer.logs").exists());
}

#[test]
fn test_cli_log_file_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mlc.toml"),
        "log_file = \"from-config.log\"\n",
    )
    .unwrap();

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg("lexer.out")
        .assert()
        .success();

    assert!(dir.path().join("from-config.log").exists());
    assert!(dir.path().join("lexer.out").exists());
}

#[test]
fn test_cli_explicit_config_missing() {
    let dir = TempDir::new().unwrap();

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg("lexer.out")
        .arg("--config")
        .arg("missing.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_cli_malformed_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "verbose = [").unwrap();

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg("lexer.out")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_cli_verbose_logs_lines() {
    let dir = TempDir::new().unwrap();

    mlc_lex(&dir)
        .arg(fixtures_dir().join("sum.mlc"))
        .arg("lexer.out")
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("scanned line"));
}
