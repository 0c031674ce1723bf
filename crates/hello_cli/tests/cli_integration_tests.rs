use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
#[cfg(target_os = "linux")]
use std::{fs::File, process::Stdio};

fn hello() -> Command {
    let mut cmd = Command::cargo_bin("hello").expect("hello binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_greeting_and_exits_successfully() {
    hello()
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn ignores_arguments() {
    hello()
        .args(["Ada", "--help", "-v", ""])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn same_output_on_every_invocation() {
    let first = hello().output().expect("run hello");
    let second = hello().output().expect("run hello");
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(second.status.code(), Some(0));
}

#[test]
fn diagnostics_stay_on_stderr() {
    hello()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::contains("greeting built"));
}

#[test]
fn invalid_log_filter_falls_back_to_default() {
    hello()
        .env("RUST_LOG", "=not a filter[")
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_still_exits_successfully() {
    let full = File::create("/dev/full").expect("open /dev/full");
    let output = hello()
        .stdout(Stdio::from(full))
        .output()
        .expect("run hello");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("writing greeting to stdout").count(),
        1,
        "stderr: {stderr}"
    );
    assert!(stderr.starts_with("Error: writing greeting to stdout: I/O error: "));
}
