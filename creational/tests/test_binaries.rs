//! End-to-end runs of the demo binaries.

use std::process::Command;

use creational::demo::SINGLETON_WORKS;

fn run(exe: &str, args: &[&str]) -> (bool, String) {
    let output = Command::new(exe)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("utf-8 stdout"),
    )
}

#[test]
fn singleton_prints_the_same_instance_line() {
    let (ok, stdout) = run(env!("CARGO_BIN_EXE_singleton"), &[]);
    assert!(ok);
    assert_eq!(stdout, format!("{SINGLETON_WORKS}\n"));
}

#[test]
fn contention_cli_passes_for_race_free_strategies() {
    let (ok, stdout) = run(
        env!("CARGO_BIN_EXE_singleton-probe"),
        &[
            "--threads", "100", "--trials", "10", "-s", "once", "-s", "locked", "-s", "eager",
        ],
    );
    assert!(ok, "{stdout}");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.ends_with("=> ok")), "{stdout}");
}

#[test]
fn contention_cli_rejects_zero_threads() {
    let (ok, _) = run(env!("CARGO_BIN_EXE_singleton-probe"), &["--threads", "0"]);
    assert!(!ok);
}

#[test]
fn contention_cli_rejects_zero_trials() {
    let (ok, stdout) = run(env!("CARGO_BIN_EXE_singleton-probe"), &["--trials", "0"]);
    assert!(!ok);
    assert!(stdout.is_empty(), "{stdout}");
}

#[test]
fn contention_cli_rejects_more_threads_than_supported() {
    let (ok, stdout) = run(env!("CARGO_BIN_EXE_singleton-probe"), &["--threads", "100000"]);
    assert!(!ok);
    assert!(stdout.is_empty(), "{stdout}");
}

#[test]
fn builder_lists_products() {
    let (ok, stdout) = run(env!("CARGO_BIN_EXE_builder"), &[]);
    assert!(ok);
    assert!(stdout.contains("Product parts: PartA1, PartB1, PartC1"));
}

#[test]
fn prototype_calls_both_clones() {
    let (ok, stdout) = run(env!("CARGO_BIN_EXE_prototype"), &[]);
    assert!(ok);
    assert!(stdout.contains("Call Method from PROTOTYPE_1 with field : 90"));
    assert!(stdout.contains("Call Method from PROTOTYPE_2 with field : 10"));
}
