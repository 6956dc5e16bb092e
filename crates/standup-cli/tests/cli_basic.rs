//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data file and verify
//! outputs.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_cli(data_file: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_standup"))
        .arg("--data-file")
        .arg(data_file)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_submit_then_history() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("submissions.json");

    let (stdout, stderr, code) = run_cli(
        &data_file,
        &[
            "submit",
            "--user",
            "alice",
            "--progress",
            "wrote the intro",
            "--question",
            "which dataset?",
        ],
    );
    assert_eq!(code, 0, "submit failed: {stderr}");
    assert!(stdout.contains("alice"));

    let (stdout, _, code) = run_cli(&data_file, &["history", "--days", "7"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("wrote the intro"));
}

#[test]
fn test_submit_rejects_blank_fields() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("submissions.json");

    let (_, stderr, code) = run_cli(
        &data_file,
        &["submit", "--user", "  ", "--progress", "p", "--question", "q"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("user"));
}

#[test]
fn test_pick_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("submissions.json");

    for user in ["alice", "bob", "carol"] {
        let (_, stderr, code) = run_cli(
            &data_file,
            &["submit", "--user", user, "--progress", "p", "--question", "q"],
        );
        assert_eq!(code, 0, "submit failed: {stderr}");
    }

    let (first, _, code) = run_cli(&data_file, &["pick", "--days", "7", "--seed", "42"]);
    assert_eq!(code, 0);
    let (second, _, _) = run_cli(&data_file, &["pick", "--days", "7", "--seed", "42"]);
    assert_eq!(first, second);
}

#[test]
fn test_pick_over_empty_store_reports_nothing_to_sample() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("submissions.json");

    let (stdout, _, code) = run_cli(&data_file, &["pick", "--days", "7"]);
    assert_eq!(code, 0, "an empty window is not an error");
    assert!(stdout.contains("no reports"));
}

#[test]
fn test_import_legacy_day_files() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("submissions.json");
    let legacy_dir = dir.path().join("legacy");
    std::fs::create_dir(&legacy_dir).unwrap();
    std::fs::write(
        legacy_dir.join("0307.md"),
        "同学: 王磊\n*进度: 完成了数据清洗\n*问题: 聚类结果不稳定\n",
    )
    .unwrap();

    let (stdout, stderr, code) = run_cli(
        &data_file,
        &[
            "import",
            "--dir",
            legacy_dir.to_str().unwrap(),
            "--year",
            "2024",
        ],
    );
    assert_eq!(code, 0, "import failed: {stderr}");
    assert!(stdout.contains("imported 1"));

    let (stdout, _, code) = run_cli(&data_file, &["history", "--days", "36500"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("2024-03-07"));
    assert!(stdout.contains("王磊"));
}
