//! Runs the `untron` binary without compiled contracts

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Non-routable endpoint: any request would hang or fail with a network error
const UNREACHABLE_RPC: &str = "http://10.255.255.1:8011";

fn run_untron(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.json");
    fs::write(
        &config,
        format!(
            r#"{{"untron_core_address": "0x1111111111111111111111111111111111111111", "zksync_rpc": "{UNREACHABLE_RPC}", "private_key": "0x7726827caac94a7f9e1b160f7ea819f172f7b6f9d2a97f992c38edeab82d4110"}}"#
        ),
    )
    .unwrap();
    let artifacts = dir.join("zkout");
    fs::create_dir_all(&artifacts).unwrap();

    Command::new(env!("CARGO_BIN_EXE_untron"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .arg("--artifacts")
        .arg(&artifacts)
        .env_remove("ZKSYNC_RPC")
        .env_remove("PRIVATE_KEY")
        .env_remove("UNTRON_CONFIG")
        .env_remove("UNTRON_ARTIFACTS")
        .output()
        .expect("failed to run untron")
}

fn assert_missing_artifact(output: &Output, file: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains(file), "stderr does not name {file}: {stderr}");
    assert!(!stderr.contains("Failed to fetch"), "unexpected network error: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_read_command_exits_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_untron(dir.path(), &["blockId"]);
    assert_missing_artifact(&output, "UntronCore.json");
}

#[test]
fn test_write_command_exits_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_untron(
        dir.path(),
        &[
            "stopOrder",
            "--orderId",
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        ],
    );
    assert_missing_artifact(&output, "UntronCore.json");
}

#[test]
fn test_deploy_exits_before_connecting() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_untron(dir.path(), &["deploy"]);
    assert_missing_artifact(&output, "UntronCore.json");

    // the config file is left untouched
    let config = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("0x1111111111111111111111111111111111111111"));
}

#[test]
fn test_mint_needs_mock_usdt_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_untron(
        dir.path(),
        &["mintMockUSDT", "--address", "0x2222222222222222222222222222222222222222"],
    );
    assert_missing_artifact(&output, "MockUSDT.json");
}
