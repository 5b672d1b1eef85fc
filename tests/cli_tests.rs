// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

fn devnet() -> Command {
    let mut cmd = Command::cargo_bin("inferno-devnet").unwrap();
    cmd.env("RUST_LOG", "warn")
        .env_remove("DEVNET_NETWORK")
        .env_remove("DEVNET_CHAIN_ID")
        .env_remove("DEVNET_BLOCK_GAS_LIMIT")
        .env_remove("DEVNET_HARDFORK")
        .env_remove("DEVNET_MNEMONIC")
        .env_remove("DEVNET_ACCOUNT_COUNT");
    cmd
}

fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_validate_fixtures() {
    devnet()
        .arg("validate")
        .arg(fixture("goerli.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: solidity 0.7.3"))
        .stdout(predicate::str::contains("chainId 5, hardfork london, 105 accounts"));

    devnet()
        .arg("validate")
        .arg(fixture("goerli-interval.toml"))
        .assert()
        .success();
}

#[test]
fn test_validate_rejects_disabled_block_production() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "broken.json",
        r#"{
          "networks": {
            "hardhat": {
              "chainId": 5,
              "blockGasLimit": 15000000,
              "hardfork": "london",
              "mining": { "auto": false },
              "accounts": {
                "mnemonic": "test test test test test test test test test test test junk",
                "count": 1
              }
            }
          }
        }"#,
    );
    devnet()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no block would ever be produced"));
}

#[test]
fn test_validate_rejects_unknown_hardfork() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fork.toml",
        r#"
[networks.hardhat]
chainId = 5
blockGasLimit = 15000000
hardfork = "atlantis"

[networks.hardhat.accounts]
mnemonic = "test test test test test test test test test test test junk"
count = 1
"#,
    );
    devnet()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("atlantis"));
}

#[test]
fn test_env_override_and_unknown_network() {
    devnet()
        .env("DEVNET_CHAIN_ID", "31337")
        .arg("show")
        .arg(fixture("goerli.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chainId\": 31337"));

    devnet()
        .arg("show")
        .arg(fixture("goerli.json"))
        .arg("--network")
        .arg("sepolia")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown network: sepolia"));
}

#[test]
fn test_accounts_listing() {
    devnet()
        .env("DEVNET_MNEMONIC", "test test test test test test test test test test test junk")
        .env("DEVNET_ACCOUNT_COUNT", "2")
        .arg("accounts")
        .arg(fixture("goerli.json"))
        .arg("--show-keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
        .stdout(predicate::str::contains("0x70997970C51812dc3A010C7d01b50e0d17dc79C8"))
        .stdout(predicate::str::contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"));

    let output = devnet()
        .arg("accounts")
        .arg(fixture("goerli.json"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let accounts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let accounts = accounts.as_array().unwrap();
    assert_eq!(accounts.len(), 105);
    assert!(accounts[0].get("privateKey").is_none());
}

#[test]
fn test_mine_interval_and_auto() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "fast.toml",
        r#"
[networks.hardhat]
chainId = 31337
blockGasLimit = 30000000
hardfork = "shanghai"

[networks.hardhat.mining]
auto = false
interval = 20

[networks.hardhat.accounts]
mnemonic = "test test test test test test test test test test test junk"
count = 1
"#,
    );
    devnet()
        .arg("mine")
        .arg(&path)
        .arg("--blocks")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("block 1 Interval txs=0"))
        .stdout(predicate::str::contains("block 2 Interval"));

    devnet()
        .arg("mine")
        .arg(fixture("goerli.json"))
        .arg("--blocks")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("block 3 Transaction txs=1 gas=21000"));
}

#[test]
fn test_dotenv_file_overrides_profile() {
    let dir = TempDir::new().unwrap();
    let config = std::fs::read_to_string(fixture("goerli.json")).unwrap();
    let path = write_config(&dir, "devnet.json", &config);
    write_config(
        &dir,
        ".env",
        "DEVNET_MNEMONIC=\"test test test test test test test test test test test junk\"\n\
         DEVNET_ACCOUNT_COUNT=1\n\
         DEVNET_BLOCK_GAS_LIMIT=30000000\n",
    );

    devnet()
        .current_dir(dir.path())
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"blockGasLimit\": 30000000"))
        .stdout(predicate::str::contains("\"count\": 1"));

    devnet()
        .current_dir(dir.path())
        .arg("accounts")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
        .stdout(predicate::str::contains("0x70997970C51812dc3A010C7d01b50e0d17dc79C8").not());
}

#[test]
fn test_accounts_env_output() {
    devnet()
        .env("DEVNET_MNEMONIC", "test test test test test test test test test test test junk")
        .env("DEVNET_ACCOUNT_COUNT", "1")
        .arg("accounts")
        .arg(fixture("goerli.json"))
        .arg("--env")
        .arg("goerli")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "GOERLI_PK=0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        ))
        .stdout(predicate::str::contains("GOERLI_ADDRESS=0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));

    devnet()
        .arg("accounts")
        .arg(fixture("goerli.json"))
        .arg("--env")
        .arg("GOERLI")
        .arg("--json")
        .assert()
        .failure();
}

#[test]
fn test_accounts_rejects_oversized_count() {
    devnet()
        .env("DEVNET_ACCOUNT_COUNT", "2000000000")
        .arg("accounts")
        .arg(fixture("goerli.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_network_from_environment() {
    devnet()
        .env("DEVNET_NETWORK", "sepolia")
        .arg("validate")
        .arg(fixture("goerli.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown network: sepolia"));
}
