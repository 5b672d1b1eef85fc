// src/core/testutils.rs
use crate::core::devnet_config::{AccountsConfig, NetworkProfile};
use crate::core::devnet_types::Hardfork;

/// Mnemonic der Goerli-Devnet-Profile.
pub const GOERLI_MNEMONIC: &str =
    "clutch captain shoe salt awake harvest setup primary inmate ugly among become";

/// Allgemein bekannter Entwicklungs-Mnemonic (Konto 0: 0xf39F…2266).
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

pub const GOERLI_CONFIG_JSON: &str = r#"{
  "solidity": "0.7.3",
  "defaultNetwork": "hardhat",
  "networks": {
    "hardhat": {
      "chainId": 5,
      "blockGasLimit": 15000000,
      "hardfork": "london",
      "accounts": {
        "mnemonic": "clutch captain shoe salt awake harvest setup primary inmate ugly among become",
        "count": 105
      }
    }
  }
}"#;

pub const GOERLI_INTERVAL_CONFIG_TOML: &str = r#"
solidity = "0.7.3"
defaultNetwork = "hardhat"

[networks.hardhat]
chainId = 5
blockGasLimit = 15000000
hardfork = "london"

[networks.hardhat.mining]
auto = false
interval = 1000

[networks.hardhat.accounts]
mnemonic = "clutch captain shoe salt awake harvest setup primary inmate ugly among become"
count = 105
"#;

pub fn goerli_profile() -> NetworkProfile {
    NetworkProfile::new(5, 15_000_000, Hardfork::London, AccountsConfig::new(GOERLI_MNEMONIC, 105))
}

pub fn local_profile(count: u32) -> NetworkProfile {
    NetworkProfile::new(31_337, 30_000_000, Hardfork::latest(), AccountsConfig::new(TEST_MNEMONIC, count))
}
