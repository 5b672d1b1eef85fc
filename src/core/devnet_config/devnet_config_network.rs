// src/core/devnet_config/devnet_config_network.rs

use log::{debug, info, warn};
use serde::{Serialize, Deserialize};
use crate::core::devnet_config::devnet_config_accounts::AccountsConfig;
use crate::core::devnet_config::devnet_config_mining::MiningConfig;
use crate::core::devnet_types::{Hardfork, KnownChain};
use crate::core::error::DevnetError;

/// Intrinsische Gaskosten der billigsten Transaktion.
pub const MIN_BLOCK_GAS_LIMIT: u64 = 21_000;

/// Ein Netzwerkprofil: Chain-Identität, Gas-Obergrenze, Hardfork, Mining, Konten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub block_gas_limit: u64,
    pub hardfork: Hardfork,
    #[serde(default)]
    pub mining: MiningConfig,
    pub accounts: AccountsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_base_fee_per_gas: Option<u64>,
    #[serde(default)]
    pub allow_unlimited_contract_size: bool,
}

impl NetworkProfile {
    pub fn new(chain_id: u64, block_gas_limit: u64, hardfork: Hardfork, accounts: AccountsConfig) -> Self {
        NetworkProfile {
            chain_id,
            block_gas_limit,
            hardfork,
            mining: MiningConfig::default(),
            accounts,
            initial_base_fee_per_gas: None,
            allow_unlimited_contract_size: false,
        }
    }

    #[inline]
    pub fn known_chain(&self) -> Option<KnownChain> {
        KnownChain::from_chain_id(self.chain_id)
    }

    pub fn validate(&self, name: &str) -> Result<(), DevnetError> {
        let scoped = |e: DevnetError| match e {
            DevnetError::Validation(msg) => DevnetError::Validation(format!("networks.{}: {}", name, msg)),
            other => other,
        };

        if self.chain_id == 0 {
            return Err(scoped(DevnetError::Validation("chainId must be non-zero".into())));
        }
        if self.block_gas_limit < MIN_BLOCK_GAS_LIMIT {
            return Err(scoped(DevnetError::Validation(format!(
                "blockGasLimit {} is below the minimum of {}",
                self.block_gas_limit, MIN_BLOCK_GAS_LIMIT
            ))));
        }
        if self.initial_base_fee_per_gas.is_some() && !self.hardfork.supports_eip1559() {
            return Err(scoped(DevnetError::Validation(format!(
                "initialBaseFeePerGas requires london or later, hardfork is {}",
                self.hardfork
            ))));
        }
        self.mining.validate().map_err(scoped)?;
        self.accounts.validate().map_err(scoped)?;

        match self.known_chain() {
            Some(KnownChain::Mainnet) => {
                warn!("Network {} reuses the mainnet chainId 1; signed transactions are replayable", name)
            }
            Some(chain) => debug!("Network {} uses known chain {}", name, chain),
            None => debug!("Network {} uses custom chainId {}", name, self.chain_id),
        }
        info!(
            "Validated network {}: chainId={}, blockGasLimit={}, hardfork={}, accounts={}",
            name, self.chain_id, self.block_gas_limit, self.hardfork, self.accounts.count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutils::{goerli_profile, TEST_MNEMONIC};

    #[test]
    fn test_profile_valid() {
        let _ = env_logger::builder().is_test(true).try_init();
        let profile = goerli_profile();
        assert!(profile.validate("hardhat").is_ok());
        assert_eq!(profile.known_chain(), Some(KnownChain::Goerli));
    }

    #[test]
    fn test_profile_invalid_values() {
        let mut profile = goerli_profile();
        profile.chain_id = 0;
        let err = profile.validate("hardhat").unwrap_err();
        assert!(err.to_string().contains("networks.hardhat"));

        let mut profile = goerli_profile();
        profile.block_gas_limit = 20_999;
        assert!(profile.validate("hardhat").is_err());

        let mut profile = NetworkProfile::new(31_337, 30_000_000, Hardfork::Berlin, AccountsConfig::new(TEST_MNEMONIC, 20));
        assert!(profile.validate("local").is_ok());
        profile.initial_base_fee_per_gas = Some(1_000_000_000);
        assert!(profile.validate("local").is_err());
        profile.hardfork = Hardfork::London;
        assert!(profile.validate("local").is_ok());
    }

    #[test]
    fn test_profile_required_fields() {
        let missing_hardfork = format!(
            r#"{{"chainId": 5, "blockGasLimit": 15000000, "accounts": {{"mnemonic": "{}", "count": 1}}}}"#,
            TEST_MNEMONIC
        );
        assert!(serde_json::from_str::<NetworkProfile>(&missing_hardfork).is_err());

        let wrong_type = format!(
            r#"{{"chainId": "five", "blockGasLimit": 15000000, "hardfork": "london", "accounts": {{"mnemonic": "{}", "count": 1}}}}"#,
            TEST_MNEMONIC
        );
        assert!(serde_json::from_str::<NetworkProfile>(&wrong_type).is_err());
    }
}
