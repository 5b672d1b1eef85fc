// src/core/mod.rs
pub mod devnet_config;
pub mod devnet_types;
pub mod devnet_keys;
pub mod devnet_mining;
pub mod error;
pub mod testutils;

pub use devnet_config::{DevnetConfig, NetworkProfile, MiningConfig, AccountsConfig, BlockInterval};
pub use devnet_types::{Hardfork, KnownChain, SolcVersion, Address};
pub use devnet_keys::{derive_accounts, env_lines, DevAccount, DerivationPath, ExtendedPrivateKey};
pub use devnet_mining::{BlockCadence, BlockTrigger, PendingTransaction, ProducedBlock};
pub use error::DevnetError;

use std::path::Path;

/// Geladenes, überschriebenes und validiertes Profil samt Namen.
#[derive(Debug, Clone)]
pub struct ActiveNetwork {
    name: String,
    config: DevnetConfig,
}

impl ActiveNetwork {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn config(&self) -> &DevnetConfig {
        &self.config
    }

    #[inline]
    pub fn profile(&self) -> &NetworkProfile {
        // Name wurde beim Laden gegen `networks` geprüft
        &self.config.networks[&self.name]
    }

    /// Konten des aktiven Profils; die Konfiguration ist bereits validiert.
    pub fn derive_accounts(&self) -> Result<Vec<DevAccount>, DevnetError> {
        devnet_keys::devnet_keys_accounts::derive_validated_accounts(&self.profile().accounts)
    }
}

/// Lädt die Konfiguration, wendet `DEVNET_*` an und validiert das Ganze.
pub fn initialize_core<P: AsRef<Path>>(path: P, network: Option<&str>) -> Result<ActiveNetwork, DevnetError> {
    let mut config = DevnetConfig::from_path(path)?;
    let name = config.active_profile(network)?.0;
    config.apply_env_overrides(&name)?;
    config.validate()?;
    log::info!("Devnet core initialized: network {} ({})", name, config);
    Ok(ActiveNetwork { name, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutils::GOERLI_CONFIG_JSON;

    #[test]
    fn test_core_initialization() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        std::fs::write(&path, GOERLI_CONFIG_JSON).unwrap();
        let active = initialize_core(&path, Some("hardhat")).unwrap();
        assert_eq!(active.name(), "hardhat");
        assert_eq!(active.profile().hardfork, Hardfork::London);
    }

    #[test]
    fn test_core_unknown_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        std::fs::write(&path, GOERLI_CONFIG_JSON).unwrap();
        let err = initialize_core(&path, Some("sepolia")).unwrap_err();
        assert_eq!(err, DevnetError::UnknownNetwork("sepolia".into()));
    }

    #[test]
    fn test_active_network_accounts_match_direct_derivation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        std::fs::write(&path, GOERLI_CONFIG_JSON).unwrap();
        let active = initialize_core(&path, Some("hardhat")).unwrap();
        let accounts = active.derive_accounts().unwrap();
        assert_eq!(accounts.len(), 105);
        assert_eq!(accounts, derive_accounts(&active.profile().accounts).unwrap());
    }
}
