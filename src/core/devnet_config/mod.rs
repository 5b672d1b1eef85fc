// src/core/devnet_config/mod.rs

use log::{debug, info};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use crate::core::error::DevnetError;

pub mod devnet_config_network;
pub mod devnet_config_mining;
pub mod devnet_config_accounts;

pub use devnet_config_network::*;
pub use devnet_config_mining::*;
pub use devnet_config_accounts::*;

use crate::core::devnet_types::SolcVersion;

pub const DEFAULT_NETWORK: &str = "hardhat";

pub const ENV_NETWORK: &str = "DEVNET_NETWORK";
pub const ENV_CHAIN_ID: &str = "DEVNET_CHAIN_ID";
pub const ENV_BLOCK_GAS_LIMIT: &str = "DEVNET_BLOCK_GAS_LIMIT";
pub const ENV_HARDFORK: &str = "DEVNET_HARDFORK";
pub const ENV_MNEMONIC: &str = "DEVNET_MNEMONIC";
pub const ENV_ACCOUNT_COUNT: &str = "DEVNET_ACCOUNT_COUNT";

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

/// Projektkonfiguration: Compiler-Version, Standardnetzwerk und Netzwerkprofile.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevnetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solidity: Option<SolcVersion>,
    #[serde(default = "default_network")]
    pub default_network: String,
    pub networks: BTreeMap<String, NetworkProfile>,
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, DevnetError> {
    raw.trim()
        .parse()
        .map_err(|_| DevnetError::ParseError(format!("{}='{}' is not a valid value", key, raw)))
}

impl DevnetConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, DevnetError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, DevnetError> {
        Ok(toml::from_str(raw)?)
    }

    /// Lädt `.json` oder `.toml` anhand der Dateiendung.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DevnetError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DevnetError::Io(format!("{}: {}", path.display(), e)))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&raw)?,
            Some("toml") => Self::from_toml_str(&raw)?,
            _ => {
                return Err(DevnetError::ParseError(format!(
                    "{}: unsupported config format, expected .json or .toml",
                    path.display()
                )))
            }
        };
        info!("Loaded devnet config from {} with {} network(s)", path.display(), config.networks.len());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DevnetError> {
        if self.networks.is_empty() {
            return Err(DevnetError::Validation("at least one network profile is required".into()));
        }
        if !self.networks.contains_key(&self.default_network) {
            return Err(DevnetError::Validation(format!(
                "defaultNetwork '{}' does not name a configured network",
                self.default_network
            )));
        }
        for (name, profile) in &self.networks {
            profile.validate(name)?;
        }
        if let Some(solc) = &self.solidity {
            debug!("Compiler rule set {}", solc);
        }
        Ok(())
    }

    /// Reihenfolge: expliziter Name > `lookup(DEVNET_NETWORK)` > `defaultNetwork`.
    pub fn resolve_network_name_with<F>(&self, explicit: Option<&str>, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .map(str::to_string)
            .or_else(|| lookup(ENV_NETWORK).filter(|n| !n.trim().is_empty()))
            .unwrap_or_else(|| self.default_network.clone())
    }

    pub fn active_profile_with<F>(&self, explicit: Option<&str>, lookup: F) -> Result<(String, &NetworkProfile), DevnetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = self.resolve_network_name_with(explicit, lookup);
        let profile = self
            .networks
            .get(&name)
            .ok_or_else(|| DevnetError::UnknownNetwork(name.clone()))?;
        debug!("Active network {} (chainId {})", name, profile.chain_id);
        Ok((name, profile))
    }

    pub fn active_profile(&self, explicit: Option<&str>) -> Result<(String, &NetworkProfile), DevnetError> {
        self.active_profile_with(explicit, |key| std::env::var(key).ok())
    }

    /// Überschreibt Felder eines Profils aus `DEVNET_*`-Werten.
    pub fn apply_overrides_with<F>(&mut self, network: &str, lookup: F) -> Result<usize, DevnetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = self
            .networks
            .get_mut(network)
            .ok_or_else(|| DevnetError::UnknownNetwork(network.to_string()))?;
        let mut applied = 0;
        if let Some(raw) = lookup(ENV_CHAIN_ID) {
            profile.chain_id = parse_env(ENV_CHAIN_ID, &raw)?;
            applied += 1;
        }
        if let Some(raw) = lookup(ENV_BLOCK_GAS_LIMIT) {
            profile.block_gas_limit = parse_env(ENV_BLOCK_GAS_LIMIT, &raw)?;
            applied += 1;
        }
        if let Some(raw) = lookup(ENV_HARDFORK) {
            profile.hardfork = raw.parse()?;
            applied += 1;
        }
        if let Some(raw) = lookup(ENV_MNEMONIC) {
            profile.accounts.mnemonic = raw;
            applied += 1;
        }
        if let Some(raw) = lookup(ENV_ACCOUNT_COUNT) {
            profile.accounts.count = parse_env(ENV_ACCOUNT_COUNT, &raw)?;
            applied += 1;
        }
        if applied > 0 {
            info!("Applied {} environment override(s) to network {}", applied, network);
        }
        Ok(applied)
    }

    pub fn apply_env_overrides(&mut self, network: &str) -> Result<usize, DevnetError> {
        self.apply_overrides_with(network, |key| std::env::var(key).ok())
    }
}

impl fmt::Display for DevnetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solc = self.solidity.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        write!(f, "solidity {}, default network {}, networks [", solc, self.default_network)?;
        for (i, name) in self.networks.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
