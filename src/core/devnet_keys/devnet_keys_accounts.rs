// src/core/devnet_keys/devnet_keys_accounts.rs

use log::info;
use serde::{Serialize, Deserialize};
use crate::core::devnet_config::AccountsConfig;
use crate::core::devnet_keys::devnet_keys_hd::ExtendedPrivateKey;
use crate::core::devnet_types::Address;
use crate::core::error::DevnetError;

/// Ein abgeleitetes Testkonto.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DevAccount {
    pub index: u32,
    pub path: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_key: String,
    #[serde(with = "wei_string")]
    pub balance: u128,
}

mod wei_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Leitet `count` Konten ab `initial_index` unter `path` ab.
pub fn derive_accounts(config: &AccountsConfig) -> Result<Vec<DevAccount>, DevnetError> {
    config.validate()?;
    derive_validated_accounts(config)
}

/// Wie `derive_accounts`, aber für eine bereits validierte Konfiguration.
pub(crate) fn derive_validated_accounts(config: &AccountsConfig) -> Result<Vec<DevAccount>, DevnetError> {
    let balance = config.balance_wei()?;
    let seed = config.seed();
    let master = ExtendedPrivateKey::master(&seed)?;
    // Elternknoten einmal ableiten, danach nur noch den letzten Schritt
    let parent = master.derive_path(&config.path)?;

    // count ist durch MAX_ACCOUNT_COUNT begrenzt
    let mut accounts = Vec::with_capacity(config.count as usize);
    for offset in 0..config.count {
        let index = config.initial_index + offset;
        let path = config.path.child(index)?;
        let key = parent.derive_child(*path.components().last().ok_or_else(|| {
            DevnetError::Crypto("derived path has no components".into())
        })?)?;
        accounts.push(DevAccount {
            index,
            path: path.to_string(),
            address: key.address(),
            private_key: key.private_key_hex(),
            balance,
        });
    }
    info!(
        "Derived {} accounts under {} starting at index {}",
        accounts.len(),
        config.path,
        config.initial_index
    );
    Ok(accounts)
}

/// `.env`-Zeilen im Stil `<PREFIX>_PK=` / `<PREFIX>_ADDRESS=`.
/// Bei mehreren Konten wird der Kontoindex angehängt.
pub fn env_lines(prefix: &str, accounts: &[DevAccount]) -> Vec<String> {
    let prefix = prefix.trim().to_uppercase();
    let single = accounts.len() == 1;
    let mut lines = Vec::with_capacity(accounts.len() * 2);
    for account in accounts {
        let suffix = if single { String::new() } else { format!("_{}", account.index) };
        lines.push(format!("{}_PK{}={}", prefix, suffix, account.private_key));
        lines.push(format!("{}_ADDRESS{}={}", prefix, suffix, account.address));
    }
    lines
}
