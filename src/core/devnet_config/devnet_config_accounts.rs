// src/core/devnet_config/devnet_config_accounts.rs

use bip39::{Language, Mnemonic};
use log::warn;
use serde::{Serialize, Deserialize};
use sha2::Sha512;
use crate::core::devnet_keys::devnet_keys_path::{DerivationPath, DEFAULT_DERIVATION_PATH, HARDENED_OFFSET};
use crate::core::error::DevnetError;

/// 10 000 Ether in Wei, Startguthaben jedes abgeleiteten Kontos.
pub const DEFAULT_ACCOUNTS_BALANCE: &str = "10000000000000000000000";

/// Obergrenze für `accounts.count`; jedes Konto kostet eine BIP-32-Ableitung.
pub const MAX_ACCOUNT_COUNT: u32 = 100_000;

const SEED_ROUNDS: u32 = 2048;
const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

fn default_path() -> DerivationPath {
    DEFAULT_DERIVATION_PATH.parse().unwrap_or_default()
}

fn default_accounts_balance() -> String {
    DEFAULT_ACCOUNTS_BALANCE.to_string()
}

/// Deterministische Testkonten: Mnemonic + Anzahl abgeleiteter Konten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountsConfig {
    pub mnemonic: String,
    pub count: u32,
    #[serde(default = "default_path")]
    pub path: DerivationPath,
    #[serde(default)]
    pub initial_index: u32,
    #[serde(default)]
    pub passphrase: String,
    #[serde(default = "default_accounts_balance")]
    pub accounts_balance: String,
}

impl AccountsConfig {
    pub fn new(mnemonic: &str, count: u32) -> Self {
        AccountsConfig {
            mnemonic: mnemonic.to_string(),
            count,
            path: default_path(),
            initial_index: 0,
            passphrase: String::new(),
            accounts_balance: default_accounts_balance(),
        }
    }

    /// Whitespace zusammenfassen, Kleinschreibung; englische Wörter sind ASCII.
    #[inline]
    pub fn normalized_mnemonic(&self) -> String {
        self.mnemonic
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prüft Wortanzahl und Wortliste. Liefert `false`, wenn nur die
    /// BIP-39-Prüfsumme nicht stimmt; solche Phrasen bleiben ableitbar.
    pub fn check_mnemonic(&self) -> Result<bool, DevnetError> {
        let normalized = self.normalized_mnemonic();
        let words: Vec<&str> = normalized.split(' ').filter(|w| !w.is_empty()).collect();
        if !VALID_WORD_COUNTS.contains(&words.len()) {
            return Err(DevnetError::Validation(format!(
                "accounts.mnemonic has {} words, expected one of {:?}",
                words.len(),
                VALID_WORD_COUNTS
            )));
        }
        if let Some(unknown) = words.iter().find(|w| Language::English.find_word(w).is_none()) {
            return Err(DevnetError::Validation(format!(
                "accounts.mnemonic contains '{}', which is not a BIP-39 English word",
                unknown
            )));
        }
        match Mnemonic::parse_in_normalized(Language::English, &normalized) {
            Ok(_) => Ok(true),
            Err(bip39::Error::InvalidChecksum) => {
                warn!("accounts.mnemonic has an invalid BIP-39 checksum, deriving anyway");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// BIP-39 Seed: PBKDF2-HMAC-SHA512 über die normalisierte Phrase.
    /// Setzt eine mit `validate` geprüfte Konfiguration voraus.
    pub fn seed(&self) -> [u8; 64] {
        let salt = format!("mnemonic{}", self.passphrase);
        let mut seed = [0u8; 64];
        pbkdf2::pbkdf2_hmac::<Sha512>(self.normalized_mnemonic().as_bytes(), salt.as_bytes(), SEED_ROUNDS, &mut seed);
        seed
    }

    pub fn balance_wei(&self) -> Result<u128, DevnetError> {
        self.accounts_balance.trim().parse::<u128>().map_err(|_| {
            DevnetError::Validation(format!(
                "accountsBalance '{}' is not a decimal wei amount",
                self.accounts_balance
            ))
        })
    }

    pub fn validate(&self) -> Result<(), DevnetError> {
        if self.count == 0 {
            return Err(DevnetError::Validation("accounts.count must be greater than 0".into()));
        }
        if self.count > MAX_ACCOUNT_COUNT {
            return Err(DevnetError::Validation(format!(
                "accounts.count {} exceeds the maximum of {}",
                self.count, MAX_ACCOUNT_COUNT
            )));
        }
        let end = self.initial_index.checked_add(self.count).ok_or_else(|| {
            DevnetError::Validation("accounts.initialIndex + accounts.count overflows".into())
        })?;
        if end > HARDENED_OFFSET {
            return Err(DevnetError::Validation(format!(
                "accounts index range {}..{} leaves the non-hardened space",
                self.initial_index, end
            )));
        }
        self.check_mnemonic()?;
        self.balance_wei()?;
        Ok(())
    }
}
