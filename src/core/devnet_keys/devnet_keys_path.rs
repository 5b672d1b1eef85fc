// src/core/devnet_keys/devnet_keys_path.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::core::error::DevnetError;

pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Standardpfad für EVM-Konten (BIP-44, Coin-Type 60).
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildIndex(u32);

impl ChildIndex {
    #[inline]
    pub fn normal(index: u32) -> Result<Self, DevnetError> {
        if index >= HARDENED_OFFSET {
            return Err(DevnetError::Validation(format!("Child index {} exceeds 2^31 - 1", index)));
        }
        Ok(ChildIndex(index))
    }

    #[inline]
    pub fn hardened(index: u32) -> Result<Self, DevnetError> {
        Ok(ChildIndex(Self::normal(index)?.0 | HARDENED_OFFSET))
    }

    #[inline]
    pub fn is_hardened(&self) -> bool {
        self.0 & HARDENED_OFFSET != 0
    }

    /// Rohwert inklusive Hardened-Bit, wie er in die HMAC-Eingabe geht.
    #[inline]
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hardened() {
            write!(f, "{}'", self.0 & !HARDENED_OFFSET)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    components: Vec<ChildIndex>,
}

impl DerivationPath {
    #[inline]
    pub fn components(&self) -> &[ChildIndex] {
        &self.components
    }

    /// Neuer Pfad mit angehängtem, nicht gehärtetem Index.
    pub fn child(&self, index: u32) -> Result<Self, DevnetError> {
        let mut components = self.components.clone();
        components.push(ChildIndex::normal(index)?);
        Ok(DerivationPath { components })
    }
}

impl FromStr for DerivationPath {
    type Err = DevnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split('/');
        match segments.next() {
            Some("m") | Some("M") => {}
            _ => return Err(DevnetError::ParseError(format!("Derivation path '{}' must start with 'm'", s))),
        }
        let mut components = Vec::new();
        for segment in segments {
            let (digits, hardened) = match segment.strip_suffix('\'').or_else(|| segment.strip_suffix('h')) {
                Some(rest) => (rest, true),
                None => (segment, false),
            };
            let index: u32 = digits.parse().map_err(|_| {
                DevnetError::ParseError(format!("Invalid segment '{}' in derivation path '{}'", segment, s))
            })?;
            components.push(if hardened { ChildIndex::hardened(index)? } else { ChildIndex::normal(index)? });
        }
        Ok(DerivationPath { components })
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
