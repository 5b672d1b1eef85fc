// src/core/devnet_types/devnet_types_solc.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::core::error::DevnetError;

/// Compiler-Version im Format MAJOR.MINOR.PATCH (z. B. "0.7.3").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolcVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SolcVersion {
    #[inline]
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SolcVersion { major, minor, patch }
    }
}

impl FromStr for SolcVersion {
    type Err = DevnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(DevnetError::ParseError(format!(
                "Compiler version '{}' must have the form MAJOR.MINOR.PATCH",
                s
            )));
        }
        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(parts.iter()) {
            *slot = part.parse().map_err(|_| {
                DevnetError::ParseError(format!("Compiler version '{}' has a non-numeric component", s))
            })?;
        }
        Ok(SolcVersion::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl fmt::Display for SolcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for SolcVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SolcVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
